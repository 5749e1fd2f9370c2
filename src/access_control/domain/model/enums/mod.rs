pub mod access_control_domain_error;
pub mod grant_scope;
