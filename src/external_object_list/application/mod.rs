pub mod acl;
pub mod query_services;
