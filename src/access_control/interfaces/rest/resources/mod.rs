pub mod access_control_entry_resource;
pub mod access_control_error_response_resource;
pub mod assign_role_request_resource;
pub mod grant_access_request_resource;
