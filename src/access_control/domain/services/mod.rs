pub mod access_control_command_service;
pub mod access_control_query_service;
