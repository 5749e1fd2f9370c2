pub mod assign_role_command;
pub mod grant_access_command;
