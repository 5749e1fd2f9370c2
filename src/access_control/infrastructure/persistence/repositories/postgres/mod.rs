pub mod sqlx_access_control_entry_repository_impl;
pub mod sqlx_role_assignment_repository_impl;
