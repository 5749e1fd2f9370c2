pub mod access_control_entry;
pub mod role_assignment;
