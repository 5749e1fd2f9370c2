pub mod object_id;
pub mod object_type;
pub mod permission_name;
pub mod principal_id;
pub mod role_name;
