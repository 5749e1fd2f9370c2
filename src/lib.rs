pub mod access_control;
pub mod config;
pub mod external_object_list;
pub mod shared;
