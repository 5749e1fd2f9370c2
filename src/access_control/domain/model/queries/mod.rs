pub mod get_access_control_entry_query;
pub mod restrict_object_ids_query;
