pub mod external_object_list_handler_registry;
pub mod external_object_list_options;
