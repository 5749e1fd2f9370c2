pub mod resolve_external_object_list_query;
