pub mod external_object_list_error_response_resource;
pub mod resolve_external_object_list_request_resource;
