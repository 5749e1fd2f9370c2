pub mod external_object_list_query_service_impl;
