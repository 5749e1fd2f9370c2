pub mod external_object_list_domain_error;
