pub mod external_object_list_rest_controller;
