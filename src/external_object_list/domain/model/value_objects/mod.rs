pub mod id_list;
pub mod model_descriptor;
pub mod object_query_set;
pub mod permission_name;
pub mod request_principal;
pub mod validated_input;
