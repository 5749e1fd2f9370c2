use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ResolveExternalObjectListRequestResource {
    #[validate(custom(function = "validate_object_input"))]
    pub input: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResolveExternalObjectListResponseResource {
    pub handler: String,
    pub id_list: Vec<String>,
    pub objects: Vec<Value>,
}

fn validate_object_input(input: &Value) -> Result<(), validator::ValidationError> {
    if input.is_object() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("input_must_be_object"))
    }
}
