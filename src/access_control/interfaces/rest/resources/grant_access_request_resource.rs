use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct GrantAccessRequestResource {
    #[validate(length(min = 1))]
    pub role_name: String,
    #[validate(length(min = 1))]
    pub permission_name: String,
    pub object_type: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub object_id: Option<String>,
}
