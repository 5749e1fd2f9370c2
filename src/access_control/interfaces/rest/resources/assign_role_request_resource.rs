use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Gives a principal a role. Assigning a role the principal already holds
/// succeeds without changes.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AssignRoleRequestResource {
    #[validate(length(min = 1, max = 255))]
    pub principal_id: String,
    #[validate(length(min = 1, max = 64))]
    pub role_name: String,
}
