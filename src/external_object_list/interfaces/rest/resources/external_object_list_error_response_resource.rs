use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExternalObjectListErrorResponseResource {
    pub code: String,
    pub message: String,
}
