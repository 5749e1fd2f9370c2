use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_control::domain::model::entities::access_control_entry::AccessControlEntry;

/// Created entry. The response also carries the entry URL under the
/// configured URL field name.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessControlEntryResource {
    pub id: String,
    pub role_name: String,
    pub permission_name: String,
    pub scope: String,
    pub object_type: Option<String>,
    pub object_id: Option<String>,
    pub created_at: String,
}

impl From<&AccessControlEntry> for AccessControlEntryResource {
    fn from(entry: &AccessControlEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            role_name: entry.role_name().value().to_string(),
            permission_name: entry.permission_name().value().to_string(),
            scope: entry.scope().as_str().to_string(),
            object_type: entry.object_type().map(|t| t.value().to_string()),
            object_id: entry.object_id().map(|id| id.value().to_string()),
            created_at: entry.created_at().to_rfc3339(),
        }
    }
}
