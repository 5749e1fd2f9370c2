use async_trait::async_trait;
use uuid::Uuid;

use crate::access_control::domain::model::{
    entities::access_control_entry::AccessControlEntry,
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{object_type::ObjectType, permission_name::PermissionName},
};

#[async_trait]
pub trait AccessControlEntryRepository: Send + Sync {
    async fn save_entry(&self, entry: &AccessControlEntry) -> Result<(), AccessControlDomainError>;

    async fn find_entry_by_id(
        &self,
        entry_id: Uuid,
    ) -> Result<Option<AccessControlEntry>, AccessControlDomainError>;

    async fn has_global_grant(
        &self,
        permission_name: &PermissionName,
        role_names: &[String],
    ) -> Result<bool, AccessControlDomainError>;

    async fn find_granted_object_ids(
        &self,
        permission_name: &PermissionName,
        object_type: &ObjectType,
        role_names: &[String],
    ) -> Result<Vec<String>, AccessControlDomainError>;
}
