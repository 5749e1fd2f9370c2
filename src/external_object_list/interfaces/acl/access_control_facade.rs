use async_trait::async_trait;

use crate::external_object_list::domain::model::{
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    value_objects::{
        object_query_set::ObjectQuerySet, permission_name::PermissionName,
        request_principal::RequestPrincipal,
    },
};

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// Narrows `collection` to the objects `principal` may access under
    /// `permission`. The result never contains objects outside `collection`.
    async fn restrict(
        &self,
        permission: &PermissionName,
        collection: ObjectQuerySet,
        principal: &RequestPrincipal,
    ) -> Result<ObjectQuerySet, ExternalObjectListDomainError>;
}
