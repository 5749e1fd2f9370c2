use async_trait::async_trait;

use crate::external_object_list::{
    domain::model::{
        enums::external_object_list_domain_error::ExternalObjectListDomainError,
        value_objects::{
            object_query_set::ObjectQuerySet, permission_name::PermissionName,
            request_principal::RequestPrincipal,
        },
    },
    interfaces::acl::access_control_facade::AccessControlFacade,
};

pub struct AccessControlFacadeAllowAllImpl;

impl AccessControlFacadeAllowAllImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccessControlFacadeAllowAllImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeAllowAllImpl {
    async fn restrict(
        &self,
        _permission: &PermissionName,
        collection: ObjectQuerySet,
        _principal: &RequestPrincipal,
    ) -> Result<ObjectQuerySet, ExternalObjectListDomainError> {
        Ok(collection)
    }
}
