use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    access_control::{
        domain::model::enums::access_control_domain_error::AccessControlDomainError,
        interfaces::acl::access_control_facade::{
            AccessControlFacade as AccessControlBcFacade, AccessControlObjectRestriction,
            AccessControlRestrictionRequest,
        },
    },
    external_object_list::{
        domain::model::{
            enums::external_object_list_domain_error::ExternalObjectListDomainError,
            value_objects::{
                object_query_set::ObjectQuerySet, permission_name::PermissionName,
                request_principal::RequestPrincipal,
            },
        },
        interfaces::acl::access_control_facade::AccessControlFacade,
    },
};

pub struct AccessControlFacadeRealImpl {
    facade: Arc<dyn AccessControlBcFacade>,
}

impl AccessControlFacadeRealImpl {
    pub fn new(facade: Arc<dyn AccessControlBcFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeRealImpl {
    async fn restrict(
        &self,
        permission: &PermissionName,
        collection: ObjectQuerySet,
        principal: &RequestPrincipal,
    ) -> Result<ObjectQuerySet, ExternalObjectListDomainError> {
        let restriction = self
            .facade
            .restricted_object_ids(AccessControlRestrictionRequest {
                principal_id: principal.value().to_string(),
                permission_name: permission.value().to_string(),
                object_type: collection.model().name().to_string(),
            })
            .await
            .map_err(map_access_control_error)?;

        match restriction {
            AccessControlObjectRestriction::Unrestricted => Ok(collection),
            AccessControlObjectRestriction::Only(object_ids) => {
                debug!(
                    permission = permission.value(),
                    principal = principal.value(),
                    granted = object_ids.len(),
                    "collection narrowed by access control"
                );
                Ok(collection.filter_by_pk_in(object_ids))
            }
        }
    }
}

/// Rejected inputs keep their meaning: a bad principal is the caller's fault,
/// a bad permission or object type is the handler's. Only infrastructure
/// failures make access control unavailable.
fn map_access_control_error(error: AccessControlDomainError) -> ExternalObjectListDomainError {
    match error {
        AccessControlDomainError::InvalidPrincipalId => {
            ExternalObjectListDomainError::InvalidPrincipal
        }
        AccessControlDomainError::InvalidPermissionName => {
            ExternalObjectListDomainError::InvalidPermissionName
        }
        AccessControlDomainError::InvalidObjectType => {
            ExternalObjectListDomainError::InvalidModelDescriptor
        }
        AccessControlDomainError::InfrastructureError(message) => {
            ExternalObjectListDomainError::AccessControlUnavailable(message)
        }
        other => ExternalObjectListDomainError::InfrastructureError(other.to_string()),
    }
}
