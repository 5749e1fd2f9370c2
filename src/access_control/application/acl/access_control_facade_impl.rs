use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::restrict_object_ids_query::RestrictObjectIdsQuery,
        },
        services::access_control_query_service::{AccessControlQueryService, ObjectRestriction},
    },
    interfaces::acl::access_control_facade::{
        AccessControlFacade, AccessControlObjectRestriction, AccessControlRestrictionRequest,
    },
};

pub struct AccessControlFacadeImpl {
    query_service: Arc<dyn AccessControlQueryService>,
}

impl AccessControlFacadeImpl {
    pub fn new(query_service: Arc<dyn AccessControlQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn restricted_object_ids(
        &self,
        request: AccessControlRestrictionRequest,
    ) -> Result<AccessControlObjectRestriction, AccessControlDomainError> {
        let query = RestrictObjectIdsQuery::new(
            request.principal_id,
            request.permission_name,
            request.object_type,
        )?;

        let restriction = self.query_service.handle_restrict_object_ids(query).await?;

        Ok(match restriction {
            ObjectRestriction::Unrestricted => AccessControlObjectRestriction::Unrestricted,
            ObjectRestriction::Only(object_ids) => AccessControlObjectRestriction::Only(object_ids),
        })
    }
}
