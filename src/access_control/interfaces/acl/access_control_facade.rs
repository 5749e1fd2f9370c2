use async_trait::async_trait;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Debug)]
pub struct AccessControlRestrictionRequest {
    pub principal_id: String,
    pub permission_name: String,
    pub object_type: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessControlObjectRestriction {
    Unrestricted,
    Only(Vec<String>),
}

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    async fn restricted_object_ids(
        &self,
        request: AccessControlRestrictionRequest,
    ) -> Result<AccessControlObjectRestriction, AccessControlDomainError>;
}
