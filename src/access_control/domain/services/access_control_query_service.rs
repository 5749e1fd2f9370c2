use async_trait::async_trait;

use crate::access_control::domain::model::{
    entities::access_control_entry::AccessControlEntry,
    enums::access_control_domain_error::AccessControlDomainError,
    queries::{
        get_access_control_entry_query::GetAccessControlEntryQuery,
        restrict_object_ids_query::RestrictObjectIdsQuery,
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ObjectRestriction {
    /// A global grant: every object of the type is accessible.
    Unrestricted,
    /// Only these object ids are accessible. Empty means nothing is.
    Only(Vec<String>),
}

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_restrict_object_ids(
        &self,
        query: RestrictObjectIdsQuery,
    ) -> Result<ObjectRestriction, AccessControlDomainError>;

    async fn handle_get_entry(
        &self,
        query: GetAccessControlEntryQuery,
    ) -> Result<AccessControlEntry, AccessControlDomainError>;
}
