use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::access_control::{
    domain::{
        model::{
            entities::access_control_entry::AccessControlEntry,
            enums::access_control_domain_error::AccessControlDomainError,
            queries::{
                get_access_control_entry_query::GetAccessControlEntryQuery,
                restrict_object_ids_query::RestrictObjectIdsQuery,
            },
        },
        services::access_control_query_service::{AccessControlQueryService, ObjectRestriction},
    },
    infrastructure::persistence::repositories::{
        access_control_entry_repository::AccessControlEntryRepository,
        restriction_cache_repository::{RestrictionCacheKey, RestrictionCacheRepository},
        role_assignment_repository::RoleAssignmentRepository,
    },
};

pub struct AccessControlQueryServiceImpl {
    role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
    access_control_entry_repository: Arc<dyn AccessControlEntryRepository>,
    restriction_cache: Arc<dyn RestrictionCacheRepository>,
}

impl AccessControlQueryServiceImpl {
    pub fn new(
        role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
        access_control_entry_repository: Arc<dyn AccessControlEntryRepository>,
        restriction_cache: Arc<dyn RestrictionCacheRepository>,
    ) -> Self {
        Self {
            role_assignment_repository,
            access_control_entry_repository,
            restriction_cache,
        }
    }

    fn build_cache_key(query: &RestrictObjectIdsQuery) -> RestrictionCacheKey {
        RestrictionCacheKey {
            principal_id: query.principal_id().value().to_string(),
            permission_name: query.permission_name().value().to_string(),
            object_type: query.object_type().value().to_string(),
        }
    }

    async fn compute_restriction(
        &self,
        query: &RestrictObjectIdsQuery,
    ) -> Result<ObjectRestriction, AccessControlDomainError> {
        let roles = self
            .role_assignment_repository
            .find_role_names(query.principal_id())
            .await?;

        if roles.is_empty() {
            return Ok(ObjectRestriction::Only(Vec::new()));
        }

        if self
            .access_control_entry_repository
            .has_global_grant(query.permission_name(), &roles)
            .await?
        {
            return Ok(ObjectRestriction::Unrestricted);
        }

        let object_ids = self
            .access_control_entry_repository
            .find_granted_object_ids(query.permission_name(), query.object_type(), &roles)
            .await?;

        Ok(ObjectRestriction::Only(object_ids))
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_restrict_object_ids(
        &self,
        query: RestrictObjectIdsQuery,
    ) -> Result<ObjectRestriction, AccessControlDomainError> {
        let cache_key = Self::build_cache_key(&query);
        if let Some(cached) = self.restriction_cache.get(&cache_key).await {
            debug!(
                principal = query.principal_id().value(),
                permission = query.permission_name().value(),
                "restriction served from cache"
            );
            return Ok(cached);
        }

        let restriction = self.compute_restriction(&query).await?;
        self.restriction_cache
            .put(cache_key, restriction.clone())
            .await;
        Ok(restriction)
    }

    async fn handle_get_entry(
        &self,
        query: GetAccessControlEntryQuery,
    ) -> Result<AccessControlEntry, AccessControlDomainError> {
        self.access_control_entry_repository
            .find_entry_by_id(query.entry_id())
            .await?
            .ok_or(AccessControlDomainError::EntryNotFound)
    }
}
