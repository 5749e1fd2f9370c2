use async_trait::async_trait;

use crate::access_control::domain::services::access_control_query_service::ObjectRestriction;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RestrictionCacheKey {
    pub principal_id: String,
    pub permission_name: String,
    pub object_type: String,
}

/// Short-lived store of restriction decisions, shared by every reader and
/// writer of access-control data in the process.
#[async_trait]
pub trait RestrictionCacheRepository: Send + Sync {
    async fn get(&self, key: &RestrictionCacheKey) -> Option<ObjectRestriction>;

    async fn put(&self, key: RestrictionCacheKey, restriction: ObjectRestriction);

    /// Drops every decision. Called after grants and role assignments.
    async fn clear(&self);

    /// Number of stored decisions, expired ones included until the next write.
    async fn entry_count(&self) -> usize;
}
