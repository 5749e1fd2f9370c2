use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::access_control::{
    domain::services::access_control_query_service::ObjectRestriction,
    infrastructure::persistence::repositories::restriction_cache_repository::{
        RestrictionCacheKey, RestrictionCacheRepository,
    },
};

struct CachedRestriction {
    restriction: ObjectRestriction,
    expires_at: Instant,
}

/// TTL map. Expired entries are pruned on every write, so the map never holds
/// more than the keys written within one TTL window.
pub struct InMemoryRestrictionCacheRepositoryImpl {
    entries: RwLock<HashMap<RestrictionCacheKey, CachedRestriction>>,
    ttl: Duration,
}

impl InMemoryRestrictionCacheRepositoryImpl {
    /// A zero `ttl` disables caching.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl RestrictionCacheRepository for InMemoryRestrictionCacheRepositoryImpl {
    async fn get(&self, key: &RestrictionCacheKey) -> Option<ObjectRestriction> {
        let read_guard = self.entries.read().await;
        read_guard
            .get(key)
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.restriction.clone())
    }

    async fn put(&self, key: RestrictionCacheKey, restriction: ObjectRestriction) {
        if self.ttl.is_zero() {
            return;
        }

        let now = Instant::now();
        let mut write_guard = self.entries.write().await;
        write_guard.retain(|_, cached| cached.expires_at > now);
        write_guard.insert(
            key,
            CachedRestriction {
                restriction,
                expires_at: now + self.ttl,
            },
        );
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}
