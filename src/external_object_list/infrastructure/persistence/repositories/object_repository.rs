use async_trait::async_trait;
use serde_json::Value;

use crate::external_object_list::domain::model::{
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    value_objects::object_query_set::ObjectQuerySet,
};

#[async_trait]
pub trait ObjectRepository: Send + Sync {
    /// Evaluates the descriptor, one JSON object per row.
    async fn fetch(
        &self,
        collection: &ObjectQuerySet,
    ) -> Result<Vec<Value>, ExternalObjectListDomainError>;
}
