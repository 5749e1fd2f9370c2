use async_trait::async_trait;

use crate::external_object_list::domain::model::{
    entities::external_object_list_options::ExternalObjectListOptions,
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    queries::resolve_external_object_list_query::ResolveExternalObjectListQuery,
    value_objects::{id_list::IdList, object_query_set::ObjectQuerySet},
};

#[derive(Clone, Debug)]
pub struct ResolvedExternalObjectList {
    pub id_list: IdList,
    pub collection: ObjectQuerySet,
}

#[async_trait]
pub trait ExternalObjectListQueryService: Send + Sync {
    async fn handle_resolve(
        &self,
        query: ResolveExternalObjectListQuery,
    ) -> Result<ResolvedExternalObjectList, ExternalObjectListDomainError>;

    fn get_base_collection(
        &self,
        options: &ExternalObjectListOptions,
    ) -> Result<ObjectQuerySet, ExternalObjectListDomainError>;
}
