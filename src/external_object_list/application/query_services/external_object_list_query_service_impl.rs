use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::external_object_list::{
    domain::{
        model::{
            entities::external_object_list_options::ExternalObjectListOptions,
            enums::external_object_list_domain_error::ExternalObjectListDomainError,
            queries::resolve_external_object_list_query::ResolveExternalObjectListQuery,
            value_objects::{id_list::IdList, object_query_set::ObjectQuerySet},
        },
        services::external_object_list_query_service::{
            ExternalObjectListQueryService, ResolvedExternalObjectList,
        },
    },
    interfaces::acl::access_control_facade::AccessControlFacade,
};

pub struct ExternalObjectListQueryServiceImpl {
    access_control_facade: Arc<dyn AccessControlFacade>,
}

impl ExternalObjectListQueryServiceImpl {
    pub fn new(access_control_facade: Arc<dyn AccessControlFacade>) -> Self {
        Self {
            access_control_facade,
        }
    }
}

#[async_trait]
impl ExternalObjectListQueryService for ExternalObjectListQueryServiceImpl {
    async fn handle_resolve(
        &self,
        query: ResolveExternalObjectListQuery,
    ) -> Result<ResolvedExternalObjectList, ExternalObjectListDomainError> {
        let options = query.options();
        let mut collection = self.get_base_collection(options)?;

        if let Some(permission) = options.permission() {
            collection = self
                .access_control_facade
                .restrict(permission, collection, query.principal())
                .await?;
        }

        let id_list = IdList::from_validated_input(
            options.pk_field(),
            options.pk_list_field(),
            query.validated_input(),
        )?;

        debug!(
            model = collection.model().name(),
            permission = options.permission().map(|p| p.value()),
            principal = query.principal().value(),
            ids = id_list.values().len(),
            "resolved external object list"
        );

        let collection = collection.filter_by_pk_in(id_list.values().iter().cloned());

        Ok(ResolvedExternalObjectList {
            id_list,
            collection,
        })
    }

    fn get_base_collection(
        &self,
        options: &ExternalObjectListOptions,
    ) -> Result<ObjectQuerySet, ExternalObjectListDomainError> {
        match (options.model(), options.queryset()) {
            (Some(_), Some(_)) => Err(ExternalObjectListDomainError::AmbiguousBaseCollection),
            (Some(model), None) => Ok(model.all_objects()),
            (None, Some(queryset)) => Ok(queryset.clone()),
            (None, None) => Err(ExternalObjectListDomainError::MissingBaseCollection),
        }
    }
}
