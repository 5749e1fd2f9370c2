use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use crate::{
    access_control::{
        application::{
            acl::access_control_facade_impl::AccessControlFacadeImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            postgres::{
                sqlx_access_control_entry_repository_impl::SqlxAccessControlEntryRepositoryImpl,
                sqlx_role_assignment_repository_impl::SqlxRoleAssignmentRepositoryImpl,
            },
            restriction_cache_repository::RestrictionCacheRepository,
        },
    },
    config::app_config::AppConfig,
    external_object_list::{
        application::{
            acl::access_control_facade_real_impl::AccessControlFacadeRealImpl,
            query_services::external_object_list_query_service_impl::ExternalObjectListQueryServiceImpl,
        },
        domain::model::entities::external_object_list_handler_registry::ExternalObjectListHandlerRegistry,
        infrastructure::persistence::repositories::postgres::sqlx_object_repository_impl::SqlxObjectRepositoryImpl,
        interfaces::rest::controllers::external_object_list_rest_controller::{
            ExternalObjectListRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_external_object_list_router(
    config: &AppConfig,
    restriction_cache: Arc<dyn RestrictionCacheRepository>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let acl_role_assignment_repository =
        Arc::new(SqlxRoleAssignmentRepositoryImpl::new(pool.clone()));
    let acl_entry_repository = Arc::new(SqlxAccessControlEntryRepositoryImpl::new(pool.clone()));
    let acl_query_service = Arc::new(AccessControlQueryServiceImpl::new(
        acl_role_assignment_repository,
        acl_entry_repository,
        restriction_cache,
    ));
    let access_control_facade = Arc::new(AccessControlFacadeRealImpl::new(Arc::new(
        AccessControlFacadeImpl::new(acl_query_service),
    )));

    let query_service = Arc::new(ExternalObjectListQueryServiceImpl::new(
        access_control_facade,
    ));
    let object_repository = Arc::new(SqlxObjectRepositoryImpl::new(pool));

    let handler_registry =
        ExternalObjectListHandlerRegistry::parse(&config.external_object_list_handlers);
    info!(
        handlers = handler_registry.len(),
        "external object list handlers registered"
    );

    Ok(router(ExternalObjectListRestControllerState {
        query_service,
        object_repository,
        handler_registry: Arc::new(handler_registry),
    }))
}
