use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::{
        application::{
            command_services::access_control_command_service_impl::AccessControlCommandServiceImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            postgres::{
                sqlx_access_control_entry_repository_impl::SqlxAccessControlEntryRepositoryImpl,
                sqlx_role_assignment_repository_impl::SqlxRoleAssignmentRepositoryImpl,
            },
            restriction_cache_repository::RestrictionCacheRepository,
        },
        interfaces::rest::controllers::access_control_rest_controller::{
            AccessControlRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    shared::interfaces::rest::success_headers::SuccessHeadersBuilder,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// `restriction_cache` is shared with every other reader of access-control
/// decisions so that grants and role assignments invalidate them at once.
pub async fn build_access_control_router(
    config: &AppConfig,
    restriction_cache: Arc<dyn RestrictionCacheRepository>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let role_assignment_repository = Arc::new(SqlxRoleAssignmentRepositoryImpl::new(pool.clone()));
    let access_control_entry_repository = Arc::new(SqlxAccessControlEntryRepositoryImpl::new(pool));

    let command_service = Arc::new(AccessControlCommandServiceImpl::new(
        role_assignment_repository.clone(),
        access_control_entry_repository.clone(),
        restriction_cache.clone(),
    ));
    let query_service = Arc::new(AccessControlQueryServiceImpl::new(
        role_assignment_repository,
        access_control_entry_repository,
        restriction_cache,
    ));

    Ok(router(AccessControlRestControllerState {
        command_service,
        query_service,
        success_headers: SuccessHeadersBuilder::new(config.url_field_name.clone()),
    }))
}
