use std::{sync::Arc, time::Duration};

use axum::Router;
use dotenvy::dotenv;
use object_list_api::{
    access_control::{
        build_access_control_router,
        infrastructure::persistence::repositories::in_memory::in_memory_restriction_cache_repository_impl::InMemoryRestrictionCacheRepositoryImpl,
        interfaces::rest::resources::{
            access_control_entry_resource::AccessControlEntryResource,
            access_control_error_response_resource::AccessControlErrorResponseResource,
            assign_role_request_resource::AssignRoleRequestResource,
            grant_access_request_resource::GrantAccessRequestResource,
        },
    },
    config::app_config::AppConfig,
    external_object_list::{
        build_external_object_list_router,
        interfaces::rest::resources::{
            external_object_list_error_response_resource::ExternalObjectListErrorResponseResource,
            resolve_external_object_list_request_resource::{
                ResolveExternalObjectListRequestResource, ResolveExternalObjectListResponseResource,
            },
        },
    },
    shared::interfaces::rest::openapi::security::BearerSecurityAddon,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        object_list_api::external_object_list::interfaces::rest::controllers::external_object_list_rest_controller::resolve_external_object_list,
        object_list_api::access_control::interfaces::rest::controllers::access_control_rest_controller::assign_role,
        object_list_api::access_control::interfaces::rest::controllers::access_control_rest_controller::grant_access,
        object_list_api::access_control::interfaces::rest::controllers::access_control_rest_controller::get_entry
    ),
    components(
        schemas(
            ResolveExternalObjectListRequestResource,
            ResolveExternalObjectListResponseResource,
            ExternalObjectListErrorResponseResource,
            AssignRoleRequestResource,
            GrantAccessRequestResource,
            AccessControlEntryResource,
            AccessControlErrorResponseResource
        )
    ),
    tags(
        (name = "external-object-lists", description = "Permission-filtered object lists for batch endpoints"),
        (name = "access-control", description = "Role assignments and access control entries")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let restriction_cache = Arc::new(InMemoryRestrictionCacheRepositoryImpl::new(
        Duration::from_secs(config.access_control_cache_ttl_seconds),
    ));

    let access_control_router = build_access_control_router(&config, restriction_cache.clone())
        .await
        .expect("failed to build access control router");
    let external_object_list_router =
        build_external_object_list_router(&config, restriction_cache)
            .await
            .expect("failed to build external object list router");

    let app = Router::new()
        .merge(external_object_list_router)
        .merge(access_control_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");
    info!("swagger ui available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
