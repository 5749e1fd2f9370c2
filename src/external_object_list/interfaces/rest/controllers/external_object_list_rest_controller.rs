use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use tracing::error;
use validator::Validate;

use crate::external_object_list::{
    domain::{
        model::{
            entities::external_object_list_handler_registry::ExternalObjectListHandlerRegistry,
            enums::external_object_list_domain_error::ExternalObjectListDomainError,
            queries::resolve_external_object_list_query::ResolveExternalObjectListQuery,
            value_objects::validated_input::ValidatedInput,
        },
        services::external_object_list_query_service::ExternalObjectListQueryService,
    },
    infrastructure::persistence::repositories::object_repository::ObjectRepository,
    interfaces::rest::resources::{
        external_object_list_error_response_resource::ExternalObjectListErrorResponseResource,
        resolve_external_object_list_request_resource::{
            ResolveExternalObjectListRequestResource, ResolveExternalObjectListResponseResource,
        },
    },
};

pub const PRINCIPAL_HEADER: &str = "x-principal-id";

#[derive(Clone)]
pub struct ExternalObjectListRestControllerState {
    pub query_service: Arc<dyn ExternalObjectListQueryService>,
    pub object_repository: Arc<dyn ObjectRepository>,
    pub handler_registry: Arc<ExternalObjectListHandlerRegistry>,
}

pub fn router(state: ExternalObjectListRestControllerState) -> Router {
    Router::new()
        .route(
            "/api/v1/object-lists/:handler_name",
            post(resolve_external_object_list),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/object-lists/{handler_name}",
    tag = "external-object-lists",
    params(
        ("handler_name" = String, Path, description = "Registered handler name"),
        ("x-principal-id" = String, Header, description = "Authenticated principal")
    ),
    request_body = ResolveExternalObjectListRequestResource,
    responses(
        (status = 200, description = "Objects the principal may access", body = ResolveExternalObjectListResponseResource),
        (status = 400, description = "Invalid request", body = ExternalObjectListErrorResponseResource),
        (status = 401, description = "Missing principal", body = ExternalObjectListErrorResponseResource),
        (status = 404, description = "Unknown handler", body = ExternalObjectListErrorResponseResource),
        (status = 500, description = "Handler misconfigured or infrastructure error", body = ExternalObjectListErrorResponseResource),
        (status = 503, description = "Access control unavailable", body = ExternalObjectListErrorResponseResource)
    )
)]
pub async fn resolve_external_object_list(
    State(state): State<ExternalObjectListRestControllerState>,
    Path(handler_name): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ResolveExternalObjectListRequestResource>,
) -> Result<
    Json<ResolveExternalObjectListResponseResource>,
    (StatusCode, Json<ExternalObjectListErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ExternalObjectListErrorResponseResource {
                code: "invalid_request".to_string(),
                message: validation_error.to_string(),
            }),
        ));
    }

    let options = state
        .handler_registry
        .get(&handler_name)
        .cloned()
        .ok_or_else(|| {
            map_domain_error(ExternalObjectListDomainError::UnknownHandler(
                handler_name.clone(),
            ))
        })?;

    let principal = headers
        .get(PRINCIPAL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let query = ResolveExternalObjectListQuery::new(
        options,
        ValidatedInput::from_value(request.input),
        principal,
    )
    .map_err(map_domain_error)?;

    let resolved = state
        .query_service
        .handle_resolve(query)
        .await
        .map_err(map_domain_error)?;

    let objects = state
        .object_repository
        .fetch(&resolved.collection)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ResolveExternalObjectListResponseResource {
        handler: handler_name,
        id_list: resolved.id_list.into_vec(),
        objects,
    }))
}

fn map_domain_error(
    error: ExternalObjectListDomainError,
) -> (StatusCode, Json<ExternalObjectListErrorResponseResource>) {
    let (status, code) = match error {
        ExternalObjectListDomainError::MissingBaseCollection
        | ExternalObjectListDomainError::AmbiguousBaseCollection
        | ExternalObjectListDomainError::MissingPrimaryKeyField
        | ExternalObjectListDomainError::InvalidModelDescriptor
        | ExternalObjectListDomainError::InvalidPermissionName => {
            (StatusCode::INTERNAL_SERVER_ERROR, "improperly_configured")
        }
        ExternalObjectListDomainError::InfrastructureError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
        }
        ExternalObjectListDomainError::InvalidPrincipal => {
            (StatusCode::UNAUTHORIZED, "missing_principal")
        }
        ExternalObjectListDomainError::UnknownHandler(_) => {
            (StatusCode::NOT_FOUND, "unknown_handler")
        }
        ExternalObjectListDomainError::AccessControlUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "access_control_unavailable")
        }
    };

    if error.is_configuration_error() {
        error!(%error, "external object list handler is misconfigured");
    }

    (
        status,
        Json(ExternalObjectListErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
