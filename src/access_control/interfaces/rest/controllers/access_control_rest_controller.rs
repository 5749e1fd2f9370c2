use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::Value;
use validator::Validate;

use crate::{
    access_control::{
        domain::{
            model::{
                commands::{
                    assign_role_command::{AssignRoleCommand, AssignRoleCommandParts},
                    grant_access_command::{GrantAccessCommand, GrantAccessCommandParts},
                },
                entities::access_control_entry::AccessControlEntry,
                enums::access_control_domain_error::AccessControlDomainError,
                queries::get_access_control_entry_query::GetAccessControlEntryQuery,
            },
            services::{
                access_control_command_service::AccessControlCommandService,
                access_control_query_service::AccessControlQueryService,
            },
        },
        interfaces::rest::resources::{
            access_control_entry_resource::AccessControlEntryResource,
            access_control_error_response_resource::AccessControlErrorResponseResource,
            assign_role_request_resource::AssignRoleRequestResource,
            grant_access_request_resource::GrantAccessRequestResource,
        },
    },
    shared::interfaces::rest::success_headers::SuccessHeadersBuilder,
};

pub const ENTRIES_PATH: &str = "/access-control/entries";

type ErrorResponse = (StatusCode, Json<AccessControlErrorResponseResource>);

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub command_service: Arc<dyn AccessControlCommandService>,
    pub query_service: Arc<dyn AccessControlQueryService>,
    pub success_headers: SuccessHeadersBuilder,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route("/access-control/roles/assign", post(assign_role))
        .route(ENTRIES_PATH, post(grant_access))
        .route("/access-control/entries/:entry_id", get(get_entry))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/access-control/roles/assign",
    tag = "access-control",
    request_body = AssignRoleRequestResource,
    responses(
        (status = 204, description = "Role assigned"),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AccessControlErrorResponseResource)
    )
)]
pub async fn assign_role(
    State(state): State<AccessControlRestControllerState>,
    Json(request): Json<AssignRoleRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AccessControlErrorResponseResource {
                code: "invalid_request".to_string(),
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = AssignRoleCommand::new(AssignRoleCommandParts {
        principal_id: request.principal_id,
        role_name: request.role_name,
    })
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/access-control/entries",
    tag = "access-control",
    request_body = GrantAccessRequestResource,
    responses(
        (status = 201, description = "Access granted", body = AccessControlEntryResource,
            headers(("Location" = String, description = "URL of the created entry"))),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AccessControlErrorResponseResource)
    )
)]
pub async fn grant_access(
    State(state): State<AccessControlRestControllerState>,
    Json(request): Json<GrantAccessRequestResource>,
) -> Result<(StatusCode, HeaderMap, Json<Value>), ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AccessControlErrorResponseResource {
                code: "invalid_request".to_string(),
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = GrantAccessCommand::new(GrantAccessCommandParts {
        role_name: request.role_name,
        permission_name: request.permission_name,
        object_type: request.object_type,
        object_id: request.object_id,
    })
    .map_err(map_domain_error)?;

    let entry = state
        .command_service
        .handle_grant_access(command)
        .await
        .map_err(map_domain_error)?;

    let payload = entry_payload(&state, &entry)?;
    let headers = state.success_headers.to_header_map(&payload);
    Ok((StatusCode::CREATED, headers, Json(payload)))
}

#[utoipa::path(
    get,
    path = "/access-control/entries/{entry_id}",
    tag = "access-control",
    params(("entry_id" = String, Path, description = "Access control entry id")),
    responses(
        (status = 200, description = "Access control entry", body = AccessControlEntryResource),
        (status = 400, description = "Invalid entry id", body = AccessControlErrorResponseResource),
        (status = 404, description = "Entry not found", body = AccessControlErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AccessControlErrorResponseResource)
    )
)]
pub async fn get_entry(
    State(state): State<AccessControlRestControllerState>,
    Path(entry_id): Path<String>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = GetAccessControlEntryQuery::new(entry_id).map_err(map_domain_error)?;

    let entry = state
        .query_service
        .handle_get_entry(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(entry_payload(&state, &entry)?))
}

/// The entry resource plus its own URL under the configured field name.
fn entry_payload(
    state: &AccessControlRestControllerState,
    entry: &AccessControlEntry,
) -> Result<Value, ErrorResponse> {
    let mut payload = serde_json::to_value(AccessControlEntryResource::from(entry))
        .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))
        .map_err(map_domain_error)?;

    if let Value::Object(fields) = &mut payload {
        fields.insert(
            state.success_headers.url_field_name().to_string(),
            Value::String(format!("{}/{}", ENTRIES_PATH, entry.id())),
        );
    }
    Ok(payload)
}

fn map_domain_error(error: AccessControlDomainError) -> ErrorResponse {
    let (status, code) = match error {
        AccessControlDomainError::InvalidPrincipalId
        | AccessControlDomainError::InvalidRoleName
        | AccessControlDomainError::InvalidPermissionName
        | AccessControlDomainError::InvalidObjectType
        | AccessControlDomainError::InvalidObjectId
        | AccessControlDomainError::InvalidEntryId => (StatusCode::BAD_REQUEST, "invalid_request"),
        AccessControlDomainError::EntryNotFound => (StatusCode::NOT_FOUND, "not_found"),
        AccessControlDomainError::InfrastructureError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
        }
    };

    (
        status,
        Json(AccessControlErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
