use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use object_list_api::external_object_list::{
    domain::model::{
        entities::{
            external_object_list_handler_registry::ExternalObjectListHandlerRegistry,
            external_object_list_options::ExternalObjectListOptions,
        },
        value_objects::permission_name::PermissionName,
    },
    interfaces::rest::{
        controllers::external_object_list_rest_controller::{
            PRINCIPAL_HEADER, resolve_external_object_list,
        },
        resources::resolve_external_object_list_request_resource::ResolveExternalObjectListRequestResource,
    },
};
use serde_json::{Value, json};

use crate::support::{PRINCIPAL_ID, create_controller_harness, options_with_list_field};

fn registry() -> ExternalObjectListHandlerRegistry {
    let mut registry = ExternalObjectListHandlerRegistry::new();
    let permission = PermissionName::new("documents.view".to_string()).expect("permission");
    registry.register(
        "document-batch",
        options_with_list_field().with_permission(permission),
    );
    registry.register(
        "misconfigured",
        ExternalObjectListOptions::new().with_pk_field("document_id"),
    );
    registry
}

fn principal_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(PRINCIPAL_HEADER, HeaderValue::from_static(PRINCIPAL_ID));
    headers
}

fn request(input: Value) -> Json<ResolveExternalObjectListRequestResource> {
    Json(ResolveExternalObjectListRequestResource { input })
}

#[tokio::test]
async fn resolves_and_returns_only_authorized_objects() {
    let harness = create_controller_harness(registry());
    harness.access_control.grant_only(&["3", "5", "8"]);

    let Json(response) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("document-batch".to_string()),
        principal_headers(),
        request(json!({ "document_id_list": "3,5,9" })),
    )
    .await
    .expect("resolved");

    assert_eq!(response.handler, "document-batch");
    assert_eq!(response.id_list, ["3", "5", "9"]);
    let returned_ids: Vec<&Value> = response.objects.iter().map(|o| &o["id"]).collect();
    assert_eq!(returned_ids, [&json!(3), &json!(5)]);
    assert_eq!(harness.object_repository.fetch_calls(), 1);
}

#[tokio::test]
async fn empty_id_list_returns_no_objects() {
    let harness = create_controller_harness(registry());

    let Json(response) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("document-batch".to_string()),
        principal_headers(),
        request(json!({ "document_id_list": "" })),
    )
    .await
    .expect("resolved");

    assert!(response.id_list.is_empty());
    assert!(response.objects.is_empty());
}

#[tokio::test]
async fn unknown_handler_is_not_found() {
    let harness = create_controller_harness(registry());

    let (status, Json(error)) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("nope".to_string()),
        principal_headers(),
        request(json!({})),
    )
    .await
    .expect_err("unknown handler");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.code, "unknown_handler");
}

#[tokio::test]
async fn missing_principal_is_unauthorized() {
    let harness = create_controller_harness(registry());

    let (status, Json(error)) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("document-batch".to_string()),
        HeaderMap::new(),
        request(json!({ "document_id_list": "1" })),
    )
    .await
    .expect_err("missing principal");

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error.code, "missing_principal");
    assert!(harness.access_control.calls().is_empty());
}

#[tokio::test]
async fn oversized_principal_is_unauthorized() {
    let harness = create_controller_harness(registry());
    let mut headers = HeaderMap::new();
    headers.insert(
        PRINCIPAL_HEADER,
        HeaderValue::from_str(&"u".repeat(300)).expect("header value"),
    );

    let (status, _) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("document-batch".to_string()),
        headers,
        request(json!({ "document_id_list": "1" })),
    )
    .await
    .expect_err("rejected principal");

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(harness.access_control.calls().is_empty());
}

#[tokio::test]
async fn misconfigured_handler_is_a_server_error() {
    let harness = create_controller_harness(registry());

    let (status, Json(error)) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("misconfigured".to_string()),
        principal_headers(),
        request(json!({ "document_id": "1" })),
    )
    .await
    .expect_err("misconfigured");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.code, "improperly_configured");
    assert_eq!(harness.object_repository.fetch_calls(), 0);
}

#[tokio::test]
async fn non_object_input_is_a_bad_request() {
    let harness = create_controller_harness(registry());

    let (status, Json(error)) = resolve_external_object_list(
        State(harness.state.clone()),
        Path("document-batch".to_string()),
        principal_headers(),
        request(json!(["1", "2"])),
    )
    .await
    .expect_err("invalid input");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "invalid_request");
}
