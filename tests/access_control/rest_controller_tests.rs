use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
};
use object_list_api::{
    access_control::interfaces::rest::{
        controllers::access_control_rest_controller::{
            AccessControlRestControllerState, ENTRIES_PATH, assign_role, get_entry,
            grant_access,
        },
        resources::{
            assign_role_request_resource::AssignRoleRequestResource,
            grant_access_request_resource::GrantAccessRequestResource,
        },
    },
    shared::interfaces::rest::success_headers::SuccessHeadersBuilder,
};

use crate::support::{AccessControlHarness, create_harness};

fn state(harness: &AccessControlHarness, url_field_name: &str) -> AccessControlRestControllerState {
    AccessControlRestControllerState {
        command_service: harness.command_service.clone(),
        query_service: harness.query_service.clone(),
        success_headers: SuccessHeadersBuilder::new(url_field_name),
    }
}

fn object_grant_request() -> GrantAccessRequestResource {
    GrantAccessRequestResource {
        role_name: "editor".to_string(),
        permission_name: "documents.view".to_string(),
        object_type: Some("documents".to_string()),
        object_id: Some("42".to_string()),
    }
}

#[tokio::test]
async fn grant_access_returns_created_entry_with_location() {
    let harness = create_harness();

    let (status, headers, Json(payload)) =
        grant_access(State(state(&harness, "url")), Json(object_grant_request()))
            .await
            .expect("granted");

    assert_eq!(status, StatusCode::CREATED);
    let id = payload["id"].as_str().expect("id").to_string();
    let expected_url = format!("{ENTRIES_PATH}/{id}");
    assert_eq!(payload["url"], expected_url.as_str());
    assert_eq!(payload["scope"], "object");
    assert_eq!(payload["object_id"], "42");
    assert_eq!(
        headers.get(LOCATION).and_then(|v| v.to_str().ok()),
        Some(expected_url.as_str())
    );
    assert_eq!(harness.entries.entries().len(), 1);
}

#[tokio::test]
async fn grant_access_uses_configured_url_field() {
    let harness = create_harness();

    let (_, headers, Json(payload)) = grant_access(
        State(state(&harness, "self_link")),
        Json(object_grant_request()),
    )
    .await
    .expect("granted");

    assert!(payload.get("url").is_none());
    let self_link = payload["self_link"].as_str().expect("self_link");
    assert_eq!(
        headers.get(LOCATION).and_then(|v| v.to_str().ok()),
        Some(self_link)
    );
}

#[tokio::test]
async fn grant_access_rejects_half_specified_object() {
    let harness = create_harness();
    let mut request = object_grant_request();
    request.object_type = None;

    let (status, Json(error)) = grant_access(State(state(&harness, "url")), Json(request))
        .await
        .expect_err("rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "invalid_request");
    assert!(harness.entries.entries().is_empty());
}

#[tokio::test]
async fn grant_access_rejects_empty_role_name() {
    let harness = create_harness();
    let mut request = object_grant_request();
    request.role_name = String::new();

    let (status, _) = grant_access(State(state(&harness, "url")), Json(request))
        .await
        .expect_err("rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assign_role_returns_no_content() {
    let harness = create_harness();

    let status = assign_role(
        State(state(&harness, "url")),
        Json(AssignRoleRequestResource {
            principal_id: "user-7".to_string(),
            role_name: "editor".to_string(),
        }),
    )
    .await
    .expect("assigned");

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(harness.role_assignments.has_assignment("user-7", "editor"));
}

#[tokio::test]
async fn location_of_granted_entry_resolves() {
    let harness = create_harness();
    let (_, headers, Json(created)) =
        grant_access(State(state(&harness, "url")), Json(object_grant_request()))
            .await
            .expect("granted");
    let location = headers
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location")
        .to_string();
    let entry_id = location
        .strip_prefix(&format!("{ENTRIES_PATH}/"))
        .expect("entry path")
        .to_string();

    let Json(fetched) = get_entry(State(state(&harness, "url")), Path(entry_id))
        .await
        .expect("entry");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_entry_with_unknown_id_is_not_found() {
    let harness = create_harness();

    let (status, Json(error)) = get_entry(
        State(state(&harness, "url")),
        Path("0192f0c1-7d3e-7a4b-8c5d-6e7f8a9b0c1d".to_string()),
    )
    .await
    .expect_err("missing");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.code, "not_found");
}

#[tokio::test]
async fn get_entry_with_malformed_id_is_bad_request() {
    let harness = create_harness();

    let (status, Json(error)) =
        get_entry(State(state(&harness, "url")), Path("42".to_string()))
            .await
            .expect_err("rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "invalid_request");
}
