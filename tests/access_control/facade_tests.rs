use object_list_api::access_control::{
    application::acl::access_control_facade_impl::AccessControlFacadeImpl,
    domain::model::enums::access_control_domain_error::AccessControlDomainError,
    interfaces::acl::access_control_facade::{
        AccessControlFacade, AccessControlObjectRestriction, AccessControlRestrictionRequest,
    },
};

use crate::support::{create_harness, grant_on_object};

fn request(principal_id: &str, object_type: &str) -> AccessControlRestrictionRequest {
    AccessControlRestrictionRequest {
        principal_id: principal_id.to_string(),
        permission_name: "documents.view".to_string(),
        object_type: object_type.to_string(),
    }
}

#[tokio::test]
async fn facade_exposes_object_grants() {
    let harness = create_harness();
    harness.assign("user-7", "editor").await;
    harness
        .grant(grant_on_object("editor", "documents.view", "documents", "3"))
        .await;
    let facade = AccessControlFacadeImpl::new(harness.query_service.clone());

    let restriction = facade
        .restricted_object_ids(request("user-7", "documents"))
        .await
        .expect("restriction");

    assert_eq!(
        restriction,
        AccessControlObjectRestriction::Only(vec!["3".to_string()])
    );
}

#[tokio::test]
async fn facade_rejects_invalid_object_type() {
    let harness = create_harness();
    let facade = AccessControlFacadeImpl::new(harness.query_service.clone());

    let result = facade
        .restricted_object_ids(request("user-7", "Documents"))
        .await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::InvalidObjectType)
    ));
}
