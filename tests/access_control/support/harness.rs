use std::{sync::Arc, time::Duration};

use object_list_api::{
    access_control::{
        application::{
            command_services::access_control_command_service_impl::AccessControlCommandServiceImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
        },
        infrastructure::persistence::repositories::in_memory::in_memory_restriction_cache_repository_impl::InMemoryRestrictionCacheRepositoryImpl,
        domain::{
            model::commands::{
                assign_role_command::{AssignRoleCommand, AssignRoleCommandParts},
                grant_access_command::{GrantAccessCommand, GrantAccessCommandParts},
            },
            services::access_control_command_service::AccessControlCommandService,
        },
    },
};

use super::fakes::{FakeAccessControlEntryRepository, FakeRoleAssignmentRepository};

pub struct AccessControlHarness {
    pub role_assignments: Arc<FakeRoleAssignmentRepository>,
    pub entries: Arc<FakeAccessControlEntryRepository>,
    pub restriction_cache: Arc<InMemoryRestrictionCacheRepositoryImpl>,
    pub command_service: Arc<AccessControlCommandServiceImpl>,
    pub query_service: Arc<AccessControlQueryServiceImpl>,
}

impl AccessControlHarness {
    pub async fn assign(&self, principal_id: &str, role_name: &str) {
        let command = AssignRoleCommand::new(AssignRoleCommandParts {
            principal_id: principal_id.to_string(),
            role_name: role_name.to_string(),
        })
        .expect("valid assign command");
        self.command_service
            .handle_assign_role(command)
            .await
            .expect("role assigned");
    }

    pub async fn grant(&self, command: GrantAccessCommand) {
        self.command_service
            .handle_grant_access(command)
            .await
            .expect("access granted");
    }
}

pub fn create_harness() -> AccessControlHarness {
    create_harness_with_cache_ttl(Duration::from_secs(30))
}

pub fn create_harness_with_cache_ttl(cache_ttl: Duration) -> AccessControlHarness {
    let role_assignments = Arc::new(FakeRoleAssignmentRepository::new());
    let entries = Arc::new(FakeAccessControlEntryRepository::new());
    let restriction_cache = Arc::new(InMemoryRestrictionCacheRepositoryImpl::new(cache_ttl));

    let command_service = Arc::new(AccessControlCommandServiceImpl::new(
        role_assignments.clone(),
        entries.clone(),
        restriction_cache.clone(),
    ));
    let query_service = Arc::new(AccessControlQueryServiceImpl::new(
        role_assignments.clone(),
        entries.clone(),
        restriction_cache.clone(),
    ));

    AccessControlHarness {
        role_assignments,
        entries,
        restriction_cache,
        command_service,
        query_service,
    }
}

pub fn grant_global(role_name: &str, permission_name: &str) -> GrantAccessCommand {
    GrantAccessCommand::new(GrantAccessCommandParts {
        role_name: role_name.to_string(),
        permission_name: permission_name.to_string(),
        object_type: None,
        object_id: None,
    })
    .expect("valid global grant")
}

pub fn grant_on_object(
    role_name: &str,
    permission_name: &str,
    object_type: &str,
    object_id: &str,
) -> GrantAccessCommand {
    GrantAccessCommand::new(GrantAccessCommandParts {
        role_name: role_name.to_string(),
        permission_name: permission_name.to_string(),
        object_type: Some(object_type.to_string()),
        object_id: Some(object_id.to_string()),
    })
    .expect("valid object grant")
}
