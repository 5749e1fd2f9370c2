use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::access_control::{
    domain::{
        model::{
            commands::{
                assign_role_command::AssignRoleCommand, grant_access_command::GrantAccessCommand,
            },
            entities::{access_control_entry::AccessControlEntry, role_assignment::RoleAssignment},
            enums::access_control_domain_error::AccessControlDomainError,
        },
        services::access_control_command_service::AccessControlCommandService,
    },
    infrastructure::persistence::repositories::{
        access_control_entry_repository::AccessControlEntryRepository,
        restriction_cache_repository::RestrictionCacheRepository,
        role_assignment_repository::RoleAssignmentRepository,
    },
};

pub struct AccessControlCommandServiceImpl {
    role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
    access_control_entry_repository: Arc<dyn AccessControlEntryRepository>,
    restriction_cache: Arc<dyn RestrictionCacheRepository>,
}

impl AccessControlCommandServiceImpl {
    pub fn new(
        role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
        access_control_entry_repository: Arc<dyn AccessControlEntryRepository>,
        restriction_cache: Arc<dyn RestrictionCacheRepository>,
    ) -> Self {
        Self {
            role_assignment_repository,
            access_control_entry_repository,
            restriction_cache,
        }
    }
}

#[async_trait]
impl AccessControlCommandService for AccessControlCommandServiceImpl {
    async fn handle_assign_role(
        &self,
        command: AssignRoleCommand,
    ) -> Result<RoleAssignment, AccessControlDomainError> {
        let assignment = RoleAssignment::assign(&command);
        let newly_assigned = self
            .role_assignment_repository
            .save_assignment(&assignment)
            .await?;

        if newly_assigned {
            self.restriction_cache.clear().await;
            info!(
                principal = assignment.principal_id().value(),
                role = assignment.role_name().value(),
                "role assigned"
            );
        } else {
            debug!(
                principal = assignment.principal_id().value(),
                role = assignment.role_name().value(),
                "role already assigned"
            );
        }

        Ok(assignment)
    }

    async fn handle_grant_access(
        &self,
        command: GrantAccessCommand,
    ) -> Result<AccessControlEntry, AccessControlDomainError> {
        let entry = AccessControlEntry::grant(&command);
        self.access_control_entry_repository
            .save_entry(&entry)
            .await?;
        self.restriction_cache.clear().await;

        info!(
            entry_id = %entry.id(),
            role = entry.role_name().value(),
            permission = entry.permission_name().value(),
            scope = entry.scope().as_str(),
            "access granted"
        );

        Ok(entry)
    }
}
