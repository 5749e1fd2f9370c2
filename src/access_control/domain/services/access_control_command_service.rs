use async_trait::async_trait;

use crate::access_control::domain::model::{
    commands::{assign_role_command::AssignRoleCommand, grant_access_command::GrantAccessCommand},
    entities::{access_control_entry::AccessControlEntry, role_assignment::RoleAssignment},
    enums::access_control_domain_error::AccessControlDomainError,
};

#[async_trait]
pub trait AccessControlCommandService: Send + Sync {
    async fn handle_assign_role(
        &self,
        command: AssignRoleCommand,
    ) -> Result<RoleAssignment, AccessControlDomainError>;

    async fn handle_grant_access(
        &self,
        command: GrantAccessCommand,
    ) -> Result<AccessControlEntry, AccessControlDomainError>;
}
