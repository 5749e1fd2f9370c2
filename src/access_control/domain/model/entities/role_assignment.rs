use chrono::{DateTime, Utc};

use crate::access_control::domain::model::{
    commands::assign_role_command::AssignRoleCommand,
    value_objects::{principal_id::PrincipalId, role_name::RoleName},
};

/// A principal holding a role. Assigning the same role twice keeps the
/// first assignment.
#[derive(Clone, Debug)]
pub struct RoleAssignment {
    principal_id: PrincipalId,
    role_name: RoleName,
    assigned_at: DateTime<Utc>,
}

impl RoleAssignment {
    pub fn assign(command: &AssignRoleCommand) -> Self {
        Self {
            principal_id: command.principal_id().clone(),
            role_name: command.role_name().clone(),
            assigned_at: Utc::now(),
        }
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
    pub fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }
}
