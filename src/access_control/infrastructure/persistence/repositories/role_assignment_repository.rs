use async_trait::async_trait;

use crate::access_control::domain::model::{
    entities::role_assignment::RoleAssignment,
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::principal_id::PrincipalId,
};

#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// Returns `false` when the principal already held the role.
    async fn save_assignment(
        &self,
        assignment: &RoleAssignment,
    ) -> Result<bool, AccessControlDomainError>;

    async fn find_role_names(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, AccessControlDomainError>;
}
