use async_trait::async_trait;
use sqlx::PgPool;

use crate::access_control::{
    domain::model::{
        entities::role_assignment::RoleAssignment,
        enums::access_control_domain_error::AccessControlDomainError,
        value_objects::principal_id::PrincipalId,
    },
    infrastructure::persistence::repositories::role_assignment_repository::RoleAssignmentRepository,
};

pub struct SqlxRoleAssignmentRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoleAssignmentRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleAssignmentRepository for SqlxRoleAssignmentRepositoryImpl {
    async fn save_assignment(
        &self,
        assignment: &RoleAssignment,
    ) -> Result<bool, AccessControlDomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO access_role_assignments (principal_id, role_name, assigned_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (principal_id, role_name) DO NOTHING
            "#,
        )
        .bind(assignment.principal_id().value())
        .bind(assignment.role_name().value())
        .bind(assignment.assigned_at())
        .execute(&self.pool)
        .await
        .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_role_names(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, AccessControlDomainError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT role_name
            FROM access_role_assignments
            WHERE principal_id = $1
            ORDER BY role_name
            "#,
        )
        .bind(principal_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))
    }
}
