use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::access_control::{
    domain::model::{
        entities::access_control_entry::AccessControlEntry,
        enums::access_control_domain_error::AccessControlDomainError,
        value_objects::{
            object_id::ObjectId, object_type::ObjectType, permission_name::PermissionName,
            role_name::RoleName,
        },
    },
    infrastructure::persistence::repositories::access_control_entry_repository::AccessControlEntryRepository,
};

pub struct SqlxAccessControlEntryRepositoryImpl {
    pool: PgPool,
}

impl SqlxAccessControlEntryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessControlEntryRepository for SqlxAccessControlEntryRepositoryImpl {
    async fn save_entry(&self, entry: &AccessControlEntry) -> Result<(), AccessControlDomainError> {
        let statement = r#"
            INSERT INTO access_control_entries (
                id,
                role_name,
                permission_name,
                scope,
                object_type,
                object_id,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(entry.id())
            .bind(entry.role_name().value())
            .bind(entry.permission_name().value())
            .bind(entry.scope().as_str())
            .bind(entry.object_type().map(|t| t.value().to_string()))
            .bind(entry.object_id().map(|id| id.value().to_string()))
            .bind(entry.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn find_entry_by_id(
        &self,
        entry_id: Uuid,
    ) -> Result<Option<AccessControlEntry>, AccessControlDomainError> {
        let statement = r#"
            SELECT id, role_name, permission_name, object_type, object_id, created_at
            FROM access_control_entries
            WHERE id = $1
        "#;

        let Some(row) = sqlx::query(statement)
            .bind(entry_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?
        else {
            return Ok(None);
        };

        let read_error =
            |e: sqlx::Error| AccessControlDomainError::InfrastructureError(e.to_string());
        let id: Uuid = row.try_get("id").map_err(read_error)?;
        let role_name: String = row.try_get("role_name").map_err(read_error)?;
        let permission_name: String = row.try_get("permission_name").map_err(read_error)?;
        let object_type: Option<String> = row.try_get("object_type").map_err(read_error)?;
        let object_id: Option<String> = row.try_get("object_id").map_err(read_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read_error)?;

        let target = match (object_type, object_id) {
            (Some(object_type), Some(object_id)) => {
                Some((ObjectType::new(object_type)?, ObjectId::new(object_id)?))
            }
            _ => None,
        };

        Ok(Some(AccessControlEntry::restore(
            id,
            RoleName::new(role_name)?,
            PermissionName::new(permission_name)?,
            target,
            created_at,
        )))
    }

    async fn has_global_grant(
        &self,
        permission_name: &PermissionName,
        role_names: &[String],
    ) -> Result<bool, AccessControlDomainError> {
        if role_names.is_empty() {
            return Ok(false);
        }

        let statement = r#"
            SELECT EXISTS (
                SELECT 1
                FROM access_control_entries
                WHERE permission_name = $1
                  AND scope = 'global'
                  AND role_name = ANY($2)
            )
        "#;

        sqlx::query_scalar::<_, bool>(statement)
            .bind(permission_name.value())
            .bind(role_names)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))
    }

    async fn find_granted_object_ids(
        &self,
        permission_name: &PermissionName,
        object_type: &ObjectType,
        role_names: &[String],
    ) -> Result<Vec<String>, AccessControlDomainError> {
        if role_names.is_empty() {
            return Ok(Vec::new());
        }

        let statement = r#"
            SELECT DISTINCT object_id
            FROM access_control_entries
            WHERE permission_name = $1
              AND scope = 'object'
              AND object_type = $2
              AND role_name = ANY($3)
        "#;

        sqlx::query_scalar::<_, String>(statement)
            .bind(permission_name.value())
            .bind(object_type.value())
            .bind(role_names)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))
    }
}
