use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::external_object_list::{
    domain::model::{
        enums::external_object_list_domain_error::ExternalObjectListDomainError,
        value_objects::object_query_set::{ObjectFilter, ObjectQuerySet},
    },
    infrastructure::persistence::repositories::object_repository::ObjectRepository,
};

pub struct SqlxObjectRepositoryImpl {
    pool: PgPool,
}

impl SqlxObjectRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn quote_identifier(identifier: &str) -> Result<String, ExternalObjectListDomainError> {
        if identifier.is_empty()
            || !identifier
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ExternalObjectListDomainError::InvalidModelDescriptor);
        }

        Ok(format!("\"{}\"", identifier))
    }
}

#[async_trait]
impl ObjectRepository for SqlxObjectRepositoryImpl {
    async fn fetch(
        &self,
        collection: &ObjectQuerySet,
    ) -> Result<Vec<Value>, ExternalObjectListDomainError> {
        if collection.is_known_empty() {
            return Ok(Vec::new());
        }

        let model = collection.model();
        let table = Self::quote_identifier(model.table_name())?;
        let primary_key = Self::quote_identifier(model.primary_key_column())?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT COALESCE(jsonb_agg(to_jsonb(t) ORDER BY t.{primary_key}), '[]'::jsonb) AS payload FROM {table} AS t"
        ));

        for (position, filter) in collection.filters().iter().enumerate() {
            builder.push(if position == 0 { " WHERE " } else { " AND " });
            match filter {
                ObjectFilter::PrimaryKeyIn(ids) => {
                    builder.push(format!("t.{primary_key}::text = ANY("));
                    builder.push_bind(ids.clone());
                    builder.push(")");
                }
            }
        }

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ExternalObjectListDomainError::InfrastructureError(e.to_string()))?;

        let payload: Value = row
            .try_get("payload")
            .map_err(|e| ExternalObjectListDomainError::InfrastructureError(e.to_string()))?;

        Ok(match payload {
            Value::Array(objects) => objects,
            _ => Vec::new(),
        })
    }
}
