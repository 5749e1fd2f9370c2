use crate::external_object_list::domain::model::{
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    value_objects::object_query_set::ObjectQuerySet,
};

/// Names a persisted model: the object type used by access control, the table
/// holding its rows and the column carrying its primary key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ModelDescriptor {
    name: String,
    table_name: String,
    primary_key_column: String,
}

impl ModelDescriptor {
    pub fn new(
        name: String,
        table_name: String,
        primary_key_column: String,
    ) -> Result<Self, ExternalObjectListDomainError> {
        for identifier in [&name, &table_name, &primary_key_column] {
            if !is_identifier(identifier) {
                return Err(ExternalObjectListDomainError::InvalidModelDescriptor);
            }
        }

        Ok(Self {
            name,
            table_name,
            primary_key_column,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
    pub fn primary_key_column(&self) -> &str {
        &self.primary_key_column
    }

    /// The model's default collection, unfiltered.
    pub fn all_objects(&self) -> ObjectQuerySet {
        ObjectQuerySet::all(self.clone())
    }
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
