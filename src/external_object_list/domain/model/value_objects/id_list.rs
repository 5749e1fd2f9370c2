use serde_json::Value;

use crate::external_object_list::domain::model::{
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    value_objects::validated_input::{ValidatedInput, value_as_text},
};

/// Primary key values pulled out of validated request input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdList(Vec<String>);

impl IdList {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn single(value: String) -> Self {
        Self(vec![value])
    }

    /// Comma split with no trimming and no dropping of blanks: `""` yields a
    /// single empty element, `"3,,5"` yields three.
    pub fn split(raw: &str) -> Self {
        Self(raw.split(',').map(str::to_string).collect())
    }

    /// The single-value field wins when truthy, then the list field; with
    /// neither the list is empty. Field names that are not configured are
    /// skipped, but at least one must be.
    pub fn from_validated_input(
        pk_field: Option<&str>,
        pk_list_field: Option<&str>,
        input: &ValidatedInput,
    ) -> Result<Self, ExternalObjectListDomainError> {
        if pk_field.is_none() && pk_list_field.is_none() {
            return Err(ExternalObjectListDomainError::MissingPrimaryKeyField);
        }

        if let Some(value) = pk_field.and_then(|field| input.truthy(field)) {
            return Ok(Self::single(value_as_text(value)));
        }

        if let Some(value) = pk_list_field.and_then(|field| input.truthy(field)) {
            return Ok(Self::from_list_value(value));
        }

        Ok(Self::empty())
    }

    fn from_list_value(value: &Value) -> Self {
        match value {
            Value::String(raw) => Self::split(raw),
            Value::Array(items) => Self(items.iter().map(value_as_text).collect()),
            other => Self::split(&value_as_text(other)),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
