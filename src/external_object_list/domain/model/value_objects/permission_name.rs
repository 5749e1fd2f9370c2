use crate::external_object_list::domain::model::enums::external_object_list_domain_error::ExternalObjectListDomainError;

/// Identifier of an access-control rule, e.g. `documents.view`.
///
/// Same alphabet the access-control context accepts: lowercase letters,
/// digits, `_` and `.`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PermissionName(String);

impl PermissionName {
    pub fn new(value: String) -> Result<Self, ExternalObjectListDomainError> {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.');

        if !valid {
            return Err(ExternalObjectListDomainError::InvalidPermissionName);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
