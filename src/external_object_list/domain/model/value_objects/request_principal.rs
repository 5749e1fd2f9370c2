use crate::external_object_list::domain::model::enums::external_object_list_domain_error::ExternalObjectListDomainError;

const MAX_PRINCIPAL_LENGTH: usize = 255;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RequestPrincipal(String);

impl RequestPrincipal {
    /// Trimmed, at most 255 bytes, no control characters.
    pub fn new(value: String) -> Result<Self, ExternalObjectListDomainError> {
        let value = value.trim();
        let valid = !value.is_empty()
            && value.len() <= MAX_PRINCIPAL_LENGTH
            && !value.chars().any(char::is_control);

        if !valid {
            return Err(ExternalObjectListDomainError::InvalidPrincipal);
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
