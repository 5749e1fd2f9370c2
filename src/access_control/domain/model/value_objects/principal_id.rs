use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

const MAX_PRINCIPAL_ID_LENGTH: usize = 255;

/// Opaque id of the authenticated actor, as issued by the identity provider.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let value = value.trim();
        let valid = !value.is_empty()
            && value.len() <= MAX_PRINCIPAL_ID_LENGTH
            && !value.chars().any(char::is_control);

        if !valid {
            return Err(AccessControlDomainError::InvalidPrincipalId);
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
