use uuid::Uuid;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Debug)]
pub struct GetAccessControlEntryQuery {
    entry_id: Uuid,
}

impl GetAccessControlEntryQuery {
    pub fn new(entry_id: String) -> Result<Self, AccessControlDomainError> {
        let entry_id =
            Uuid::parse_str(entry_id.trim()).map_err(|_| AccessControlDomainError::InvalidEntryId)?;
        Ok(Self { entry_id })
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }
}
