use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{principal_id::PrincipalId, role_name::RoleName},
};

pub struct AssignRoleCommandParts {
    pub principal_id: String,
    pub role_name: String,
}

#[derive(Clone, Debug)]
pub struct AssignRoleCommand {
    principal_id: PrincipalId,
    role_name: RoleName,
}

impl AssignRoleCommand {
    pub fn new(parts: AssignRoleCommandParts) -> Result<Self, AccessControlDomainError> {
        let principal_id = PrincipalId::new(parts.principal_id)?;
        let role_name = RoleName::new(parts.role_name)?;

        Ok(Self {
            principal_id,
            role_name,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
}
