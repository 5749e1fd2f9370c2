use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, grant_scope::GrantScope},
    value_objects::{
        object_id::ObjectId, object_type::ObjectType, permission_name::PermissionName,
        role_name::RoleName,
    },
};

#[derive(Clone, Debug)]
pub struct GrantAccessCommand {
    role_name: RoleName,
    permission_name: PermissionName,
    target: Option<(ObjectType, ObjectId)>,
}

pub struct GrantAccessCommandParts {
    pub role_name: String,
    pub permission_name: String,
    pub object_type: Option<String>,
    pub object_id: Option<String>,
}

impl GrantAccessCommand {
    /// Without an object the grant is global; an object needs both its type
    /// and its id.
    pub fn new(parts: GrantAccessCommandParts) -> Result<Self, AccessControlDomainError> {
        let target = match (parts.object_type, parts.object_id) {
            (None, None) => None,
            (Some(object_type), Some(object_id)) => {
                Some((ObjectType::new(object_type)?, ObjectId::new(object_id)?))
            }
            (None, Some(_)) => return Err(AccessControlDomainError::InvalidObjectType),
            (Some(_), None) => return Err(AccessControlDomainError::InvalidObjectId),
        };

        Ok(Self {
            role_name: RoleName::new(parts.role_name)?,
            permission_name: PermissionName::new(parts.permission_name)?,
            target,
        })
    }

    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
    pub fn permission_name(&self) -> &PermissionName {
        &self.permission_name
    }
    pub fn scope(&self) -> GrantScope {
        if self.target.is_some() {
            GrantScope::Object
        } else {
            GrantScope::Global
        }
    }
    pub fn object_type(&self) -> Option<&ObjectType> {
        self.target.as_ref().map(|(object_type, _)| object_type)
    }
    pub fn object_id(&self) -> Option<&ObjectId> {
        self.target.as_ref().map(|(_, object_id)| object_id)
    }
}
