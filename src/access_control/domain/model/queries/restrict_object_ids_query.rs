use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{
        object_type::ObjectType, permission_name::PermissionName, principal_id::PrincipalId,
    },
};

#[derive(Clone, Debug)]
pub struct RestrictObjectIdsQuery {
    principal_id: PrincipalId,
    permission_name: PermissionName,
    object_type: ObjectType,
}

impl RestrictObjectIdsQuery {
    pub fn new(
        principal_id: String,
        permission_name: String,
        object_type: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            permission_name: PermissionName::new(permission_name)?,
            object_type: ObjectType::new(object_type)?,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn permission_name(&self) -> &PermissionName {
        &self.permission_name
    }
    pub fn object_type(&self) -> &ObjectType {
        &self.object_type
    }
}
