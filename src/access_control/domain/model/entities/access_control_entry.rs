use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access_control::domain::model::{
    commands::grant_access_command::GrantAccessCommand,
    enums::grant_scope::GrantScope,
    value_objects::{
        object_id::ObjectId, object_type::ObjectType, permission_name::PermissionName,
        role_name::RoleName,
    },
};

/// A role holding a permission, globally or on one object.
#[derive(Clone, Debug)]
pub struct AccessControlEntry {
    id: Uuid,
    role_name: RoleName,
    permission_name: PermissionName,
    object_type: Option<ObjectType>,
    object_id: Option<ObjectId>,
    created_at: DateTime<Utc>,
}

impl AccessControlEntry {
    pub fn grant(command: &GrantAccessCommand) -> Self {
        Self {
            id: Uuid::now_v7(),
            role_name: command.role_name().clone(),
            permission_name: command.permission_name().clone(),
            object_type: command.object_type().cloned(),
            object_id: command.object_id().cloned(),
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a stored entry. `target` is the object type and id of an
    /// object-scoped grant.
    pub fn restore(
        id: Uuid,
        role_name: RoleName,
        permission_name: PermissionName,
        target: Option<(ObjectType, ObjectId)>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let (object_type, object_id) = target.unzip();
        Self {
            id,
            role_name,
            permission_name,
            object_type,
            object_id,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
    pub fn permission_name(&self) -> &PermissionName {
        &self.permission_name
    }
    pub fn scope(&self) -> GrantScope {
        if self.object_id.is_some() {
            GrantScope::Object
        } else {
            GrantScope::Global
        }
    }
    pub fn object_type(&self) -> Option<&ObjectType> {
        self.object_type.as_ref()
    }
    pub fn object_id(&self) -> Option<&ObjectId> {
        self.object_id.as_ref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
