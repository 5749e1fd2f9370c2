use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use object_list_api::access_control::{
    domain::model::{
        entities::{access_control_entry::AccessControlEntry, role_assignment::RoleAssignment},
        enums::{access_control_domain_error::AccessControlDomainError, grant_scope::GrantScope},
        value_objects::{
            object_type::ObjectType, permission_name::PermissionName, principal_id::PrincipalId,
        },
    },
    infrastructure::persistence::repositories::{
        access_control_entry_repository::AccessControlEntryRepository,
        role_assignment_repository::RoleAssignmentRepository,
    },
};
use uuid::Uuid;

#[derive(Default)]
struct FakeRoleAssignmentState {
    assignments: HashSet<(String, String)>,
    lookups: usize,
}

pub struct FakeRoleAssignmentRepository {
    state: Mutex<FakeRoleAssignmentState>,
}

impl FakeRoleAssignmentRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRoleAssignmentState::default()),
        }
    }

    pub fn lookups(&self) -> usize {
        self.state.lock().expect("mutex poisoned").lookups
    }

    pub fn role_names_of(&self, principal_id: &str) -> Vec<String> {
        let mut roles: Vec<String> = self
            .state
            .lock()
            .expect("mutex poisoned")
            .assignments
            .iter()
            .filter(|(principal, _)| principal == principal_id)
            .map(|(_, role)| role.clone())
            .collect();
        roles.sort();
        roles
    }

    pub fn has_assignment(&self, principal_id: &str, role_name: &str) -> bool {
        self.state
            .lock()
            .expect("mutex poisoned")
            .assignments
            .contains(&(principal_id.to_string(), role_name.to_string()))
    }
}

#[async_trait]
impl RoleAssignmentRepository for FakeRoleAssignmentRepository {
    async fn save_assignment(
        &self,
        assignment: &RoleAssignment,
    ) -> Result<bool, AccessControlDomainError> {
        Ok(self.state.lock().expect("mutex poisoned").assignments.insert((
            assignment.principal_id().value().to_string(),
            assignment.role_name().value().to_string(),
        )))
    }

    async fn find_role_names(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.lookups += 1;

        let mut roles: Vec<String> = state
            .assignments
            .iter()
            .filter(|(principal, _)| principal == principal_id.value())
            .map(|(_, role)| role.clone())
            .collect();
        roles.sort();
        Ok(roles)
    }
}

/// Stores entries in memory and answers grant lookups the way the Postgres
/// queries do.
pub struct FakeAccessControlEntryRepository {
    entries: Mutex<Vec<AccessControlEntry>>,
}

impl FakeAccessControlEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<AccessControlEntry> {
        self.entries.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl AccessControlEntryRepository for FakeAccessControlEntryRepository {
    async fn save_entry(&self, entry: &AccessControlEntry) -> Result<(), AccessControlDomainError> {
        self.entries
            .lock()
            .expect("mutex poisoned")
            .push(entry.clone());
        Ok(())
    }

    async fn find_entry_by_id(
        &self,
        entry_id: Uuid,
    ) -> Result<Option<AccessControlEntry>, AccessControlDomainError> {
        Ok(self
            .entries
            .lock()
            .expect("mutex poisoned")
            .iter()
            .find(|entry| entry.id() == entry_id)
            .cloned())
    }

    async fn has_global_grant(
        &self,
        permission_name: &PermissionName,
        role_names: &[String],
    ) -> Result<bool, AccessControlDomainError> {
        Ok(self.entries.lock().expect("mutex poisoned").iter().any(|entry| {
            entry.scope() == GrantScope::Global
                && entry.permission_name() == permission_name
                && role_names.iter().any(|role| role == entry.role_name().value())
        }))
    }

    async fn find_granted_object_ids(
        &self,
        permission_name: &PermissionName,
        object_type: &ObjectType,
        role_names: &[String],
    ) -> Result<Vec<String>, AccessControlDomainError> {
        let mut object_ids: Vec<String> = self
            .entries
            .lock()
            .expect("mutex poisoned")
            .iter()
            .filter(|entry| {
                entry.permission_name() == permission_name
                    && entry.object_type() == Some(object_type)
                    && role_names.iter().any(|role| role == entry.role_name().value())
            })
            .filter_map(|entry| entry.object_id().map(|id| id.value().to_string()))
            .collect();
        object_ids.sort();
        object_ids.dedup();
        Ok(object_ids)
    }
}
