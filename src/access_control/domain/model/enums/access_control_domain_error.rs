use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("principal id is invalid")]
    InvalidPrincipalId,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("permission name is invalid")]
    InvalidPermissionName,

    #[error("object type is invalid")]
    InvalidObjectType,

    #[error("object id is invalid")]
    InvalidObjectId,

    #[error("access control entry id is invalid")]
    InvalidEntryId,

    #[error("access control entry not found")]
    EntryNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
