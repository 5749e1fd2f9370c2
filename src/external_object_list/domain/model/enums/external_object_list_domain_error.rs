use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExternalObjectListDomainError {
    #[error("external object list requires a model or a queryset")]
    MissingBaseCollection,

    #[error("external object list accepts a model or a queryset, not both")]
    AmbiguousBaseCollection,

    #[error("external object list requires a pk_field or a pk_list_field")]
    MissingPrimaryKeyField,

    #[error("model descriptor is invalid")]
    InvalidModelDescriptor,

    #[error("permission name is invalid")]
    InvalidPermissionName,

    #[error("principal is invalid")]
    InvalidPrincipal,

    #[error("external object list handler not found: {0}")]
    UnknownHandler(String),

    #[error("access control unavailable: {0}")]
    AccessControlUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl ExternalObjectListDomainError {
    /// Errors caused by the handler's declared options rather than by the request.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBaseCollection
                | Self::AmbiguousBaseCollection
                | Self::MissingPrimaryKeyField
                | Self::InvalidModelDescriptor
                | Self::InvalidPermissionName
        )
    }
}
