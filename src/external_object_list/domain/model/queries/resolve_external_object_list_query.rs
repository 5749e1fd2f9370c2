use crate::external_object_list::domain::model::{
    entities::external_object_list_options::ExternalObjectListOptions,
    enums::external_object_list_domain_error::ExternalObjectListDomainError,
    value_objects::{request_principal::RequestPrincipal, validated_input::ValidatedInput},
};

#[derive(Clone, Debug)]
pub struct ResolveExternalObjectListQuery {
    options: ExternalObjectListOptions,
    validated_input: ValidatedInput,
    principal: RequestPrincipal,
}

impl ResolveExternalObjectListQuery {
    pub fn new(
        options: ExternalObjectListOptions,
        validated_input: ValidatedInput,
        principal: String,
    ) -> Result<Self, ExternalObjectListDomainError> {
        Ok(Self {
            options,
            validated_input,
            principal: RequestPrincipal::new(principal)?,
        })
    }

    pub fn options(&self) -> &ExternalObjectListOptions {
        &self.options
    }
    pub fn validated_input(&self) -> &ValidatedInput {
        &self.validated_input
    }
    pub fn principal(&self) -> &RequestPrincipal {
        &self.principal
    }
}
