use crate::external_object_list::domain::model::value_objects::{
    model_descriptor::ModelDescriptor, object_query_set::ObjectQuerySet,
    permission_name::PermissionName,
};

const OPTION_PREFIX: &str = "external_object_list_";

/// Options a request handler declares for resolving its external object list.
///
/// Nothing is validated when the options are built; incomplete or
/// contradictory options surface as errors when a list is resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExternalObjectListOptions {
    model: Option<ModelDescriptor>,
    queryset: Option<ObjectQuerySet>,
    permission: Option<PermissionName>,
    pk_field: Option<String>,
    pk_list_field: Option<String>,
}

/// Borrowed view of a single option, as returned by
/// [`ExternalObjectListOptions::get_option`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExternalObjectListOption<'a> {
    Model(&'a ModelDescriptor),
    QuerySet(&'a ObjectQuerySet),
    Permission(&'a PermissionName),
    PkField(&'a str),
    PkListField(&'a str),
}

impl ExternalObjectListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelDescriptor) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_queryset(mut self, queryset: ObjectQuerySet) -> Self {
        self.queryset = Some(queryset);
        self
    }

    pub fn with_permission(mut self, permission: PermissionName) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn with_pk_field(mut self, field_name: impl Into<String>) -> Self {
        self.pk_field = non_blank(field_name.into());
        self
    }

    pub fn with_pk_list_field(mut self, field_name: impl Into<String>) -> Self {
        self.pk_list_field = non_blank(field_name.into());
        self
    }

    pub fn model(&self) -> Option<&ModelDescriptor> {
        self.model.as_ref()
    }
    pub fn queryset(&self) -> Option<&ObjectQuerySet> {
        self.queryset.as_ref()
    }
    pub fn permission(&self) -> Option<&PermissionName> {
        self.permission.as_ref()
    }
    pub fn pk_field(&self) -> Option<&str> {
        self.pk_field.as_deref()
    }
    pub fn pk_list_field(&self) -> Option<&str> {
        self.pk_list_field.as_deref()
    }

    /// Looks an option up by name. Accepts both `pk_field` and
    /// `external_object_list_pk_field`. Unset or unknown names give `None`.
    pub fn get_option(&self, name: &str) -> Option<ExternalObjectListOption<'_>> {
        let name = name.strip_prefix(OPTION_PREFIX).unwrap_or(name);
        match name {
            "model" => self.model().map(ExternalObjectListOption::Model),
            "queryset" => self.queryset().map(ExternalObjectListOption::QuerySet),
            "permission" => self.permission().map(ExternalObjectListOption::Permission),
            "pk_field" => self.pk_field().map(ExternalObjectListOption::PkField),
            "pk_list_field" => self.pk_list_field().map(ExternalObjectListOption::PkListField),
            _ => None,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
