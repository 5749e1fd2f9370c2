use std::collections::HashMap;

use tracing::warn;

use crate::external_object_list::domain::model::{
    entities::external_object_list_options::ExternalObjectListOptions,
    value_objects::{model_descriptor::ModelDescriptor, permission_name::PermissionName},
};

/// Options per request handler, keyed by handler name.
#[derive(Clone, Debug, Default)]
pub struct ExternalObjectListHandlerRegistry {
    handlers: HashMap<String, ExternalObjectListOptions>,
}

impl ExternalObjectListHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma separated entries of the form
    /// `name=model:table:pk_column|permission|pk_field|pk_list_field`.
    /// Empty segments leave the option unset. Entries without a name, or with
    /// an invalid model or permission name, are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut registry = Self::new();

        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((name, definition)) = entry.split_once('=') else {
                warn!(entry, "external object list handler entry has no name");
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                warn!(entry, "external object list handler entry has no name");
                continue;
            }

            match parse_options(definition) {
                Some(options) => registry.register(name, options),
                None => warn!(entry, "external object list handler entry is malformed"),
            }
        }

        registry
    }

    pub fn register(&mut self, name: impl Into<String>, options: ExternalObjectListOptions) {
        self.handlers.insert(name.into(), options);
    }

    pub fn get(&self, name: &str) -> Option<&ExternalObjectListOptions> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn parse_options(definition: &str) -> Option<ExternalObjectListOptions> {
    let mut segments = definition.split('|').map(str::trim);
    let mut options = ExternalObjectListOptions::new();

    let model = segments.next().unwrap_or_default();
    if !model.is_empty() {
        let mut parts = model.split(':').map(str::trim);
        let (Some(name), Some(table), Some(primary_key), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        let descriptor = ModelDescriptor::new(
            name.to_string(),
            table.to_string(),
            primary_key.to_string(),
        )
        .ok()?;
        options = options.with_model(descriptor);
    }

    let permission = segments.next().unwrap_or_default();
    if !permission.is_empty() {
        options = options.with_permission(PermissionName::new(permission.to_string()).ok()?);
    }
    if let Some(pk_field) = segments.next() {
        options = options.with_pk_field(pk_field);
    }
    if let Some(pk_list_field) = segments.next() {
        options = options.with_pk_list_field(pk_list_field);
    }

    Some(options)
}
