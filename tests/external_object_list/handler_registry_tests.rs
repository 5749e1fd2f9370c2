use object_list_api::external_object_list::domain::model::entities::external_object_list_handler_registry::ExternalObjectListHandlerRegistry;

#[test]
fn parses_full_handler_entry() {
    let registry = ExternalObjectListHandlerRegistry::parse(
        "document-batch=documents:documents:id|documents.view|document_id|document_id_list",
    );

    let options = registry.get("document-batch").expect("handler registered");
    let model = options.model().expect("model configured");
    assert_eq!(model.name(), "documents");
    assert_eq!(model.table_name(), "documents");
    assert_eq!(model.primary_key_column(), "id");
    assert_eq!(
        options.permission().map(|p| p.value()),
        Some("documents.view")
    );
    assert_eq!(options.pk_field(), Some("document_id"));
    assert_eq!(options.pk_list_field(), Some("document_id_list"));
}

#[test]
fn empty_segments_leave_options_unset() {
    let registry =
        ExternalObjectListHandlerRegistry::parse("tags=tags:tag_rows:tag_id||| tag_ids");

    let options = registry.get("tags").expect("handler registered");
    assert!(options.permission().is_none());
    assert!(options.pk_field().is_none());
    assert_eq!(options.pk_list_field(), Some("tag_ids"));
}

#[test]
fn entry_without_model_is_kept_for_resolution_time_errors() {
    let registry = ExternalObjectListHandlerRegistry::parse("orphan=|documents.view|document_id");

    let options = registry.get("orphan").expect("handler registered");
    assert!(options.model().is_none());
    assert!(options.queryset().is_none());
}

#[test]
fn malformed_entries_are_skipped() {
    let registry = ExternalObjectListHandlerRegistry::parse(
        "no-equals-sign, =documents:documents:id, bad-model=Documents:documents:id, \
         short-model=documents:id|p|f, ok=documents:documents:id||document_id",
    );

    assert_eq!(registry.len(), 1);
    assert!(registry.get("ok").is_some());
    assert!(registry.get("bad-model").is_none());
    assert!(registry.get("short-model").is_none());
}

#[test]
fn empty_configuration_registers_nothing() {
    assert!(ExternalObjectListHandlerRegistry::parse("").is_empty());
    assert!(ExternalObjectListHandlerRegistry::parse(" , ").is_empty());
}

#[test]
fn entry_with_invalid_permission_is_skipped() {
    let registry = ExternalObjectListHandlerRegistry::parse(
        "shouting=documents:documents:id|Documents.View|document_id, \
         ok=documents:documents:id|documents.view|document_id",
    );

    assert!(registry.get("shouting").is_none());
    assert_eq!(
        registry
            .get("ok")
            .and_then(|options| options.permission())
            .map(|p| p.value()),
        Some("documents.view")
    );
}
