//! Unit tests for the tab data model and the catalog.

use serde_json::json;
use tempfile::TempDir;

use showcase_browser::types::catalog::Catalog;
use showcase_browser::types::errors::CatalogError;
use showcase_browser::types::tab::{ContentRef, Icon, Tab, TabKind};

#[test]
fn test_content_tab_defaults() {
    let tab = Tab::content("proj1", "Project One", "https://example.dev/1", None);
    assert_eq!(tab.kind, TabKind::Content);
    assert!(!tab.is_placeholder());
    assert!(!tab.pinned && !tab.favorited && !tab.has_unsaved_changes && !tab.disabled);
    assert!(tab.icon.is_none());
}

#[test]
fn test_placeholder_kinds() {
    assert!(TabKind::Home.is_placeholder());
    assert!(TabKind::New.is_placeholder());
    assert!(!TabKind::Content.is_placeholder());
}

#[test]
fn test_tab_deserializes_with_missing_flags() {
    let tab: Tab = serde_json::from_value(json!({
        "id": "proj1",
        "title": "Project One",
        "url": "https://example.dev/1",
        "content": "projects/one"
    }))
    .unwrap();

    assert_eq!(tab.kind, TabKind::Content);
    assert_eq!(tab.content, Some(ContentRef::new("projects/one")));
    assert!(!tab.pinned);
    assert_eq!(tab.created_at, 0);
}

#[test]
fn test_icon_is_tagged_union() {
    let image = serde_json::to_value(Icon::Image("/a.png".to_string())).unwrap();
    assert_eq!(image, json!({"type": "image", "value": "/a.png"}));

    let renderable = serde_json::to_value(Icon::Renderable(ContentRef::new("icons/x"))).unwrap();
    assert_eq!(renderable, json!({"type": "renderable", "value": "icons/x"}));
}

#[test]
fn test_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_value(TabKind::New).unwrap(), json!("new"));
    assert_eq!(serde_json::to_value(TabKind::Home).unwrap(), json!("home"));
}

#[test]
fn test_catalog_new_keeps_first_of_repeated_ids() {
    let catalog = Catalog::new(vec![
        Tab::content("a", "First", "u1", None),
        Tab::content("b", "B", "u2", None),
        Tab::content("a", "Second", "u3", None),
    ]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.ids(), vec!["a", "b"]);
    assert_eq!(catalog.find("a").unwrap().title, "First");
}

#[test]
fn test_catalog_find_and_get() {
    let catalog: Catalog = vec![Tab::content("a", "A", "u", None)].into_iter().collect();
    assert!(catalog.find("missing").is_none());
    assert_eq!(catalog.get(0).unwrap().id, "a");
    assert!(catalog.get(1).is_none());
    assert!(!catalog.is_empty());
}

#[test]
fn test_catalog_from_json_rejects_duplicates() {
    let err = Catalog::from_json(r#"[{"id":"a"},{"id":"a"}]"#).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn test_catalog_from_json_rejects_malformed_input() {
    let err = Catalog::from_json("{ not an array }").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_catalog_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id":"proj1","title":"One","url":"https://example.dev/1"},
            {"id":"proj2","title":"Two","url":"https://example.dev/2"}]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.ids(), vec!["proj1", "proj2"]);
}

#[test]
fn test_catalog_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
