use std::fs;

use coral_model::StockStatus;
use coral_store::{Catalog, StoreError};

const EXPORT: &str = r#"{
  "result": [
    { "id": "c1", "name": "Rainbow Zoa", "slug": "rainbow-zoa", "price": 80,
      "category": "soft", "filterTags": ["zoa", "rare"], "status": "in-stock",
      "image": "https://cdn.example/zoa.jpg" },
    { "id": "c2", "name": "Jawbreaker", "slug": "jawbreaker", "price": 150,
      "category": "lps", "filterTags": ["torch"], "status": "sold-out",
      "image": "https://cdn.example/jaw.jpg" },
    { "id": "c3", "name": "Acro Frag", "slug": "acro-frag", "price": 40,
      "category": "sps", "filterTags": ["zoa"],
      "image": "https://cdn.example/acro.jpg" },
    { "id": "c4", "name": "", "slug": "nameless", "price": 10,
      "category": "sps", "image": "https://cdn.example/x.jpg" }
  ]
}"#;

#[test]
fn loads_response_and_skips_invalid_records() {
    let catalog = Catalog::from_json_str(EXPORT).expect("parse export");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.skipped().len(), 1);
    assert_eq!(catalog.skipped()[0].index, 3);
    assert!(catalog.skipped()[0].reason.contains("name"));
}

#[test]
fn in_stock_keeps_document_order() {
    let catalog = Catalog::from_json_str(EXPORT).expect("parse export");
    let names: Vec<String> = catalog.in_stock().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Rainbow Zoa", "Acro Frag"]);
}

#[test]
fn slug_lookup_finds_sold_out_entries() {
    let catalog = Catalog::from_json_str(EXPORT).expect("parse export");
    let entry = catalog.find_by_slug("jawbreaker").expect("jawbreaker");
    assert_eq!(entry.status, StockStatus::SoldOut);
    assert!(catalog.find_by_slug("nameless").is_none());
    assert!(catalog.find_by_slug("missing").is_none());
}

#[test]
fn bare_array_and_null_result() {
    let catalog = Catalog::from_json_str("[]").expect("parse empty array");
    assert!(catalog.is_empty());
    let catalog = Catalog::from_json_str(r#"{ "result": null }"#).expect("parse null result");
    assert!(catalog.is_empty());
}

#[test]
fn duplicate_slug_keeps_first_for_lookup() {
    let json = r#"[
      { "id": "a", "name": "First", "slug": "dup", "price": 1, "category": "sps", "image": "i" },
      { "id": "b", "name": "Second", "slug": "dup", "price": 2, "category": "sps", "image": "i" }
    ]"#;
    let catalog = Catalog::from_json_str(json).expect("parse");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_by_slug("dup").map(|e| e.id.as_str()), Some("a"));
}

#[test]
fn rejects_unexpected_shapes() {
    assert!(matches!(
        Catalog::from_json_str("42"),
        Err(StoreError::InvalidShape { .. })
    ));
    assert!(matches!(
        Catalog::from_json_str(r#"{ "items": [] }"#),
        Err(StoreError::InvalidShape { .. })
    ));
    assert!(matches!(
        Catalog::from_json_str(r#"{ "result": "nope" }"#),
        Err(StoreError::InvalidShape { .. })
    ));
    assert!(matches!(
        Catalog::from_json_str("{ not json"),
        Err(StoreError::Parse { path: None, .. })
    ));
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, EXPORT).expect("write export");
    let catalog = Catalog::load(&path).expect("load export");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.source(), Some(path.as_path()));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Catalog::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io { operation: "read", .. }));
    assert!(err.user_message().contains("absent.json"));
    assert!(err.suggestion().is_some());
}

#[test]
fn from_entries_indexes_slugs() {
    let parsed = Catalog::from_json_str(EXPORT).expect("parse export");
    let rebuilt = Catalog::from_entries(parsed.entries().to_vec());
    assert_eq!(rebuilt.len(), parsed.len());
    assert!(rebuilt.skipped().is_empty());
    assert!(rebuilt.source().is_none());
    assert_eq!(
        rebuilt.find_by_slug("acro-frag").map(|e| e.name.as_str()),
        Some("Acro Frag")
    );
}
