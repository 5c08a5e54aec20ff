use std::fs;

use devfonts_core::catalog::Catalog;
use devfonts_core::selection::SelectionState;
use tempfile::tempdir;

const SMALL: &str = r#"{
  "fonts": [
    { "familyName": "Fira Code", "displayName": "Fira Code", "ligatures": true },
    { "familyName": "Operator Mono", "displayName": "Operator Mono", "price": "$199" }
  ],
  "languages": [ { "name": "Rust", "mode": "rust" } ],
  "themes": [ { "name": "nord" } ],
  "code": "fn main() {}"
}"#;

#[test]
fn loads_catalog_from_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("catalog.json");
    fs::write(&path, SMALL).expect("write catalog");

    let catalog = Catalog::from_path(&path).expect("load");

    assert_eq!(catalog.fonts.len(), 2);
    assert_eq!(catalog.code, "fn main() {}");
    assert_eq!(catalog.mode_for("Rust"), Some("rust"));
    assert_eq!(catalog.mode_for("JavaScript"), None);

    let selection = SelectionState::for_catalog(&catalog).expect("selection");
    assert_eq!(selection.theme(), "nord");
    assert_eq!(selection.language(), "Rust");
}

#[test]
fn missing_file_names_the_path() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("absent.json");

    let err = Catalog::from_path(&path).expect_err("missing");
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn duplicate_themes_are_rejected() {
    let raw = r#"{"themes":[{"name":"nord"},{"name":"nord"}]}"#;
    let err = Catalog::from_json(raw).expect_err("duplicate");
    assert!(err.to_string().contains("duplicate theme name: nord"));
}

#[test]
fn font_lookup_by_display_name() {
    let catalog = Catalog::from_json(SMALL).expect("parse");
    let font = catalog
        .font_by_display_name("Operator Mono")
        .expect("present");
    assert_eq!(font.price.as_deref(), Some("$199"));
    assert!(catalog.font_by_display_name("operator mono").is_none());
}
