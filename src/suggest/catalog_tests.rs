use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn test_parse_catalog_empty_object() {
    let index = parse_catalog("{}").unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_parse_catalog_joined_and_list_tags() {
    let content = r#"{
        "tags": ["draft", "  "],
        "articles": [
            { "id": 1, "tags": "PHP, Web開發, 資料庫" },
            { "id": 2, "tags": ["Web開發", "Rust"] }
        ]
    }"#;

    let index = parse_catalog(content).unwrap();
    assert_eq!(index.len(), 5);
    assert_eq!(index.usage("Web開發"), 2);
    assert_eq!(index.usage("draft"), 0);
    assert_eq!(index.query("", 1), vec!["Web開發"]);
}

#[test]
fn test_parse_catalog_invalid_json() {
    let result = parse_catalog("[1, 2");
    assert!(matches!(result, Err(TagError::Catalog(_))));
}

#[test]
fn test_parse_catalog_wrong_shape() {
    let result = parse_catalog(r#"{"articles": [{"id": "one", "tags": "x"}]}"#);
    assert!(matches!(result, Err(TagError::Catalog(_))));
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"articles": [{{"id": 3, "tags": "rust, cli"}}]}}"#).unwrap();

    let index = load_catalog(file.path()).unwrap();
    assert_eq!(index.article_tags(3), vec!["cli", "rust"]);
}

#[test]
fn test_load_catalog_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let error = load_catalog(&path).unwrap_err();
    assert!(error.to_string().contains("missing.json"));
}
