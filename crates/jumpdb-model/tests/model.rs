use std::fs;

use jumpdb_model::{ConfigError, Field, GroupDocument, PipelineConfig, Record};
use serde_json::json;

#[test]
fn record_serializes_with_provenance_keys() {
    let record = Record {
        id: 3,
        cost: 100,
        name: "Widget".to_string(),
        source: "JumpX".to_string(),
        chapter: "Set".to_string(),
        description: "Hello world".to_string(),
        source_file: "set-1".to_string(),
        line: 1,
    };
    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(
        value,
        json!({
            "id": 3,
            "cost": 100,
            "name": "Widget",
            "source": "JumpX",
            "chapter": "Set",
            "description": "Hello world",
            "__source": "set-1",
            "__line": 1
        })
    );
}

#[test]
fn group_document_keys_render_as_strings() {
    let mut document = GroupDocument::new();
    document.insert(1, vec![Record::new("a")]);
    document.insert(3, Vec::new());
    let value = serde_json::to_value(&document).expect("serialize document");
    let object = value.as_object().expect("object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1", "3"]);
}

#[test]
fn loads_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("jumpdb.toml");
    fs::write(&path, "[headers]\n\"Perk Title\" = \"name\"\n").expect("write config");

    let config = PipelineConfig::load(&path).expect("load config");
    assert_eq!(config.headers.get("perktitle"), Some(&Field::Name));
    assert_eq!(config.headers.get("perkname"), Some(&Field::Name));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = PipelineConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}
