//! File-loading tests for the intent catalog and QA table.

use std::fs;

use solace::catalog::{IntentCatalog, QaTable};
use solace::engine::Engine;
use tempfile::TempDir;

#[test]
fn load_intent_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("intents.json");
    fs::write(
        &path,
        r#"{
            "intents": [
                {
                    "tag": "greeting",
                    "patterns": ["hello", "hi there"],
                    "responses": ["Hello! How are you feeling today?", "Hi!"]
                },
                {
                    "tag": "sadness",
                    "patterns": ["I feel sad"],
                    "responses": ["I'm sorry to hear that."]
                }
            ]
        }"#,
    )
    .unwrap();

    let catalog = IntentCatalog::load(&path).unwrap();
    assert_eq!(catalog.groups().len(), 2);
    assert_eq!(catalog.groups()[0].tag, "greeting");
    assert_eq!(catalog.groups()[1].patterns, vec!["I feel sad"]);
}

#[test]
fn load_qa_table_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qa.json");
    fs::write(
        &path,
        r#"[
            {"question": "What is anxiety?", "answer": "Anxiety is a feeling of unease."},
            {"question": "What is stress?", "answer": "Stress is the body's reaction to pressure."}
        ]"#,
    )
    .unwrap();

    let table = QaTable::load(&path).unwrap();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[0].question, "What is anxiety?");
}

#[test]
fn loaded_sources_drive_the_engine() {
    let dir = TempDir::new().unwrap();
    let intents_path = dir.path().join("intents.json");
    let qa_path = dir.path().join("qa.json");
    fs::write(
        &intents_path,
        r#"{"intents": [
            {"tag": "greeting", "patterns": ["hello"], "responses": ["Hello there!"]}
        ]}"#,
    )
    .unwrap();
    fs::write(
        &qa_path,
        r#"[{"question": "what is anxiety", "answer": "Anxiety is a feeling of unease."}]"#,
    )
    .unwrap();

    let engine = Engine::new(
        IntentCatalog::load(&intents_path).unwrap(),
        QaTable::load(&qa_path).unwrap(),
    )
    .unwrap();

    assert_eq!(engine.reply("hello").text, "Hello there!");
    assert_eq!(
        engine.reply("what is anxiety").text,
        "Anxiety is a feeling of unease."
    );
}

#[test]
fn malformed_intent_json_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"intents": [{"tag": "x"}]}"#).unwrap();

    assert!(IntentCatalog::load(&path).is_err());
}

#[test]
fn structurally_invalid_catalog_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid.json");
    // Parses fine but the group has no responses.
    fs::write(
        &path,
        r#"{"intents": [{"tag": "x", "patterns": ["p"], "responses": []}]}"#,
    )
    .unwrap();

    let err = IntentCatalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("no responses"));
}

#[test]
fn qa_row_with_blank_answer_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qa.json");
    fs::write(&path, r#"[{"question": "q", "answer": "  "}]"#).unwrap();

    let err = QaTable::load(&path).unwrap_err();
    assert!(err.to_string().contains("answer"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(IntentCatalog::load(&path).is_err());
    assert!(QaTable::load(&path).is_err());
}
