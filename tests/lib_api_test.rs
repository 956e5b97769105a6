//! Integration tests for the dialogue-ls library public API.
//!
//! These tests verify that the library can be used as an external
//! dependency, ensuring the lib+bin separation works correctly.

use std::fs;

use tempfile::TempDir;
use tower_lsp::lsp_types::Url;

use dialogue_ls::bbcode;
use dialogue_ls::config::Settings;
use dialogue_ls::index::DocumentIndex;

fn test_uri() -> Url {
    Url::parse("file:///scripts/main.dialogue").unwrap()
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert!(settings.hover);
    assert!(settings.tag_diagnostics);
    assert!(settings.keyword_snippets);
}

#[test]
fn test_settings_layered_from_workspace_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join(".dialogue-ls.toml"),
        "hover = false\ntag_diagnostics = false\n",
    )
    .unwrap();

    let settings = Settings::new(temp_dir.path()).expect("Settings should load");

    assert!(!settings.hover);
    assert!(!settings.tag_diagnostics);
    // Unset keys fall back to defaults
    assert!(settings.keyword_snippets);
}

#[test]
fn test_settings_without_any_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let settings = Settings::new(temp_dir.path()).expect("Settings should load");

    assert!(settings.hover);
    assert!(settings.tag_diagnostics);
    assert!(settings.keyword_snippets);
}

#[test]
fn test_document_index_accessible_from_external_crate() {
    let mut index = DocumentIndex::new();
    let uri = test_uri();

    index.update_document(&uri, "Alice: hello\n~ intro\n=> END");

    assert_eq!(index.characters(&uri), vec!["Alice"]);
    assert_eq!(index.titles(&uri), vec!["intro"]);
    assert_eq!(index.keywords().first(), Some(&"if"));

    index.remove_document(&uri);
    assert!(index.characters(&uri).is_empty());
}

#[test]
fn test_bbcode_catalogue_accessible() {
    assert!(bbcode::is_valid_tag("wave"));
    assert!(!bbcode::is_valid_tag("blorf"));

    let tag = bbcode::find_tag("b").expect("b should exist");
    let markdown = bbcode::tag_to_markdown(tag);
    assert!(markdown.contains("**[b]**"));
}

#[test]
fn test_handler_modules_accessible() {
    use dialogue_ls::completion::get_completions;
    use dialogue_ls::diagnostics::tag_diagnostics;
    use dialogue_ls::hover::hover;

    let _ = std::any::type_name_of_val(&get_completions);
    let _ = std::any::type_name_of_val(&tag_diagnostics);
    let _ = std::any::type_name_of_val(&hover);
}
