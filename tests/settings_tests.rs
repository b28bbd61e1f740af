//! Integration tests for settings serialization and persistence.

use codingtext::{CompletionEngine, ConfigManager, EditRange, EngineSettings};
use tempfile::TempDir;

// =============================================================================
// Default settings verification
// =============================================================================

#[test]
fn test_default_settings() {
    let settings = EngineSettings::default();

    assert!(settings.auto_indent);
    assert!(settings.close_brackets);
    assert!(settings.close_quotes);
    assert!(settings.step_over_closers);
    assert!(settings.align_case_labels);
    assert!(settings.warn_unbalanced_closers);
    assert_eq!(CompletionEngine::default().settings(), &settings);
}

// =============================================================================
// EngineSettings — missing fields use defaults
// =============================================================================

#[test]
fn test_settings_deserialize_missing_fields() {
    let raw = r#"{ "auto_indent": false }"#;

    let settings: EngineSettings = serde_json::from_str(raw).expect("should deserialize");
    assert!(!settings.auto_indent);
    assert!(settings.close_brackets);
    assert!(settings.warn_unbalanced_closers);

    let empty: EngineSettings = serde_json::from_str("{}").expect("should deserialize");
    assert_eq!(empty, EngineSettings::default());
}

// =============================================================================
// ConfigManager round trip drives the engine
// =============================================================================

#[test]
fn test_saved_settings_change_engine_behavior() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let manager = ConfigManager::with_config_dir(temp_dir.path()).expect("manager");

    let settings = EngineSettings { auto_indent: false, ..EngineSettings::default() };
    manager.save_settings(&settings).expect("save settings");

    let engine = CompletionEngine::new(manager.load_settings().expect("load settings"));
    let result = engine.format_edit("\t\ttest {", EditRange::cursor(8), "\n");
    assert_eq!(result.text, "\t\ttest {\n");
    assert_eq!(result.cursor, EditRange::cursor(9));

    // Other features stay on.
    let result = engine.format_edit("test", EditRange::cursor(4), "(");
    assert_eq!(result.text, "test()");
}
