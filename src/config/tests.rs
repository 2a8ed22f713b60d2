//! Tests for config functionality.

use crate::config::types::{DEFAULT_ENGINE, DISABLED_ENGINE};
use crate::config::{ConfigLoader, EngineDescriptor, GlobalConfig, ProjectConfig, ValidationMode};
use crate::error::MmrError;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_default_config() {
    let config = GlobalConfig::default();

    assert!(config.enabled);
    assert_eq!(config.default_engine, None);
    assert_eq!(config.fallback_engine(), "claude");
    assert!(config.engines.is_empty());
    assert!(config.routing_rules.by_agent_type.is_empty());
    assert_eq!(config.engine_validation, ValidationMode::Strict);
}

#[test]
fn test_default_value_table() {
    assert_eq!(DEFAULT_ENGINE, "claude");
    assert_eq!(DISABLED_ENGINE, "claude");
}

#[test]
fn test_parse_minimal_json() {
    let config = GlobalConfig::from_json("{}").unwrap();

    assert!(config.enabled);
    assert_eq!(config.fallback_engine(), "claude");
    assert!(config.known_engines().is_empty());
}

#[test]
fn test_parse_full_json() {
    let json = r#"{
        "enabled": true,
        "default_engine": "codex",
        "engine_validation": "permissive",
        "engines": {
            "claude": { "cli": "claude", "description": "Anthropic CLI" },
            "gemini": { "cli": "gemini", "model": "gemini-2.5-pro", "description": "Google CLI" },
            "codex": { "cli": "codex" }
        },
        "routing_rules": {
            "by_agent_type": {
                "gsd-phase-researcher": "gemini",
                "gsd-planner": "claude"
            }
        }
    }"#;
    let config = GlobalConfig::from_json(json).unwrap();

    assert!(config.enabled);
    assert_eq!(config.default_engine.as_deref(), Some("codex"));
    assert_eq!(config.fallback_engine(), "codex");
    assert_eq!(config.engine_validation, ValidationMode::Permissive);
    assert_eq!(config.known_engines(), vec!["claude", "codex", "gemini"]);

    let gemini = config.engines.get("gemini").unwrap();
    assert_eq!(gemini.cli, "gemini");
    assert_eq!(gemini.model.as_deref(), Some("gemini-2.5-pro"));
    assert_eq!(gemini.description.as_deref(), Some("Google CLI"));

    assert_eq!(config.routing_rule("gsd-phase-researcher"), Some("gemini"));
    assert_eq!(config.routing_rule("gsd-planner"), Some("claude"));
    assert_eq!(config.routing_rule("gsd-executor"), None);
}

#[test]
fn test_empty_default_engine_uses_claude() {
    let config = GlobalConfig::from_json(r#"{"default_engine": ""}"#).unwrap();
    assert_eq!(config.default_engine, None);
    assert_eq!(config.fallback_engine(), "claude");
}

#[test]
fn test_enabled_false_disables() {
    let config = GlobalConfig::from_json(r#"{"enabled": false}"#).unwrap();
    assert!(!config.enabled);
}

#[test]
fn test_engine_entries_of_any_shape_are_known() {
    let config =
        GlobalConfig::from_json(r#"{"engines": {"claude": {}, "gemini": true, "codex": {"cli": 3}}}"#)
            .unwrap();

    assert!(config.is_known_engine("claude"));
    assert!(config.is_known_engine("gemini"));
    assert!(config.is_known_engine("codex"));
    assert!(!config.is_known_engine("bogus-engine"));
    assert_eq!(config.engines.get("gemini"), Some(&EngineDescriptor::default()));
}

#[test]
fn test_wrong_shaped_sections_read_as_absent() {
    let json = r#"{
        "engines": ["claude"],
        "routing_rules": "gemini",
        "engine_validation": "sometimes"
    }"#;
    let config = GlobalConfig::from_json(json).unwrap();

    assert!(config.engines.is_empty());
    assert!(config.routing_rules.by_agent_type.is_empty());
    assert_eq!(config.engine_validation, ValidationMode::Strict);
}

#[test]
fn test_global_must_be_an_object() {
    assert!(GlobalConfig::from_json("[]").is_err());
    assert!(GlobalConfig::from_json("null").is_err());
    assert!(GlobalConfig::from_json("{ not json").is_err());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = GlobalConfig::from_json(r#"{"future_setting": {"x": 1}, "enabled": true}"#).unwrap();
    assert!(config.enabled);
}

#[test]
fn test_validation_mode_display() {
    assert_eq!(ValidationMode::Strict.to_string(), "strict");
    assert_eq!(ValidationMode::Permissive.to_string(), "permissive");
}

#[test]
fn test_project_overrides_navigation() {
    let json = r#"{
        "mmr": {
            "override_engine": "codex",
            "agent_overrides": { "gsd-executor": "gemini" }
        }
    }"#;
    let project = ProjectConfig::from_json(json).unwrap();

    assert_eq!(project.default_override(), Some("codex"));
    assert_eq!(project.agent_override("gsd-executor"), Some("gemini"));
    assert_eq!(project.agent_override("gsd-planner"), None);
}

#[test]
fn test_project_without_mmr_section() {
    let project = ProjectConfig::from_json(r#"{"model_profile": "balanced"}"#).unwrap();

    assert!(project.overrides().is_none());
    assert_eq!(project.default_override(), None);
    assert_eq!(project.agent_override("gsd-executor"), None);
}

#[test]
fn test_project_mmr_of_wrong_shape_is_absent() {
    let project = ProjectConfig::from_json(r#"{"mmr": "gemini"}"#).unwrap();
    assert!(project.overrides().is_none());

    let project = ProjectConfig::from_json(r#"{"mmr": {"agent_overrides": 5}}"#).unwrap();
    assert!(project.overrides().is_some());
    assert_eq!(project.agent_override("gsd-executor"), None);
}

#[test]
fn test_project_empty_override_is_absent() {
    let project =
        ProjectConfig::from_json(r#"{"mmr": {"override_engine": "", "agent_overrides": {"a": ""}}}"#)
            .unwrap();
    assert_eq!(project.default_override(), None);
    assert_eq!(project.agent_override("a"), None);
}

#[test]
fn test_malformed_project_is_absent() {
    assert!(ProjectConfig::from_json("{ oops").is_none());
    assert!(ProjectConfig::from_json("null").is_none());
    assert!(ProjectConfig::from_json("[1, 2]").is_none());
}

#[test]
fn test_loader_paths() {
    let loader = ConfigLoader::new("/home/dev", "/work/project");

    assert_eq!(
        loader.global_config_path(),
        Path::new("/home/dev/.claude/mmr/config.json")
    );
    assert_eq!(
        loader.project_config_path(),
        Path::new("/work/project/.planning/config.json")
    );
}

#[test]
fn test_loader_reads_both_documents() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let loader = ConfigLoader::new(home.path(), project.path());

    write_file(
        &loader.global_config_path(),
        r#"{"default_engine": "claude", "engines": {"claude": {}, "gemini": {}}}"#,
    );
    write_file(
        &loader.project_config_path(),
        r#"{"mmr": {"override_engine": "gemini"}}"#,
    );

    let global = loader.load_global().unwrap();
    assert_eq!(global.known_engines(), vec!["claude", "gemini"]);

    let project_config = loader.load_project().unwrap();
    assert_eq!(project_config.default_override(), Some("gemini"));
}

#[test]
fn test_loader_missing_global_is_config_not_found() {
    let home = TempDir::new().unwrap();
    let loader = ConfigLoader::new(home.path(), home.path());

    let err = loader.load_global().unwrap_err();
    match &err {
        MmrError::ConfigNotFound { path, .. } => {
            assert_eq!(path, &loader.global_config_path());
        }
        other => panic!("expected ConfigNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains(".claude/mmr/config.json"));
}

#[test]
fn test_loader_malformed_global_is_config_not_found() {
    let home = TempDir::new().unwrap();
    let loader = ConfigLoader::new(home.path(), home.path());
    write_file(&loader.global_config_path(), "{ \"enabled\": ");

    let err = loader.load_global().unwrap_err();
    assert!(matches!(err, MmrError::ConfigNotFound { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_loader_missing_or_malformed_project_is_absent() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let loader = ConfigLoader::new(home.path(), project.path());

    assert!(loader.load_project().is_none());

    write_file(&loader.project_config_path(), "not json at all");
    assert!(loader.load_project().is_none());
}
