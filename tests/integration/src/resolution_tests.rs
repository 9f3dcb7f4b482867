//! End-to-end resolution tests against on-disk fixtures
//!
//! Exercises the complete flow: layer discovery -> base loading -> resolution.

use commit_rules_core::{
    BaseRegistry, ConfigDocument, ConfigResolver, EffectiveConfig, Error, LayeredLoader, Profile,
    RuleCondition, RuleSeverity, RuleValue,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/commitlint")
}

fn fixture_bases() -> BaseRegistry {
    let mut registry = BaseRegistry::new();
    registry.load_dir(&fixtures().join("bases")).unwrap();
    registry
}

fn resolve(documents: &[ConfigDocument]) -> EffectiveConfig {
    ConfigResolver::new(&fixture_bases())
        .resolve(documents)
        .unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn fixture_bases_register_by_stem() {
    let registry = fixture_bases();
    assert_eq!(registry.names(), vec!["config-conventional", "team"]);
}

#[test]
fn layered_repo_and_local_documents_resolve_in_order() {
    let empty_global = TempDir::new().unwrap();
    let loader = LayeredLoader::with_global_dir(fixtures().join("layered"), empty_global.path());
    assert!(loader.has_config());
    assert!(loader.has_local_overrides());

    let documents = loader.load().unwrap();
    assert_eq!(documents.len(), 2);

    let config = resolve(&documents);

    // local overrides repo, which overrides team
    assert_eq!(config.allowed_values("scope-enum").unwrap().to_vec(), strings(&["cli"]));
    assert_eq!(config.severity_of("scope-empty"), Some(RuleSeverity::Warning));
    assert!(config.origin("scope-enum").unwrap().ends_with(".commitlintrc.local.toml"));

    // team overrides the conventional header length
    assert_eq!(config.get("header-max-length").unwrap().value, RuleValue::Integer(72));
    assert_eq!(config.origin("header-max-length"), Some("team"));

    // untouched conventional rules are inherited as-is
    assert_eq!(config.origin("type-enum"), Some("config-conventional"));
    assert_eq!(config.allowed_values("type-enum").unwrap().len(), 11);

    let overridden: Vec<&str> = config.conflicts().iter().map(|c| c.rule.as_str()).collect();
    assert_eq!(
        overridden,
        vec!["header-max-length", "scope-enum", "scope-empty", "scope-enum"]
    );
}

#[test]
fn global_layer_is_overridden_by_repository_bases() {
    let global = TempDir::new().unwrap();
    fs::write(
        global.path().join("config.toml"),
        "[rules]\nheader-max-length = [2, \"always\", 50]\nfooter-max-line-length = [1, \"always\", 80]\n",
    )
    .unwrap();

    let loader = LayeredLoader::with_global_dir(fixtures().join("layered"), global.path());
    let config = resolve(&loader.load().unwrap());

    assert_eq!(config.get("header-max-length").unwrap().value, RuleValue::Integer(72));
    assert_eq!(config.get("footer-max-line-length").unwrap().value, RuleValue::Integer(80));
}

#[test]
fn strict_profile_over_conventional_base() {
    let config = resolve(&[Profile::Strict.document().unwrap()]);

    let scope_empty = config.get("scope-empty").unwrap();
    assert_eq!(scope_empty.severity, RuleSeverity::Error);
    assert_eq!(scope_empty.condition, RuleCondition::Never);

    assert_eq!(
        config.allowed_values("scope-enum").unwrap().to_vec(),
        strings(&["core", "model", "prompt", "generator", "config", "init", "cli", "docs", "deps"])
    );
    assert_eq!(config.severity_of("subject-case"), Some(RuleSeverity::Off));
    assert_eq!(config.severity_of("body-max-line-length"), Some(RuleSeverity::Off));
    // inherited and untouched
    assert_eq!(config.severity_of("subject-full-stop"), Some(RuleSeverity::Error));
    assert!(config.enforced().all(|(name, _)| name != "subject-case"));
}

#[test]
fn lenient_profile_over_conventional_base() {
    let config = resolve(&[Profile::Lenient.document().unwrap()]);

    let body = config.get("body-max-line-length").unwrap();
    assert_eq!(body.severity, RuleSeverity::Warning);
    assert_eq!(body.value, RuleValue::Integer(100));

    assert_eq!(config.severity_of("type-enum"), Some(RuleSeverity::Warning));
    assert_eq!(config.severity_of("type-empty"), Some(RuleSeverity::Warning));
    assert_eq!(config.severity_of("subject-empty"), Some(RuleSeverity::Warning));
    assert_eq!(config.get("subject-case").unwrap().value, RuleValue::List(vec![]));
    assert!(!config.contains("scope-enum"));
}

#[test]
fn cyclic_bases_are_rejected() {
    let mut registry = BaseRegistry::new();
    registry.load_dir(&fixtures().join("cyclic")).unwrap();

    let root = ConfigDocument::new("root").extend("a");
    let err = ConfigResolver::new(&registry).resolve(&[root]).unwrap_err();

    match err {
        Error::ExtendsCycle { chain } => assert_eq!(chain, "a -> b -> a"),
        other => panic!("expected ExtendsCycle, got {other}"),
    }
}

#[test]
fn effective_config_serializes_with_origins() {
    let config = resolve(&[Profile::Strict.document().unwrap()]);
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["rules"]["scope-empty"], serde_json::json!([2, "never"]));
    assert_eq!(value["origins"]["scope-empty"], "profile:strict");
    assert_eq!(value["origins"]["type-case"], "config-conventional");
}

#[test]
fn conventional_extended_directly_and_through_team() {
    let root = ConfigDocument::new("root")
        .extend("@commitlint/config-conventional")
        .extend("team");
    let config = resolve(&[root]);

    assert_eq!(config.len(), 11);
    assert_eq!(config.origin("type-enum"), Some("config-conventional"));
    assert_eq!(config.origin("header-max-length"), Some("team"));

    let overridden: Vec<(&str, &str, &str)> = config
        .conflicts()
        .iter()
        .map(|c| (c.rule.as_str(), c.previous.as_str(), c.winner.as_str()))
        .collect();
    assert_eq!(
        overridden,
        vec![("header-max-length", "config-conventional", "team")]
    );
}
