//! Tests for configuration loading.

use std::io::Write;

use brood_cli::config::{AppConfig, load_config};
use brood_model::SetLabel;
use tempfile::NamedTempFile;

fn label(letter: char) -> SetLabel {
    SetLabel::new(letter).unwrap()
}

#[test]
fn empty_file_yields_defaults() {
    let config = AppConfig::from_toml("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.utc_offset_minutes, 540);
    assert_eq!(config.policy.generation_limit, 3);
    assert_eq!(config.policy.population_limit(label('E')), 100);
    assert_eq!(config.policy.population_limit(label('A')), 50);
}

#[test]
fn partial_policy_keeps_other_defaults() {
    let config = AppConfig::from_toml(
        r#"
known_sets = ["E", "C"]

[policy]
generation_limit = 4

[policy.population_limits]
C = 20
"#,
    )
    .unwrap();

    assert_eq!(config.known_sets, vec![label('E'), label('C')]);
    assert_eq!(config.utc_offset_minutes, 540);
    assert_eq!(config.policy.generation_limit, 4);
    assert_eq!(config.policy.default_population_limit, 50);
    assert_eq!(config.policy.population_limit(label('C')), 20);
}

#[test]
fn invalid_set_label_is_rejected() {
    assert!(AppConfig::from_toml(r#"known_sets = ["EE"]"#).is_err());
}

#[test]
fn explicit_path_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"utc_offset_minutes = 0\n").unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.utc_offset_minutes, 0);
    assert_eq!(config.known_sets.len(), 3);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let error = load_config(Some(std::path::Path::new("/nonexistent/brood.toml"))).unwrap_err();
    assert!(format!("{error:#}").contains("read configuration"));
}
