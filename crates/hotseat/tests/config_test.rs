//! Tests for loading hotseat.toml.

use hotseat::HotseatConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_player1 = "Ada"
default_player2 = "Grace"
log_file = "/tmp/hotseat-test.log"
"#
    )
    .unwrap();

    let config = HotseatConfig::from_file(file.path()).unwrap();
    assert_eq!(config.default_player1(), "Ada");
    assert_eq!(config.default_player2(), "Grace");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/hotseat-test.log"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"default_player2 = "Grace""#).unwrap();

    let config = HotseatConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.default_player1(), "Player 1");
    assert_eq!(config.default_player2(), "Grace");
    assert_eq!(config.log_file(), &PathBuf::from("hotseat.log"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HotseatConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_player1 = [").unwrap();

    let err = HotseatConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_names_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"default_player1 = "Ada""#).unwrap();

    let config = HotseatConfig::from_file(file.path())
        .unwrap()
        .with_names(Some("Linus".to_string()), None);
    assert_eq!(config.default_player1(), "Linus");
    assert_eq!(config.default_player2(), "Player 2");
}
