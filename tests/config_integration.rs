//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use anatomy::config::AppConfig;
use serial_test::serial;
use std::fs;

fn temp_config_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("anatomy_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ANATOMY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("ANATOMY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_persistence_key() {
    std::env::set_var("ANATOMY_PERSISTENCE__SCENE_KEY", "otherScene");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.persistence.scene_key, "otherScene");
    std::env::remove_var("ANATOMY_PERSISTENCE__SCENE_KEY");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("ANATOMY_WINDOW__TITLE");
    let dir = temp_config_dir("defaults");
    fs::copy("config/default.toml", dir.join("default.toml")).unwrap();

    let from_file = AppConfig::load_from(&dir).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.persistence.scene_key, builtin.persistence.scene_key);
    assert_eq!(from_file.persistence.indicator_ms, builtin.persistence.indicator_ms);
    assert_eq!(from_file.spawn_effect.marker_count, builtin.spawn_effect.marker_count);
    assert_eq!(from_file.layout.mobile_band_height, builtin.layout.mobile_band_height);
    assert_eq!(from_file.animation.rotation_speed, builtin.animation.rotation_speed);
    assert!((from_file.animation.wobble_amplitude - builtin.animation.wobble_amplitude).abs() < 1e-6);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    std::env::remove_var("ANATOMY_WINDOW__TITLE");
    let dir = temp_config_dir("user");
    fs::write(dir.join("default.toml"), "[window]\ntitle = \"Default\"\nwidth = 1024\n").unwrap();
    fs::write(dir.join("user.toml"), "[window]\ntitle = \"Mine\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.window.height, 720);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    std::env::remove_var("ANATOMY_WINDOW__TITLE");
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, AppConfig::default().window.title);
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = temp_config_dir("malformed");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    let _ = fs::remove_dir_all(&dir);
}
