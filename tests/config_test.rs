// tests/config_test.rs
use std::fs;
use std::path::PathBuf;

use docs_publish::config::{load_config, Config, SelectionModeConfig};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_load_config_from_custom_path() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("docspublish.toml");
    fs::write(
        &config_path,
        r#"
            [site]
            generator_repo = "/srv/website"
            output_repo = "/srv/website-generated"

            [selection]
            window_size = 2

            [[components]]
            name = "hub"
            repo = "/srv/hub"
        "#,
    )
    .unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.site.generator_repo, PathBuf::from("/srv/website"));
    assert_eq!(config.selection.window_size, 2);
    assert_eq!(config.components.len(), 1);
    assert_eq!(config.components[0].branch, "main");
}

#[test]
fn test_load_config_missing_custom_path_fails() {
    let result = load_config(Some("/nonexistent/docspublish.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_env_overrides_paths_and_window() {
    let toml_str = r#"
        [site]
        generator_repo = "/srv/website"

        [selection]
        window_size = 3

        [[components]]
        name = "hub"
        repo = "/srv/hub"
    "#;
    let mut config: Config = toml::from_str(toml_str).unwrap();

    std::env::set_var("SOURCE_PATH", "/ci/website");
    std::env::set_var("DOCS_OUTPUT_PATH", "/ci/out");
    std::env::set_var("RELEASES_TO_INCLUDE", "5");
    std::env::set_var("HUB_PATH", "/ci/hub");

    let result = config.apply_env_overrides();

    std::env::remove_var("SOURCE_PATH");
    std::env::remove_var("DOCS_OUTPUT_PATH");
    std::env::remove_var("RELEASES_TO_INCLUDE");
    std::env::remove_var("HUB_PATH");

    result.unwrap();
    assert_eq!(config.site.generator_repo, PathBuf::from("/ci/website"));
    assert_eq!(config.site.output_repo, PathBuf::from("/ci/out"));
    assert_eq!(config.selection.window_size, 5);
    assert_eq!(config.components[0].repo, PathBuf::from("/ci/hub"));
}

#[test]
#[serial]
fn test_env_override_rejects_bad_window() {
    let mut config = Config::default();

    std::env::set_var("RELEASES_TO_INCLUDE", "many");
    let result = config.apply_env_overrides();
    std::env::remove_var("RELEASES_TO_INCLUDE");

    assert!(result.is_err());
}

#[test]
fn test_selection_mode_parsing() {
    let config: Config = toml::from_str(
        r#"
            [selection]
            mode = "explicit-list"
        "#,
    )
    .unwrap();
    assert_eq!(config.selection.mode, SelectionModeConfig::ExplicitList);
}
