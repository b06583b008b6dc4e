use site_kickstarter::config::{find_config, get_settings, load_config, parse_config, Settings};
use site_kickstarter::constants::CONFIG_FILES;
use site_kickstarter::dimensions::Dimension;
use site_kickstarter::error::Error;
use site_kickstarter::resources::TemplateBundle;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.packages_dir, PathBuf::from("Packages/Sites"));
    assert!(settings.templates_dir.is_none());
    assert!(settings.dimensions.is_empty());
    assert_eq!(settings.template_bundle(), TemplateBundle::Embedded);
}

#[test]
fn test_parse_json() {
    let settings = parse_config(
        r#"{"packages_dir": "DistributionPackages", "dimensions": [{"identifier": "language", "label": "Language", "default": "en"}]}"#,
    )
    .unwrap();

    assert_eq!(settings.packages_dir, PathBuf::from("DistributionPackages"));
    assert_eq!(settings.dimensions, vec![Dimension::new("language", "Language", "en")]);
}

#[test]
fn test_parse_yaml() {
    let settings = parse_config(
        "templates_dir: ./templates\ndimensions:\n  - identifier: language\n    default: de\n",
    )
    .unwrap();

    assert_eq!(settings.packages_dir, PathBuf::from("Packages/Sites"));
    assert_eq!(settings.template_bundle(), TemplateBundle::directory("./templates"));
    assert_eq!(settings.dimensions, vec![Dimension::new("language", "", "de")]);
}

#[test]
fn test_parse_empty() {
    assert_eq!(parse_config("").unwrap(), Settings::default());
}

#[test]
fn test_parse_invalid() {
    match parse_config("dimensions: 42") {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid configuration format")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_find_config_order() {
    let temp_dir = TempDir::new().unwrap();
    assert!(find_config(temp_dir.path(), &CONFIG_FILES).is_none());

    std::fs::write(temp_dir.path().join("kickstarter.yaml"), "{}").unwrap();
    std::fs::write(temp_dir.path().join("kickstarter.json"), "{}").unwrap();

    assert_eq!(
        find_config(temp_dir.path(), &CONFIG_FILES),
        Some(temp_dir.path().join("kickstarter.json"))
    );
}

#[test]
fn test_load_missing_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(temp_dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_get_settings() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(get_settings(None, temp_dir.path()).unwrap(), Settings::default());

    std::fs::write(temp_dir.path().join("kickstarter.yml"), "packages_dir: Sites\n").unwrap();
    let settings = get_settings(None, temp_dir.path()).unwrap();
    assert_eq!(settings.packages_dir, PathBuf::from("Sites"));

    let explicit = temp_dir.path().join("other.json");
    std::fs::write(&explicit, r#"{"packages_dir": "Other"}"#).unwrap();
    let settings = get_settings(Some(explicit.as_path()), temp_dir.path()).unwrap();
    assert_eq!(settings.packages_dir, PathBuf::from("Other"));
}
