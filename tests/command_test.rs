use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use site_kickstarter::cli::Args;
use site_kickstarter::command::{format_manifest, kickstart_site};
use site_kickstarter::error::{Error, Result};
use site_kickstarter::prompt::Prompter;
use tempfile::TempDir;

/// Prompter that fails the test when asked.
struct NoPrompt;

impl Prompter for NoPrompt {
    fn select(&self, prompt: &str, _items: &[&str]) -> Result<usize> {
        panic!("unexpected prompt: {prompt}");
    }
}

/// Prompter always picking the second generator.
struct SecondChoice;

impl Prompter for SecondChoice {
    fn select(&self, _prompt: &str, _items: &[&str]) -> Result<usize> {
        Ok(1)
    }
}

fn args(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("site-kickstarter").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_format_manifest() {
    let files = [PathBuf::from("a/Sites.xml"), PathBuf::from("b/Root.fusion")];
    assert_eq!(format_manifest(&files), "a/Sites.xml\nb/Root.fusion");
    assert_eq!(format_manifest(&[]), "");
}

#[test_log::test]
fn test_kickstart_lists_generated_files() {
    let temp_dir = TempDir::new().unwrap();
    let args = args(&["--generator", "fluid", "Acme.Demo", "Demo"]);

    let listing = kickstart_site(&args, &NoPrompt, temp_dir.path()).unwrap();

    let root = temp_dir.path().join("Packages/Sites/Acme.Demo");
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 5);
    let line_for = |file: &str| root.join(file).display().to_string();
    assert_eq!(lines[0], line_for("Resources/Private/Content/Sites.xml"));
    assert_eq!(lines[4], line_for("Configuration/NodeTypes.Document.Page.yaml"));
    assert!(!listing.ends_with('\n'));
    for line in lines {
        assert!(PathBuf::from(line).is_file(), "{line} was not written");
    }
}

#[test]
fn test_kickstart_reads_settings_and_prompts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("kickstarter.yaml"),
        "packages_dir: Sites\ndimensions:\n  - identifier: language\n    label: Language\n    default: de\n",
    )
    .unwrap();
    let args = args(&["Acme.Demo", "Demo"]);

    let listing = kickstart_site(&args, &SecondChoice, temp_dir.path()).unwrap();

    let root = temp_dir.path().join("Sites/Acme.Demo");
    assert!(listing.contains("Resources/Private/Fusion/Document/AbstractPage.fusion"));
    let sites = fs::read_to_string(root.join("Resources/Private/Content/Sites.xml")).unwrap();
    assert!(sites.contains("<language>de</language>"));
}

#[test]
fn test_kickstart_rejects_invalid_key_before_prompting() {
    let temp_dir = TempDir::new().unwrap();
    let args = args(&["Acme", "Demo"]);

    let result = kickstart_site(&args, &NoPrompt, temp_dir.path());

    assert!(matches!(
        result,
        Err(Error::InvalidPackageKeyError { package_key }) if package_key == "Acme"
    ));
    assert!(!temp_dir.path().join("Packages").exists());
}

#[test]
fn test_binary_prints_manifest() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("site-kickstarter").unwrap();
    cmd.current_dir(temp_dir.path()).args(["--generator", "afx", "Acme.Demo", "Demo"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resources/Private/Content/Sites.xml"))
        .stdout(predicate::str::contains("Document/AbstractPage.fusion"))
        .stdout(predicate::str::contains("composer.json").not());
}

#[test]
fn test_binary_exits_with_error_message() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("site-kickstarter").unwrap();
    cmd.current_dir(temp_dir.path()).args(["--generator", "fluid", "acme_demo", "Demo"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Package key \"acme_demo\" is not valid. Only UpperCamelCase",
        ));
}

#[test]
fn test_binary_missing_arguments_prints_help() {
    let mut cmd = Command::cargo_bin("site-kickstarter").unwrap();
    cmd.arg("Acme.Demo");

    cmd.assert().code(1).stdout(predicate::str::contains("PACKAGE_KEY"));
}
