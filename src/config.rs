//! Settings handling for the site kickstarter.
//! Settings are read from `kickstarter.json`, `kickstarter.yml` or
//! `kickstarter.yaml`, all of them optional.

use crate::constants::DEFAULT_PACKAGES_DIR;
use crate::dimensions::Dimension;
use crate::error::{Error, Result};
use crate::resources::TemplateBundle;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings of a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory new site packages are created in
    pub packages_dir: PathBuf,
    /// Directory overriding the bundled templates
    pub templates_dir: Option<PathBuf>,
    /// Content dimensions written into the site descriptor
    pub dimensions: Vec<Dimension>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            templates_dir: None,
            dimensions: Vec::new(),
        }
    }
}

impl Settings {
    /// Template bundle selected by these settings.
    pub fn template_bundle(&self) -> TemplateBundle {
        match &self.templates_dir {
            Some(dir) => TemplateBundle::directory(dir),
            None => TemplateBundle::Embedded,
        }
    }
}

/// Finds the first existing settings file in `dir`.
///
/// # Arguments
/// * `dir` - Directory to search
/// * `config_files` - List of file names to try, in order
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files.iter().map(|file| dir.as_ref().join(file)).find(|path| path.is_file())
}

/// Reads settings from a file.
///
/// # Errors
/// * `Error::ConfigError` if the file is missing or cannot be parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            path.display()
        )));
    }
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses settings content, trying JSON first and falling back to YAML.
/// Empty content yields the default settings.
pub fn parse_config(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the settings of a run: the explicit file if given, otherwise the
/// first settings file found in `search_dir`, otherwise defaults.
pub fn get_settings<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match find_config(search_dir, &crate::constants::CONFIG_FILES) {
        Some(path) => load_config(path),
        None => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
