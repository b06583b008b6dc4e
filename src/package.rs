//! Package registry: key validation and creation of empty site packages.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use crate::constants::{
    MANIFEST_FILE, PACKAGE_KEY_PATTERN, PACKAGE_TYPE, REQUIRED_PACKAGES, SUGGESTED_PACKAGES,
};
use crate::error::{Error, Result};

static PACKAGE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PACKAGE_KEY_PATTERN).expect("package key pattern is valid")
});

/// An installed package on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    key: String,
    path: PathBuf,
}

impl Package {
    pub fn new<K: Into<String>, P: Into<PathBuf>>(key: K, path: P) -> Self {
        Self { key: key.into(), path: path.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resources_path(&self) -> PathBuf {
        self.path.join("Resources")
    }

    pub fn configuration_path(&self) -> PathBuf {
        self.path.join("Configuration")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE)
    }
}

/// Metadata written into the manifest of a new package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub description: String,
    pub require: IndexMap<String, String>,
    pub suggest: IndexMap<String, String>,
    pub extra: serde_json::Value,
}

impl PackageMetadata {
    /// Metadata of a site package: type tag plus the fixed framework
    /// dependencies and suggestions.
    pub fn site<S: AsRef<str>>(package_key: S, site_name: S) -> Self {
        let package_key = package_key.as_ref();
        let any_version = |name: &&str| (name.to_string(), "*".to_string());

        Self {
            name: composer_name(package_key),
            package_type: PACKAGE_TYPE.to_string(),
            description: format!("Site package for {}", site_name.as_ref()),
            require: REQUIRED_PACKAGES.iter().map(any_version).collect(),
            suggest: SUGGESTED_PACKAGES.iter().map(any_version).collect(),
            extra: serde_json::json!({ "neos": { "package-key": package_key } }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Derives the dependency manager name from a package key:
/// `Neos.Demo.Site` becomes `neos/demo-site`.
pub fn composer_name(package_key: &str) -> String {
    let lowercase = package_key.to_lowercase();
    match lowercase.split_once('.') {
        Some((vendor, name)) => format!("{}/{}", vendor, name.replace('.', "-")),
        None => lowercase,
    }
}

/// Registry of packages the generator creates packages in.
pub trait PackageManager {
    /// Checks the key against the naming rules.
    fn is_package_key_valid(&self, package_key: &str) -> Result<bool>;

    /// Whether a package with this key already exists.
    fn is_package_available(&self, package_key: &str) -> bool;

    /// Materializes an empty package with its manifest.
    ///
    /// # Errors
    /// * `Error::PackageExistsError` if the package already exists
    fn create_package(&self, package_key: &str, metadata: &PackageMetadata) -> Result<Package>;

    fn get_package(&self, package_key: &str) -> Result<Package>;
}

/// Package manager keeping one directory per package below a root directory.
#[derive(Debug, Clone)]
pub struct LocalPackageManager {
    packages_dir: PathBuf,
}

impl LocalPackageManager {
    pub fn new<P: AsRef<Path>>(packages_dir: P) -> Self {
        Self { packages_dir: packages_dir.as_ref().to_path_buf() }
    }

    fn package_path(&self, package_key: &str) -> PathBuf {
        self.packages_dir.join(package_key)
    }
}

impl PackageManager for LocalPackageManager {
    fn is_package_key_valid(&self, package_key: &str) -> Result<bool> {
        Ok(PACKAGE_KEY.is_match(package_key))
    }

    fn is_package_available(&self, package_key: &str) -> bool {
        self.package_path(package_key).exists()
    }

    fn create_package(&self, package_key: &str, metadata: &PackageMetadata) -> Result<Package> {
        if self.is_package_available(package_key) {
            return Err(Error::PackageExistsError { package_key: package_key.to_string() });
        }

        let package = Package::new(package_key, self.package_path(package_key));
        info!("Creating package {} in {}", package_key, package.path().display());

        fs::create_dir_all(package.path())?;
        fs::write(package.manifest_path(), metadata.to_json()?)?;
        debug!("Writing file: {}", package.manifest_path().display());

        Ok(package)
    }

    fn get_package(&self, package_key: &str) -> Result<Package> {
        if !self.is_package_available(package_key) {
            return Err(Error::PackageNotFoundError { package_key: package_key.to_string() });
        }
        Ok(Package::new(package_key, self.package_path(package_key)))
    }
}

/// Rejects invalid or already taken package keys before any file is written.
pub fn ensure_new_package(manager: &dyn PackageManager, package_key: &str) -> Result<()> {
    if !manager.is_package_key_valid(package_key)? {
        return Err(Error::InvalidPackageKeyError { package_key: package_key.to_string() });
    }
    if manager.is_package_available(package_key) {
        return Err(Error::PackageExistsError { package_key: package_key.to_string() });
    }
    Ok(())
}
