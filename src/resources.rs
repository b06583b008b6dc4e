//! Template resolution and the bundled template resources.
//!
//! Templates are addressed by a `resource://` locator below the variant's
//! private namespace. They are compiled into the binary, or read from a
//! directory with the same `Private/<Variant>Generator/...` layout.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::RESOURCE_NAMESPACE;
use crate::error::{Error, Result};

/// The two boilerplate flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorVariant {
    Fluid,
    Afx,
}

impl GeneratorVariant {
    /// Directory of the variant's templates below `Private/`.
    pub fn resource_dir(&self) -> &'static str {
        match self {
            GeneratorVariant::Fluid => "FluidGenerator",
            GeneratorVariant::Afx => "AfxGenerator",
        }
    }
}

/// Stable locator of a bundled template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the resource relative to the namespace root,
    /// e.g. `Private/FluidGenerator/Content/Sites.xml`.
    pub fn relative_path(&self) -> &str {
        self.0.strip_prefix(RESOURCE_NAMESPACE).unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a logical template name to its locator. Pure lookup: a missing
/// resource is only noticed when the bundle loads it.
pub fn resolve(variant: GeneratorVariant, template: &str) -> ResourceLocator {
    ResourceLocator(format!(
        "{}Private/{}/{}",
        RESOURCE_NAMESPACE,
        variant.resource_dir(),
        template.trim_start_matches('/')
    ))
}

macro_rules! embedded {
    ($($path:literal),* $(,)?) => {
        &[$((
            $path,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path)),
        )),*]
    };
}

const EMBEDDED: &[(&str, &str)] = embedded![
    "Private/FluidGenerator/Content/Sites.xml",
    "Private/FluidGenerator/Fusion/Root.fusion",
    "Private/FluidGenerator/Fusion/NodeTypes/Pages/Page.fusion",
    "Private/FluidGenerator/Template/SiteTemplate.html",
    "Private/FluidGenerator/Configuration/NodeTypes.Document.Page.yaml",
    "Private/AfxGenerator/Content/Sites.xml",
    "Private/AfxGenerator/Fusion/Root.fusion",
    "Private/AfxGenerator/Fusion/Document/Page.fusion",
    "Private/AfxGenerator/Fusion/Document/AbstractPage.fusion",
    "Private/AfxGenerator/Configuration/NodeTypes.Document.Page.yaml",
];

/// Where template sources are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateBundle {
    /// Templates compiled into the binary
    #[default]
    Embedded,
    /// Templates read from a directory
    Directory(PathBuf),
}

impl TemplateBundle {
    pub fn directory<P: AsRef<Path>>(path: P) -> Self {
        TemplateBundle::Directory(path.as_ref().to_path_buf())
    }

    /// Loads the source text behind a locator.
    ///
    /// # Errors
    /// * `Error::ResourceNotFoundError` if the bundle has no such resource
    /// * `Error::IoError` if an existing resource cannot be read
    pub fn load(&self, locator: &ResourceLocator) -> Result<String> {
        let relative = locator.relative_path();
        match self {
            TemplateBundle::Embedded => EMBEDDED
                .iter()
                .find(|(path, _)| *path == relative)
                .map(|(_, source)| source.to_string())
                .ok_or_else(|| not_found(locator)),
            TemplateBundle::Directory(root) => {
                let path = root.join(relative);
                debug!("Loading template from {}", path.display());
                if !path.is_file() {
                    return Err(not_found(locator));
                }
                Ok(std::fs::read_to_string(path)?)
            }
        }
    }
}

fn not_found(locator: &ResourceLocator) -> Error {
    Error::ResourceNotFoundError { locator: locator.to_string() }
}
