//! Site kickstarter creates new Neos site packages.
//! Given a package key and a site name it creates the package and fills it
//! with boilerplate descriptor, Fusion, template and node type files.

/// Command-line interface module
pub mod cli;

/// The kickstart command behind the binary
pub mod command;

/// Settings handling
/// Supports JSON and YAML formats (kickstarter.json, kickstarter.yml, kickstarter.yaml)
pub mod config;

pub mod constants;

/// Per-file variable contexts and node name derivation
pub mod context;

/// Content dimensions consumed by the site descriptor
pub mod dimensions;

/// Writing generated files and tracking the manifest
pub mod emitter;

/// Error types and handling
pub mod error;

/// The site package generators
pub mod generator;

pub mod logger;

/// Package key validation and package creation
pub mod package;

/// Generator selection
pub mod prompt;

/// Catalog of available generators
pub mod registry;

/// Literal and template engine rendering
pub mod renderer;

/// Template resolution and bundled templates
pub mod resources;
