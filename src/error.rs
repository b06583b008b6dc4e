//! Error handling for the site kickstarter.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// Errors that can occur while generating a site package.
///
/// Every error is terminal for the current run: nothing is retried and
/// files already written stay on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors serializing the package manifest
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur during settings parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures of the interactive terminal prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error(
        "Package key \"{package_key}\" is not valid. Only UpperCamelCase in the format \"Vendor.PackageKey\", please!"
    )]
    InvalidPackageKeyError { package_key: String },

    #[error("Package \"{package_key}\" already exists.")]
    PackageExistsError { package_key: String },

    #[error("Package \"{package_key}\" is not available.")]
    PackageNotFoundError { package_key: String },

    #[error("Template resource '{locator}' does not exist.")]
    ResourceNotFoundError { locator: String },

    #[error("Unknown generator '{0}'.")]
    UnknownGeneratorError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
