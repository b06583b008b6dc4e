//! The site kickstart command: from parsed arguments to the printed listing.

use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::Args;
use crate::config::get_settings;
use crate::error::Result;
use crate::generator::Services;
use crate::package::{ensure_new_package, LocalPackageManager};
use crate::prompt::{select_generator, Prompter};

/// Runs one kickstart and returns the listing of generated files.
///
/// Relative directories are resolved against `current_dir`, which is also
/// where settings files are looked up.
///
/// # Flow
/// 1. Loads settings
/// 2. Rejects invalid or existing package keys
/// 3. Selects the generator
/// 4. Generates the package
pub fn kickstart_site(args: &Args, prompt: &dyn Prompter, current_dir: &Path) -> Result<String> {
    let settings = get_settings(args.config.as_deref(), current_dir)?;

    let packages_dir = args.packages_dir.as_ref().unwrap_or(&settings.packages_dir);
    let packages_dir = current_dir.join(packages_dir);
    debug!("Creating site packages in {}", packages_dir.display());
    let package_manager = LocalPackageManager::new(packages_dir);

    ensure_new_package(&package_manager, &args.package_key)?;

    let entry = select_generator(prompt, args.generator.as_deref())?;

    let templates = settings.template_bundle();
    let services = Services::new(&package_manager, &settings.dimensions, &templates);
    let generator = entry.build(services);

    let generated_files = generator.generate_site_package(&args.package_key, &args.site_name)?;
    Ok(format_manifest(&generated_files))
}

/// One path per line, in write order.
pub fn format_manifest(generated_files: &[PathBuf]) -> String {
    generated_files.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join("\n")
}
