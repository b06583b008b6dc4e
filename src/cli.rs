//! Command-line interface implementation for the site kickstarter.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kickstart a new site package with basic Fusion and Sites.xml", long_about = None)]
pub struct Args {
    /// The package key for your site, e.g. "Acme.Demo"
    #[arg(value_name = "PACKAGE_KEY")]
    pub package_key: String,

    /// The site name of your site
    #[arg(value_name = "SITE_NAME")]
    pub site_name: String,

    /// Generator to use (id or name). Asks interactively when omitted
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Directory the site package is created in.
    /// Overrides the `packages_dir` setting.
    #[arg(short, long, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Settings file (JSON or YAML). Defaults to kickstarter.{json,yml,yaml}
    /// in the working directory when present
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
