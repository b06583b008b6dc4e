//! Site kickstarter entry point.
//! Parses arguments, runs the kickstart and prints the generated files.

use site_kickstarter::{
    cli::{get_args, Args},
    command::kickstart_site,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let listing = kickstart_site(&args, &DialoguerPrompter::new(), &current_dir)?;
    println!("{}", listing);
    Ok(())
}
