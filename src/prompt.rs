//! User interaction: choosing the generator to run.

use crate::error::{Error, Result};
use crate::registry::{find_generator, generator_names, GeneratorEntry, GENERATORS};
use dialoguer::Select;
use log::debug;

/// Trait for asking the user to pick one of several items.
pub trait Prompter {
    /// Returns the index of the selected item.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Picks the generator to run: the requested one if given, otherwise the
/// user's interactive choice.
pub fn select_generator(
    prompt: &dyn Prompter,
    requested: Option<&str>,
) -> Result<&'static GeneratorEntry> {
    if let Some(requested) = requested {
        debug!("Using requested generator '{}'", requested);
        return find_generator(requested);
    }

    let names = generator_names();
    let selection = prompt.select("What generator do you want to use?", &names)?;
    GENERATORS
        .get(selection)
        .ok_or_else(|| Error::PromptError(format!("invalid selection {selection}")))
}
