//! Catalog of the available site package generators.

use crate::error::{Error, Result};
use crate::generator::{
    AfxTemplateGenerator, FluidTemplateGenerator, Services, SitePackageGenerator,
};

/// Builds a generator from its collaborators.
pub type GeneratorFactory = fn(Services<'_>) -> Box<dyn SitePackageGenerator + '_>;

/// A selectable generator.
pub struct GeneratorEntry {
    /// Short identifier usable on the command line
    pub id: &'static str,
    /// Name shown in the interactive selection
    pub name: &'static str,
    factory: GeneratorFactory,
}

impl GeneratorEntry {
    pub fn build<'a>(&self, services: Services<'a>) -> Box<dyn SitePackageGenerator + 'a> {
        (self.factory)(services)
    }

    fn matches(&self, requested: &str) -> bool {
        self.id.eq_ignore_ascii_case(requested) || self.name.eq_ignore_ascii_case(requested)
    }
}

fn fluid(services: Services<'_>) -> Box<dyn SitePackageGenerator + '_> {
    Box::new(FluidTemplateGenerator::new(services))
}

fn afx(services: Services<'_>) -> Box<dyn SitePackageGenerator + '_> {
    Box::new(AfxTemplateGenerator::new(services))
}

/// Every generator, in selection order.
pub static GENERATORS: [GeneratorEntry; 2] = [
    GeneratorEntry { id: "fluid", name: "Fluid Basic", factory: fluid },
    GeneratorEntry { id: "afx", name: "AFX Basic", factory: afx },
];

/// Display names of all generators, in selection order.
pub fn generator_names() -> Vec<&'static str> {
    GENERATORS.iter().map(|entry| entry.name).collect()
}

/// Looks up a generator by id or display name, ignoring case.
///
/// # Errors
/// * `Error::UnknownGeneratorError` if nothing matches
pub fn find_generator(requested: &str) -> Result<&'static GeneratorEntry> {
    GENERATORS
        .iter()
        .find(|entry| entry.matches(requested.trim()))
        .ok_or_else(|| Error::UnknownGeneratorError(requested.to_string()))
}
