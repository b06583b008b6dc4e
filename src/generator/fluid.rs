use std::path::PathBuf;

use crate::error::Result;
use crate::renderer::RenderStrategy;
use crate::resources::GeneratorVariant;

use super::{Services, SitePackageGenerator, SiteRun};

/// Generator for a site rendered through a Fluid page template.
pub struct FluidTemplateGenerator<'a> {
    services: Services<'a>,
}

impl<'a> FluidTemplateGenerator<'a> {
    pub fn new(services: Services<'a>) -> Self {
        Self { services }
    }
}

impl SitePackageGenerator for FluidTemplateGenerator<'_> {
    fn generate_site_package(&self, package_key: &str, site_name: &str) -> Result<Vec<PathBuf>> {
        let mut run =
            SiteRun::start(self.services, GeneratorVariant::Fluid, package_key, site_name)?;

        run.generate_sites_xml()?;
        run.generate_root_fusion()?;
        generate_page_fusion(&mut run)?;
        generate_default_template(&mut run)?;
        run.generate_node_types_configuration()?;
        run.generate_additional_folders()?;

        Ok(run.finish())
    }
}

/// `Private/Fusion/NodeTypes/Page.fusion`
fn generate_page_fusion(run: &mut SiteRun<'_>) -> Result<()> {
    let context = run.contexts().page_composition();
    let destination = run.resources_path().join("Private/Fusion/NodeTypes/Page.fusion");
    run.emit_template(
        "Fusion/NodeTypes/Pages/Page.fusion",
        RenderStrategy::LiteralSubstitution,
        &context,
        destination,
    )
}

/// `Private/Templates/Page/Default.html`
fn generate_default_template(run: &mut SiteRun<'_>) -> Result<()> {
    let context = run.contexts().page_template();
    let destination = run.resources_path().join("Private/Templates/Page/Default.html");
    run.emit_template(
        "Template/SiteTemplate.html",
        RenderStrategy::FullEngine,
        &context,
        destination,
    )
}
