use std::path::PathBuf;

use crate::error::Result;
use crate::renderer::RenderStrategy;
use crate::resources::GeneratorVariant;

use super::{Services, SitePackageGenerator, SiteRun};

/// Document prototypes written by the AFX generator, relative to
/// `Resources/Private`. Each file is self-contained, no page template.
const DOCUMENT_FUSION: [&str; 2] =
    ["Fusion/Document/Page.fusion", "Fusion/Document/AbstractPage.fusion"];

/// Generator for a site rendered purely with AFX.
pub struct AfxTemplateGenerator<'a> {
    services: Services<'a>,
}

impl<'a> AfxTemplateGenerator<'a> {
    pub fn new(services: Services<'a>) -> Self {
        Self { services }
    }
}

impl SitePackageGenerator for AfxTemplateGenerator<'_> {
    fn generate_site_package(&self, package_key: &str, site_name: &str) -> Result<Vec<PathBuf>> {
        let mut run =
            SiteRun::start(self.services, GeneratorVariant::Afx, package_key, site_name)?;

        run.generate_sites_xml()?;
        run.generate_root_fusion()?;
        generate_document_fusion(&mut run)?;
        run.generate_node_types_configuration()?;
        run.generate_additional_folders()?;

        Ok(run.finish())
    }
}

fn generate_document_fusion(run: &mut SiteRun<'_>) -> Result<()> {
    let context = run.contexts().page_composition();
    let private = run.resources_path().join("Private");

    for path in DOCUMENT_FUSION {
        run.emit_template(path, RenderStrategy::LiteralSubstitution, &context, private.join(path))?;
    }
    Ok(())
}
