//! Site package generators.
//!
//! A generator creates the package shell, renders a fixed list of
//! boilerplate files into it, creates the public asset folders and returns
//! the paths it wrote. [`SiteRun`] holds the steps both variants share.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::PUBLIC_FOLDERS;
use crate::context::{Context, ContextBuilder};
use crate::dimensions::DimensionSource;
use crate::emitter::FileEmitter;
use crate::error::Result;
use crate::package::{Package, PackageManager, PackageMetadata};
use crate::renderer::{RenderStrategy, Renderer};
use crate::resources::{resolve, GeneratorVariant, TemplateBundle};

mod afx;
mod fluid;

pub use afx::AfxTemplateGenerator;
pub use fluid::FluidTemplateGenerator;

/// Generates a site package and fills it with boilerplate data.
pub trait SitePackageGenerator {
    /// Creates the package and returns the generated files in write order.
    fn generate_site_package(&self, package_key: &str, site_name: &str) -> Result<Vec<PathBuf>>;
}

/// Collaborators a generator works with.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub package_manager: &'a dyn PackageManager,
    pub dimensions: &'a dyn DimensionSource,
    pub templates: &'a TemplateBundle,
}

impl<'a> Services<'a> {
    pub fn new(
        package_manager: &'a dyn PackageManager,
        dimensions: &'a dyn DimensionSource,
        templates: &'a TemplateBundle,
    ) -> Self {
        Self { package_manager, dimensions, templates }
    }
}

/// State of one generator run.
pub(crate) struct SiteRun<'a> {
    services: Services<'a>,
    variant: GeneratorVariant,
    renderer: Renderer,
    emitter: FileEmitter,
    package: Package,
    contexts: ContextBuilder<'a>,
}

impl<'a> SiteRun<'a> {
    /// Creates the package shell. The package manager's own files are not
    /// part of the run's manifest.
    pub(crate) fn start(
        services: Services<'a>,
        variant: GeneratorVariant,
        package_key: &'a str,
        site_name: &'a str,
    ) -> Result<Self> {
        info!("Generating {:?} site package {}", variant, package_key);

        let metadata = PackageMetadata::site(package_key, site_name);
        let package = services.package_manager.create_package(package_key, &metadata)?;

        Ok(Self {
            services,
            variant,
            renderer: Renderer::new(),
            emitter: FileEmitter::new(),
            package,
            contexts: ContextBuilder::new(package_key, site_name),
        })
    }

    pub(crate) fn contexts(&self) -> ContextBuilder<'a> {
        self.contexts
    }

    pub(crate) fn resources_path(&self) -> PathBuf {
        self.package.resources_path()
    }

    /// Resolves, renders and writes one template.
    pub(crate) fn emit_template<P: AsRef<Path>>(
        &mut self,
        template: &str,
        strategy: RenderStrategy,
        context: &Context,
        destination: P,
    ) -> Result<()> {
        let locator = resolve(self.variant, template);
        debug!("Resolved template {} to {}", template, locator);

        let source = self.services.templates.load(&locator)?;
        let content = self.renderer.render(strategy, &source, context)?;
        self.emitter.emit(destination, &content)
    }

    /// `Private/Content/Sites.xml`
    pub(crate) fn generate_sites_xml(&mut self) -> Result<()> {
        let dimensions = self.services.dimensions.find_all()?;
        let context = self.contexts.descriptor(dimensions);
        let destination = self.resources_path().join("Private/Content/Sites.xml");
        self.emit_template("Content/Sites.xml", RenderStrategy::FullEngine, &context, destination)
    }

    /// `Private/Fusion/Root.fusion`
    pub(crate) fn generate_root_fusion(&mut self) -> Result<()> {
        let context = self.contexts.root_composition();
        let destination = self.resources_path().join("Private/Fusion/Root.fusion");
        self.emit_template(
            "Fusion/Root.fusion",
            RenderStrategy::LiteralSubstitution,
            &context,
            destination,
        )
    }

    /// `Configuration/NodeTypes.Document.Page.yaml`
    pub(crate) fn generate_node_types_configuration(&mut self) -> Result<()> {
        let context = self.contexts.node_types();
        let destination = self.package.configuration_path().join("NodeTypes.Document.Page.yaml");
        self.emit_template(
            "Configuration/NodeTypes.Document.Page.yaml",
            RenderStrategy::LiteralSubstitution,
            &context,
            destination,
        )
    }

    /// Empty `Public/Images`, `Public/JavaScript` and `Public/Styles`.
    pub(crate) fn generate_additional_folders(&self) -> Result<()> {
        let public = self.resources_path().join("Public");
        for folder in PUBLIC_FOLDERS {
            self.emitter.create_dir(public.join(folder))?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<PathBuf> {
        info!(
            "Generated {} files for {}",
            self.emitter.generated_files().len(),
            self.package.key()
        );
        self.emitter.into_manifest()
    }
}
