//! Template rendering for generated files.
//! Offers a full MiniJinja render and a literal `{key}` substitution, chosen
//! explicitly per target file through [`RenderStrategy`].
use crate::context::Context;
use crate::error::Result;
use log::debug;
use minijinja::{AutoEscape, Environment};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `{identifier}` placeholders. Anything else in braces, such as
/// Fusion blocks or Fluid inline notation, is left alone.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}

/// How a single target file is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Template engine render with control structures (loops over dimensions).
    FullEngine,
    /// Plain `{key}` replacement of string values.
    LiteralSubstitution,
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer. Auto-escaping is disabled because values are
    /// escaped while the context is built, where the target format is known.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("template", template.to_owned())?;

        let tmpl = env.get_template("template")?;

        Ok(tmpl.render(context)?)
    }
}

/// Literal substitution renderer.
///
/// Replaces every `{key}` whose key is a text value of the context. The
/// source is scanned once, so substituted values are never scanned again.
/// Unknown keys and dimension lists stay as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralRenderer;

impl LiteralRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for LiteralRenderer {
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            match context.text(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });

        Ok(rendered.into_owned())
    }
}

/// Both rendering strategies behind one entry point.
#[derive(Default)]
pub struct Renderer {
    engine: MiniJinjaRenderer,
    literal: LiteralRenderer,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &self,
        strategy: RenderStrategy,
        template: &str,
        context: &Context,
    ) -> Result<String> {
        debug!("Rendering with {:?} ({} variables)", strategy, context.len());
        match strategy {
            RenderStrategy::FullEngine => self.engine.render(template, context),
            RenderStrategy::LiteralSubstitution => self.literal.render(template, context),
        }
    }
}
