//! Inline SVG icons for documentation builds.
//!
//! [`Extension`] bundles the resolver with the directive and role names a
//! host exposes; host adapters (the Markdown preprocessor, the CLI, the Python
//! bindings) drive it through [`resolve_block`] and [`resolve_inline`].

mod check;
mod entry;
mod error;
mod fs;
mod markdown;
mod nodes;
mod render;
mod resolver;
mod transform;

use std::path::{Path, PathBuf};

use inline_icons_config::{Config, MarkupSettings, RenderSettings};
use serde::Serialize;

pub use check::{check, CheckFinding, CheckReport};
pub use entry::{resolve_block, resolve_inline};
pub use error::{ExitCode, RenderError, RenderResult, ResolveError, ResolveResult};
pub use markdown::{render_markdown, MarkdownOutcome};
pub use nodes::{Diagnostic, EntryOutcome, Node, Placement, Severity, SourceLocation};
pub use render::{FileReport, RenderMode, RenderOptions, RenderReport};
pub use resolver::IconResolver;
pub use transform::SvgTransform;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registration contract reported to the host at setup.
///
/// Resolution keeps no state between calls, so both parallel flags are set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtensionMetadata {
    pub version: &'static str,
    pub directive: String,
    pub role: String,
    pub parallel_read_safe: bool,
    pub parallel_write_safe: bool,
}

/// Resolver plus the names and file selection the host wires it up with.
#[derive(Clone, Debug)]
pub struct Extension {
    resolver: IconResolver,
    markup: MarkupSettings,
    render: RenderSettings,
    project_root: PathBuf,
}

impl Extension {
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolver: IconResolver::from_settings(&config.icons),
            markup: config.markup.clone(),
            render: config.render.clone(),
            project_root: config.project.root.clone(),
        }
    }

    pub fn resolver(&self) -> &IconResolver {
        &self.resolver
    }

    pub fn directive_name(&self) -> &str {
        &self.markup.directive
    }

    pub fn role_name(&self) -> &str {
        &self.markup.role
    }

    pub fn render_settings(&self) -> &RenderSettings {
        &self.render
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn metadata(&self) -> ExtensionMetadata {
        ExtensionMetadata {
            version: VERSION,
            directive: self.markup.directive.clone(),
            role: self.markup.role.clone(),
            parallel_read_safe: true,
            parallel_write_safe: true,
        }
    }

    pub fn resolve(&self, name: &str) -> ResolveResult<String> {
        self.resolver.resolve(name)
    }

    pub fn resolve_block(
        &self,
        arguments: &[&str],
        body: &str,
        location: SourceLocation,
    ) -> ResolveResult<EntryOutcome> {
        resolve_block(
            &self.resolver,
            self.directive_name(),
            arguments,
            body,
            location,
        )
    }

    pub fn resolve_inline(
        &self,
        text: &str,
        location: SourceLocation,
    ) -> ResolveResult<EntryOutcome> {
        resolve_inline(&self.resolver, self.role_name(), text, location)
    }

    pub fn check(&self) -> CheckReport {
        check(&self.resolver)
    }

    pub fn list_icons(&self) -> std::io::Result<Vec<String>> {
        self.resolver.list_icons()
    }

    pub fn render_markdown(
        &self,
        source: &str,
        path: Option<&Path>,
    ) -> ResolveResult<MarkdownOutcome> {
        render_markdown(self, source, path)
    }

    pub fn render(&self, options: &RenderOptions) -> RenderResult<RenderReport> {
        render::run(self, options)
    }
}
