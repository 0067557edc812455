use std::io;
use std::path::{Path, PathBuf};

use inline_icons_config::{Config, LoadOptions};
use inline_icons_core::{
    Diagnostic, EntryOutcome, Extension, Node, Placement, ResolveError, SourceLocation,
};
use pyo3::create_exception;
use pyo3::prelude::*;

create_exception!(
    inline_icons_py,
    InlineIconsError,
    pyo3::exceptions::PyException
);
create_exception!(inline_icons_py, IconNotFoundError, InlineIconsError);

/// Result of one directive or role invocation.
#[pyclass(module = "inline_icons_py")]
pub struct EntryResult {
    #[pyo3(get)]
    html: Option<String>,
    #[pyo3(get)]
    placement: Option<String>,
    #[pyo3(get)]
    problem: Option<String>,
    #[pyo3(get)]
    diagnostics: Vec<String>,
}

#[pymethods]
impl EntryResult {
    #[getter]
    fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn __repr__(&self) -> String {
        format!(
            "EntryResult(ok={}, placement={:?}, diagnostics={})",
            self.ok(),
            self.placement,
            self.diagnostics.len()
        )
    }
}

#[pyclass(module = "inline_icons_py")]
pub struct CheckResult {
    #[pyo3(get)]
    ready: bool,
    #[pyo3(get)]
    directory: String,
    #[pyo3(get)]
    icons: Vec<String>,
    #[pyo3(get)]
    errors: Vec<String>,
    #[pyo3(get)]
    warnings: Vec<String>,
}

#[pyclass(module = "inline_icons_py")]
pub struct MarkdownResult {
    #[pyo3(get)]
    output: String,
    #[pyo3(get)]
    expanded: usize,
    #[pyo3(get)]
    changed: bool,
    #[pyo3(get)]
    diagnostics: Vec<String>,
}

#[pyclass(module = "inline_icons_py")]
pub struct ExtensionMetadata {
    #[pyo3(get)]
    version: String,
    #[pyo3(get)]
    directive: String,
    #[pyo3(get)]
    role: String,
    #[pyo3(get)]
    parallel_read_safe: bool,
    #[pyo3(get)]
    parallel_write_safe: bool,
}

#[pyfunction(signature = (name, *, directory=None, config=None))]
fn resolve(name: &str, directory: Option<&str>, config: Option<&str>) -> PyResult<String> {
    let extension = load_extension(directory, config)?;
    extension.resolve(name).map_err(map_resolve_error)
}

#[pyfunction(signature = (arguments, body="", *, source=None, line=0, directory=None, config=None))]
fn resolve_block(
    arguments: Vec<String>,
    body: &str,
    source: Option<&str>,
    line: usize,
    directory: Option<&str>,
    config: Option<&str>,
) -> PyResult<EntryResult> {
    let extension = load_extension(directory, config)?;
    let arguments: Vec<&str> = arguments.iter().map(String::as_str).collect();
    let outcome = extension
        .resolve_block(&arguments, body, location(source, line))
        .map_err(map_resolve_error)?;
    Ok(EntryResult::from_outcome(outcome))
}

#[pyfunction(signature = (text, *, source=None, line=0, directory=None, config=None))]
fn resolve_inline(
    text: &str,
    source: Option<&str>,
    line: usize,
    directory: Option<&str>,
    config: Option<&str>,
) -> PyResult<EntryResult> {
    let extension = load_extension(directory, config)?;
    let outcome = extension
        .resolve_inline(text, location(source, line))
        .map_err(map_resolve_error)?;
    Ok(EntryResult::from_outcome(outcome))
}

#[pyfunction(signature = (*, directory=None, config=None))]
fn check(directory: Option<&str>, config: Option<&str>) -> PyResult<CheckResult> {
    let extension = load_extension(directory, config)?;
    let report = extension.check();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for finding in &report.findings {
        match finding.severity {
            inline_icons_core::Severity::Error => errors.push(finding.message.clone()),
            inline_icons_core::Severity::Warning => warnings.push(finding.message.clone()),
        }
    }
    Ok(CheckResult {
        ready: report.is_ready(),
        directory: report.directory.display().to_string(),
        icons: report.icons,
        errors,
        warnings,
    })
}

#[pyfunction(signature = (*, directory=None, config=None))]
fn list_icons(directory: Option<&str>, config: Option<&str>) -> PyResult<Vec<String>> {
    let extension = load_extension(directory, config)?;
    extension.list_icons().map_err(|err| {
        InlineIconsError::new_err(format_io_error(&err, Some(extension.resolver().directory())))
    })
}

#[pyfunction(signature = (source, *, path=None, directory=None, config=None))]
fn render_markdown(
    source: &str,
    path: Option<&str>,
    directory: Option<&str>,
    config: Option<&str>,
) -> PyResult<MarkdownResult> {
    let extension = load_extension(directory, config)?;
    let outcome = extension
        .render_markdown(source, path.map(Path::new))
        .map_err(map_resolve_error)?;
    Ok(MarkdownResult {
        changed: outcome.changed(source),
        diagnostics: render_diagnostics(&outcome.diagnostics),
        expanded: outcome.expanded,
        output: outcome.output,
    })
}

#[pyfunction(signature = (*, config=None))]
fn extension_metadata(config: Option<&str>) -> PyResult<ExtensionMetadata> {
    let metadata = load_extension(None, config)?.metadata();
    Ok(ExtensionMetadata {
        version: metadata.version.to_string(),
        directive: metadata.directive,
        role: metadata.role,
        parallel_read_safe: metadata.parallel_read_safe,
        parallel_write_safe: metadata.parallel_write_safe,
    })
}

#[pymodule]
fn inline_icons_py(py: Python, module: &PyModule) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(resolve, module)?)?;
    module.add_function(wrap_pyfunction!(resolve_block, module)?)?;
    module.add_function(wrap_pyfunction!(resolve_inline, module)?)?;
    module.add_function(wrap_pyfunction!(check, module)?)?;
    module.add_function(wrap_pyfunction!(list_icons, module)?)?;
    module.add_function(wrap_pyfunction!(render_markdown, module)?)?;
    module.add_function(wrap_pyfunction!(extension_metadata, module)?)?;
    module.add("InlineIconsError", py.get_type::<InlineIconsError>())?;
    module.add("IconNotFoundError", py.get_type::<IconNotFoundError>())?;
    module.add_class::<EntryResult>()?;
    module.add_class::<CheckResult>()?;
    module.add_class::<MarkdownResult>()?;
    module.add_class::<ExtensionMetadata>()?;
    Ok(())
}

fn load_extension(directory: Option<&str>, config: Option<&str>) -> PyResult<Extension> {
    let mut options = LoadOptions::default();
    if let Some(path) = config {
        options = options.with_override_path(path);
    }
    let mut config =
        Config::load(options).map_err(|err| InlineIconsError::new_err(err.to_string()))?;
    if let Some(directory) = directory {
        let icon_directory = absolute(directory, &config.project.root);
        config = config.with_icon_directory(icon_directory);
    }
    Ok(Extension::from_config(&config))
}

fn absolute(path: &str, root: &Path) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn location(source: Option<&str>, line: usize) -> SourceLocation {
    SourceLocation::new(source.map(Path::new), line)
}

fn map_resolve_error(err: ResolveError) -> PyErr {
    match err {
        ResolveError::NotFound { name } => {
            IconNotFoundError::new_err(format!("Icon '{name}' not found"))
        }
        ResolveError::Io { path, source } => {
            InlineIconsError::new_err(format_io_error(&source, Some(&path)))
        }
    }
}

/// Produce a user-friendly message for I/O errors, optionally scoped to a path.
fn format_io_error(err: &io::Error, path: Option<&Path>) -> String {
    match (err.kind(), path) {
        (io::ErrorKind::NotFound, Some(p)) => format!("File not found: {}", p.display()),
        (io::ErrorKind::PermissionDenied, Some(p)) => {
            format!("Permission denied: {}", p.display())
        }
        (io::ErrorKind::InvalidData, Some(p)) => {
            format!("Icon is not valid UTF-8: {}", p.display())
        }
        _ => err.to_string(),
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

impl EntryResult {
    fn from_outcome(outcome: EntryOutcome) -> Self {
        let mut result = EntryResult {
            html: None,
            placement: None,
            problem: None,
            diagnostics: render_diagnostics(&outcome.diagnostics),
        };
        for node in outcome.nodes {
            match node {
                Node::RawHtml { html, placement } => {
                    result.placement = Some(
                        match placement {
                            Placement::Block => "block",
                            Placement::Inline => "inline",
                        }
                        .to_string(),
                    );
                    result.html = Some(html);
                }
                Node::Problem { text } => result.problem = Some(text),
            }
        }
        result
    }
}
