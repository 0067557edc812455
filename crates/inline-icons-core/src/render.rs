//! Batch rendering of Markdown documents.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use similar::TextDiff;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{ExitCode, RenderError, RenderResult};
use crate::fs::atomic_write;
use crate::markdown::render_markdown;
use crate::nodes::{Diagnostic, Severity};
use crate::Extension;

/// What to do with each rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Report diagnostics only.
    Check,
    /// Print unified diffs for documents that would change.
    Diff,
    /// Rewrite changed documents in place.
    InPlace,
    /// Mirror every selected document under the given directory.
    OutDir(PathBuf),
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Files or directories; relative entries resolve against the project
    /// root. Empty means the whole project.
    pub paths: Vec<PathBuf>,
    pub mode: RenderMode,
}

#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub expanded: usize,
    pub changed: bool,
    pub diff: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RenderReport {
    pub files: Vec<FileReport>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl RenderReport {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|file| file.diagnostics.iter())
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.error_count > 0 {
            ExitCode::Diagnostics
        } else {
            ExitCode::Success
        }
    }
}

pub(crate) fn run(extension: &Extension, options: &RenderOptions) -> RenderResult<RenderReport> {
    let root = extension.project_root();
    let targets = collect_targets(extension, root, &options.paths)?;
    debug!(count = targets.len(), "render targets collected");

    let files = targets
        .par_iter()
        .map(|target| render_file(extension, root, target, &options.mode))
        .collect::<RenderResult<Vec<_>>>()?;

    let (error_count, warning_count) = files
        .iter()
        .flat_map(|file| file.diagnostics.iter())
        .fold((0usize, 0usize), |mut acc, diagnostic| {
            match diagnostic.severity {
                Severity::Error => acc.0 += 1,
                Severity::Warning => acc.1 += 1,
            }
            acc
        });

    Ok(RenderReport {
        files,
        error_count,
        warning_count,
    })
}

fn collect_targets(
    extension: &Extension,
    root: &Path,
    paths: &[PathBuf],
) -> RenderResult<Vec<PathBuf>> {
    let inputs: Vec<PathBuf> = if paths.is_empty() {
        vec![root.to_path_buf()]
    } else {
        paths
            .iter()
            .map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    root.join(path)
                }
            })
            .collect()
    };

    let mut targets = BTreeSet::new();
    for input in inputs {
        if input.is_file() {
            targets.insert(input);
            continue;
        }
        if !input.is_dir() {
            return Err(RenderError::InvalidInput(format!(
                "path not found: {}",
                input.display()
            )));
        }
        for entry in WalkDir::new(&input).follow_links(false) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(&input).to_path_buf();
                let source = err.into_io_error().unwrap_or_else(|| {
                    io::Error::new(io::ErrorKind::Other, "filesystem loop detected")
                });
                RenderError::io(path, source)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = relative_to(entry.path(), root);
            if extension.render_settings().selects(&relative) {
                targets.insert(entry.into_path());
            }
        }
    }
    Ok(targets.into_iter().collect())
}

fn render_file(
    extension: &Extension,
    root: &Path,
    path: &Path,
    mode: &RenderMode,
) -> RenderResult<FileReport> {
    let relative = relative_to(path, root);
    let contents = fs::read_to_string(path).map_err(|err| RenderError::io(path, err))?;
    let outcome = render_markdown(extension, &contents, Some(relative.as_path()))?;
    let changed = outcome.changed(&contents);

    let mut output_path = None;
    let mut diff = None;
    match mode {
        RenderMode::Check => {}
        RenderMode::Diff => {
            if changed {
                let old_header = format!("a/{}", relative.display());
                let new_header = format!("b/{}", relative.display());
                diff = Some(
                    TextDiff::from_lines(&contents, &outcome.output)
                        .unified_diff()
                        .header(&old_header, &new_header)
                        .to_string(),
                );
            }
        }
        RenderMode::InPlace => {
            if changed {
                atomic_write(path, &outcome.output).map_err(|err| RenderError::io(path, err))?;
                info!(path = %relative.display(), expanded = outcome.expanded, "rewrote document");
                output_path = Some(path.to_path_buf());
            }
        }
        RenderMode::OutDir(out_dir) => {
            let destination = out_dir.join(&relative);
            atomic_write(&destination, &outcome.output)
                .map_err(|err| RenderError::io(&destination, err))?;
            info!(path = %destination.display(), expanded = outcome.expanded, "wrote document");
            output_path = Some(destination);
        }
    }

    Ok(FileReport {
        path: relative,
        output_path,
        expanded: outcome.expanded,
        changed,
        diff,
        diagnostics: outcome.diagnostics,
    })
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.file_name().map(PathBuf::from).unwrap_or_default())
}
