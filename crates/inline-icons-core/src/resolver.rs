use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inline_icons_config::IconSettings;
use strsim::normalized_levenshtein;
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::transform::SvgTransform;

const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maps icon names to inline markup read from the asset directory.
///
/// Every call reads the asset afresh; nothing is cached between calls, so the
/// resolver can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct IconResolver {
    directory: PathBuf,
    extension: String,
    transform: SvgTransform,
}

impl IconResolver {
    pub fn new(
        directory: impl Into<PathBuf>,
        extension: impl Into<String>,
        transform: SvgTransform,
    ) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            transform,
        }
    }

    pub fn from_settings(settings: &IconSettings) -> Self {
        Self::new(
            settings.directory.clone(),
            settings.extension.clone(),
            SvgTransform::from_settings(settings),
        )
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn transform(&self) -> &SvgTransform {
        &self.transform
    }

    /// Path the asset for `name` would live at, or `None` when the name could
    /// never refer to a file directly inside the asset directory.
    pub fn asset_path(&self, name: &str) -> Option<PathBuf> {
        if !is_valid_icon_name(name) {
            return None;
        }
        Some(self.directory.join(format!("{name}.{}", self.extension)))
    }

    /// Resolve `name` to transformed, unescaped SVG markup.
    pub fn resolve(&self, name: &str) -> ResolveResult<String> {
        let Some(path) = self.asset_path(name) else {
            debug!(icon = name, "rejected icon name");
            return Err(ResolveError::not_found(name));
        };

        if !path.is_file() {
            debug!(icon = name, path = %path.display(), "icon asset missing");
            return Err(ResolveError::not_found(name));
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ResolveError::not_found(name));
            }
            Err(source) => return Err(ResolveError::Io { path, source }),
        };

        debug!(icon = name, bytes = contents.len(), "resolved icon");
        Ok(self.transform.apply(&contents))
    }

    /// Sorted names of every asset in the directory.
    pub fn list_icons(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Closest available icon name to `name`, if any is similar enough.
    pub fn suggest(&self, name: &str) -> Option<String> {
        let candidates = self.list_icons().ok()?;
        candidates
            .into_iter()
            .map(|candidate| (normalized_levenshtein(name, &candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, candidate)| candidate)
    }
}

fn is_valid_icon_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name
            .chars()
            .any(|ch| matches!(ch, '/' | '\\' | '\0') || ch.is_control())
}
