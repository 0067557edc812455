use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where a raw markup fragment is inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Block,
    Inline,
}

/// Content handed back to the host for one directive or role occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Raw HTML inserted verbatim, without escaping.
    RawHtml { html: String, placement: Placement },
    /// The host's inline error marker, carrying the original source text.
    Problem { text: String },
}

impl Node {
    pub fn raw_html(&self) -> Option<&str> {
        match self {
            Node::RawHtml { html, .. } => Some(html),
            Node::Problem { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Source position of a directive or role; lines are 1-based.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub path: Option<PathBuf>,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(path: Option<&Path>, line: usize) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "<input>:{}", self.line),
        }
    }
}

/// Build-time annotation surfaced to the author; never aborts the build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: SourceLocation,
    pub message: String,
}

impl Diagnostic {
    pub fn error(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location,
            message: message.into(),
        }
    }

    pub fn warning(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Nodes plus diagnostics produced by a single entry-point invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub nodes: Vec<Node>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|diagnostic| diagnostic.severity != Severity::Error)
    }
}
