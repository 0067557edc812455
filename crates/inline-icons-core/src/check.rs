//! Explicit readiness check for the asset directory.
//!
//! Adapters call this deliberately at startup instead of printing at load
//! time; the report is data, and the adapter decides how loudly to surface it.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::nodes::Severity;
use crate::resolver::IconResolver;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckFinding {
    pub severity: Severity,
    pub path: Option<PathBuf>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub directory: PathBuf,
    pub icons: Vec<String>,
    pub findings: Vec<CheckFinding>,
}

impl CheckReport {
    /// True when nothing prevents icons from resolving.
    pub fn is_ready(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|finding| finding.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, path: Option<PathBuf>, message: String) {
        self.findings.push(CheckFinding {
            severity,
            path,
            message,
        });
    }
}

pub fn check(resolver: &IconResolver) -> CheckReport {
    let directory = resolver.directory().to_path_buf();
    let mut report = CheckReport {
        directory: directory.clone(),
        icons: Vec::new(),
        findings: Vec::new(),
    };

    if !directory.exists() {
        report.push(
            Severity::Error,
            Some(directory.clone()),
            format!("icon directory {} does not exist", directory.display()),
        );
        warn!(directory = %directory.display(), "icon directory missing");
        return report;
    }
    if !directory.is_dir() {
        report.push(
            Severity::Error,
            Some(directory.clone()),
            format!("icon directory {} is not a directory", directory.display()),
        );
        return report;
    }

    match resolver.list_icons() {
        Ok(icons) => report.icons = icons,
        Err(err) => {
            report.push(
                Severity::Error,
                Some(directory.clone()),
                format!("failed to list {}: {err}", directory.display()),
            );
            return report;
        }
    }

    if report.icons.is_empty() {
        report.push(
            Severity::Warning,
            Some(directory.clone()),
            format!(
                "icon directory {} contains no .{} files",
                directory.display(),
                resolver.extension()
            ),
        );
    }

    let names = report.icons.clone();
    for name in names {
        let Some(path) = resolver.asset_path(&name) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(contents) if !resolver.transform().has_root_tag(&contents) => report.push(
                Severity::Warning,
                Some(path),
                format!("icon '{name}' has no <svg> root tag and will be inlined unchanged"),
            ),
            Ok(_) => {}
            Err(err) => report.push(
                Severity::Warning,
                Some(path),
                format!("icon '{name}' cannot be read as text: {err}"),
            ),
        }
    }

    debug!(
        directory = %directory.display(),
        icons = report.icons.len(),
        findings = report.findings.len(),
        "icon directory checked"
    );
    report
}
