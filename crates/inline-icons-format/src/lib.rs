//! Output formatters for inline-icons commands.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use inline_icons_core::{CheckReport, Diagnostic, ExtensionMetadata, RenderReport};
use serde::Serialize;

/// Output flavour selected on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    body: &'a T,
}

fn to_json<T: Serialize>(body: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        generated_at: Utc::now(),
        body,
    })
}

/// One diagnostic per line, `path:line: severity: message`.
pub fn render_diagnostics<'a, I>(diagnostics: I) -> String
where
    I: IntoIterator<Item = &'a Diagnostic>,
{
    let mut out = String::new();
    for diagnostic in diagnostics {
        let _ = writeln!(out, "{diagnostic}");
    }
    out
}

pub fn render_check(report: &CheckReport, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct CheckBody<'a> {
            ready: bool,
            #[serde(flatten)]
            report: &'a CheckReport,
        }
        return to_json(&CheckBody {
            ready: report.is_ready(),
            report,
        });
    }

    let mut out = String::new();
    for finding in &report.findings {
        let _ = writeln!(out, "{}: {}", finding.severity, finding.message);
    }
    let status = if report.is_ready() { "ready" } else { "not ready" };
    let _ = writeln!(
        out,
        "{} icon(s) in {} ({status})",
        report.icons.len(),
        report.directory.display()
    );
    Ok(out)
}

pub fn render_icons(
    directory: &Path,
    icons: &[String],
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct IconsBody<'a> {
            directory: &'a Path,
            icons: &'a [String],
        }
        return to_json(&IconsBody { directory, icons });
    }

    let mut out = String::new();
    for icon in icons {
        let _ = writeln!(out, "{icon}");
    }
    Ok(out)
}

pub fn render_report(report: &RenderReport, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = String::new();
    for file in &report.files {
        if let Some(diff) = &file.diff {
            out.push_str(diff);
            if !diff.ends_with('\n') {
                out.push('\n');
            }
        }
        if let Some(output) = &file.output_path {
            let _ = writeln!(
                out,
                "wrote {} ({} icon(s))",
                output.display(),
                file.expanded
            );
        }
    }
    out.push_str(&render_diagnostics(report.diagnostics()));

    let expanded: usize = report.files.iter().map(|file| file.expanded).sum();
    let _ = writeln!(
        out,
        "{} file(s), {} icon(s) expanded, {} {}, {} {}",
        report.files.len(),
        expanded,
        report.error_count,
        plural(report.error_count, "error"),
        report.warning_count,
        plural(report.warning_count, "warning"),
    );
    Ok(out)
}

pub fn render_metadata(metadata: &ExtensionMetadata) -> serde_json::Result<String> {
    serde_json::to_string_pretty(metadata)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
