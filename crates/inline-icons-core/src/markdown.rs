//! Markdown host adapter.
//!
//! Recognises the MyST spelling of the two entry points:
//!
//! ````markdown
//! ```{icon} star
//! ```
//!
//! Inline {icon}`star` icons.
//! ````
//!
//! Offsets come from `pulldown-cmark`, so code spans and fenced blocks that
//! merely mention the syntax are left alone.

use std::ops::Range;
use std::path::Path;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use serde::Serialize;

use crate::entry::{resolve_block, resolve_inline};
use crate::error::ResolveResult;
use crate::nodes::{Diagnostic, EntryOutcome, Node, SourceLocation};
use crate::Extension;

/// Rewritten document plus everything reported while expanding it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownOutcome {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
    pub expanded: usize,
}

impl MarkdownOutcome {
    pub fn changed(&self, source: &str) -> bool {
        self.output != source
    }
}

struct Edit {
    range: Range<usize>,
    replacement: String,
}

struct PendingDirective {
    range: Range<usize>,
    arguments: Vec<String>,
    body: String,
}

/// Expand every directive and role occurrence in `source`.
pub fn render_markdown(
    extension: &Extension,
    source: &str,
    path: Option<&Path>,
) -> ResolveResult<MarkdownOutcome> {
    let offsets = compute_line_offsets(source);
    let directive_tag = format!("{{{}}}", extension.directive_name());
    let role_tag = format!("{{{}}}", extension.role_name());

    let mut edits = Vec::new();
    let mut diagnostics = Vec::new();
    let mut expanded = 0usize;
    let mut pending: Option<PendingDirective> = None;

    let parser = Parser::new_ext(source, Options::all());
    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if let Some(arguments) = directive_arguments(&info, &directive_tag) {
                    pending = Some(PendingDirective {
                        range,
                        arguments,
                        body: String::new(),
                    });
                }
            }
            Event::Text(text) => {
                if let Some(directive) = pending.as_mut() {
                    directive.body.push_str(&text);
                }
            }
            Event::End(Tag::CodeBlock(_)) => {
                let Some(directive) = pending.take() else {
                    continue;
                };
                let location =
                    SourceLocation::new(path, byte_to_line(directive.range.start, &offsets));
                let arguments: Vec<&str> = directive.arguments.iter().map(String::as_str).collect();
                let outcome = resolve_block(
                    extension.resolver(),
                    extension.directive_name(),
                    &arguments,
                    &directive.body,
                    location,
                )?;
                let edit = match first_html(&outcome).map(compact_block) {
                    Some(html) => {
                        expanded += 1;
                        block_edit(source, &directive.range, &html)
                    }
                    None => Edit {
                        range: directive.range,
                        replacement: String::new(),
                    },
                };
                edits.push(edit);
                diagnostics.extend(outcome.diagnostics);
            }
            Event::Code(code) if pending.is_none() => {
                if !source[..range.start].ends_with(&role_tag) {
                    continue;
                }
                let start = range.start - role_tag.len();
                let location = SourceLocation::new(path, byte_to_line(start, &offsets));
                let outcome =
                    resolve_inline(extension.resolver(), extension.role_name(), &code, location)?;
                let replacement = match outcome.nodes.first() {
                    Some(Node::RawHtml { html, .. }) => {
                        expanded += 1;
                        compact_inline(html)
                    }
                    Some(Node::Problem { text }) => {
                        format!(r#"<span class="problematic">{}</span>"#, escape_html(text))
                    }
                    None => String::new(),
                };
                edits.push(Edit {
                    range: start..range.end,
                    replacement,
                });
                diagnostics.extend(outcome.diagnostics);
            }
            _ => {}
        }
    }

    Ok(MarkdownOutcome {
        output: apply_edits(source, edits),
        diagnostics,
        expanded,
    })
}

/// Arguments of a fenced block whose info string opens with `tag`.
fn directive_arguments(info: &str, tag: &str) -> Option<Vec<String>> {
    let rest = info.trim().strip_prefix(tag)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.split_whitespace().map(str::to_string).collect())
}

fn first_html(outcome: &EntryOutcome) -> Option<&str> {
    outcome.nodes.iter().find_map(Node::raw_html)
}

/// A blank line would end the HTML block early.
fn compact_block(html: &str) -> String {
    html.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inline HTML must stay on one line to remain inside its paragraph.
fn compact_inline(html: &str) -> String {
    html.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace a directive's fence lines with an HTML block. Each emitted line
/// carries the container prefix (`> `, list indentation) of the fence line,
/// and the block is kept apart from neighbouring text by blank lines.
fn block_edit(source: &str, range: &Range<usize>, html: &str) -> Edit {
    let line_start = source[..range.start].rfind('\n').map_or(0, |idx| idx + 1);
    let fence_col = source[line_start..]
        .find(|ch| ch == '`' || ch == '~')
        .unwrap_or(range.start - line_start);
    let lead = &source[line_start..line_start + fence_col];
    let continuation = continuation_prefix(lead);
    let blank = continuation.trim_end();

    let mut end = range.end;
    if !source[..end].ends_with('\n') && source[end..].starts_with('\n') {
        end += 1;
    }

    let mut replacement = String::with_capacity(html.len() + 4 * (continuation.len() + 1));
    if line_start > 0 && !is_blank_line(previous_line(source, line_start)) {
        replacement.push_str(blank);
        replacement.push('\n');
    }
    for (idx, line) in html.lines().enumerate() {
        replacement.push_str(if idx == 0 { lead } else { &continuation });
        replacement.push_str(line);
        replacement.push('\n');
    }
    let after = &source[end..];
    if !after.is_empty() && !is_blank_line(after.lines().next().unwrap_or_default()) {
        replacement.push_str(blank);
        replacement.push('\n');
    }

    Edit {
        range: line_start..end,
        replacement,
    }
}

/// `"> - "` continues as `">   "`: quote markers stay, list markers become spaces.
fn continuation_prefix(lead: &str) -> String {
    lead.chars()
        .map(|ch| if ch == '>' || ch.is_whitespace() { ch } else { ' ' })
        .collect()
}

fn previous_line(source: &str, line_start: usize) -> &str {
    source[..line_start - 1]
        .rsplit('\n')
        .next()
        .unwrap_or_default()
}

/// Blank once container markers are ignored.
fn is_blank_line(line: &str) -> bool {
    line.chars().all(|ch| ch == '>' || ch.is_whitespace())
}

fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| edit.range.start);
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in edits {
        if edit.range.start < cursor {
            continue;
        }
        output.push_str(&source[cursor..edit.range.start]);
        output.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    output.push_str(&source[cursor..]);
    output
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Compute byte offsets for the start of each line within the provided contents.
fn compute_line_offsets(contents: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (idx, ch) in contents.char_indices() {
        if ch == '\n' {
            offsets.push(idx + 1);
        }
    }
    offsets
}

/// Convert a byte offset into a 1-based line number using the provided offsets.
fn byte_to_line(byte: usize, offsets: &[usize]) -> usize {
    match offsets.binary_search(&byte) {
        Ok(idx) => idx + 1,
        Err(idx) => idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directive_arguments() {
        assert_eq!(
            directive_arguments("{icon} star", "{icon}"),
            Some(vec!["star".to_string()])
        );
        assert_eq!(directive_arguments("{icon}", "{icon}"), Some(Vec::new()));
        assert_eq!(directive_arguments("{iconic} star", "{icon}"), None);
        assert_eq!(directive_arguments("rust", "{icon}"), None);
    }

    #[test]
    fn maps_offsets_to_lines() {
        let offsets = compute_line_offsets("a\nbb\nccc");
        assert_eq!(byte_to_line(0, &offsets), 1);
        assert_eq!(byte_to_line(3, &offsets), 2);
        assert_eq!(byte_to_line(7, &offsets), 3);
    }

    #[test]
    fn block_edit_pads_with_blank_lines() {
        let source = "intro\n```{icon} star\n```\nnext\n";
        let edit = block_edit(source, &(6..source.len() - 5), "<svg/>");
        assert_eq!(edit.range, 6..source.len() - 5);
        assert_eq!(edit.replacement, "\n<svg/>\n\n");
    }

    #[test]
    fn continuation_keeps_quote_markers_only() {
        assert_eq!(continuation_prefix("> - "), ">   ");
        assert_eq!(continuation_prefix("1. "), "   ");
        assert!(is_blank_line("> >"));
        assert!(!is_blank_line("> text"));
    }

    #[test]
    fn escapes_problem_text() {
        assert_eq!(escape_html("{icon}`<x>`"), "{icon}`&lt;x&gt;`");
    }
}
