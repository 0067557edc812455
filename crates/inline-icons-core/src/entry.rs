//! Block directive and inline role adapters over [`IconResolver::resolve`].
//!
//! A missing icon never escapes these functions as an error: it becomes an
//! error [`Diagnostic`] at the caller's source location so the surrounding
//! build keeps going. Only unreadable assets propagate as `Err`.

use tracing::warn;

use crate::error::{ResolveError, ResolveResult};
use crate::nodes::{Diagnostic, EntryOutcome, Node, Placement, SourceLocation};
use crate::resolver::IconResolver;

/// Expand a block directive occurrence.
///
/// `arguments` are the whitespace-separated tokens after the directive name;
/// exactly one is required. `body` must be empty apart from whitespace.
pub fn resolve_block(
    resolver: &IconResolver,
    directive: &str,
    arguments: &[&str],
    body: &str,
    location: SourceLocation,
) -> ResolveResult<EntryOutcome> {
    if arguments.len() != 1 {
        let message = format!(
            "Error in \"{directive}\" directive: 1 argument required, {} supplied.",
            arguments.len()
        );
        return Ok(EntryOutcome {
            nodes: Vec::new(),
            diagnostics: vec![Diagnostic::error(location, message)],
        });
    }
    if !body.trim().is_empty() {
        let message = format!("Error in \"{directive}\" directive: no content permitted.");
        return Ok(EntryOutcome {
            nodes: Vec::new(),
            diagnostics: vec![Diagnostic::error(location, message)],
        });
    }

    let name = arguments[0];
    match resolver.resolve(name) {
        Ok(html) => Ok(EntryOutcome {
            nodes: vec![Node::RawHtml {
                html,
                placement: Placement::Block,
            }],
            diagnostics: Vec::new(),
        }),
        Err(ResolveError::NotFound { name }) => {
            warn!(icon = %name, location = %location, "icon not found");
            Ok(EntryOutcome {
                nodes: Vec::new(),
                diagnostics: vec![not_found_diagnostic(resolver, &name, location)],
            })
        }
        Err(err) => Err(err),
    }
}

/// Expand an inline role occurrence; `text` is trimmed before lookup.
pub fn resolve_inline(
    resolver: &IconResolver,
    role: &str,
    text: &str,
    location: SourceLocation,
) -> ResolveResult<EntryOutcome> {
    let name = text.trim();
    match resolver.resolve(name) {
        Ok(html) => Ok(EntryOutcome {
            nodes: vec![Node::RawHtml {
                html,
                placement: Placement::Inline,
            }],
            diagnostics: Vec::new(),
        }),
        Err(ResolveError::NotFound { name }) => {
            warn!(icon = %name, location = %location, "icon not found");
            Ok(EntryOutcome {
                nodes: vec![Node::Problem {
                    text: format!("{{{role}}}`{text}`"),
                }],
                diagnostics: vec![not_found_diagnostic(resolver, &name, location)],
            })
        }
        Err(err) => Err(err),
    }
}

fn not_found_diagnostic(resolver: &IconResolver, name: &str, location: SourceLocation) -> Diagnostic {
    let mut message = format!("Icon '{name}' not found");
    if let Some(suggestion) = resolver.suggest(name) {
        message.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    Diagnostic::error(location, message)
}
