use std::path::Path;

use inline_icons_core::{Extension, Node, Placement, Severity, SourceLocation};
use inline_icons_test_support::{Project, STAR_INLINE, STAR_SVG};

fn location(line: usize) -> SourceLocation {
    SourceLocation::new(Some(Path::new("guide/index.md")), line)
}

#[test]
fn block_directive_emits_raw_block_node() {
    let project = Project::new().with_icon("star", STAR_SVG);
    let ext = Extension::from_config(&project.config());

    let outcome = ext
        .resolve_block(&["star"], "", location(3))
        .expect("block outcome");

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(
        outcome.nodes,
        vec![Node::RawHtml {
            html: STAR_INLINE.to_string(),
            placement: Placement::Block,
        }]
    );
}

#[test]
fn block_directive_reports_missing_icon_without_nodes() {
    let project = Project::new().with_icon("star", STAR_SVG);
    let ext = Extension::from_config(&project.config());

    let outcome = ext
        .resolve_block(&["nonexistent-icon"], "", location(7))
        .expect("block outcome");

    assert!(outcome.nodes.is_empty());
    assert!(!outcome.is_success());
    assert_eq!(outcome.diagnostics.len(), 1);
    let diagnostic = &outcome.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.location, location(7));
    assert!(diagnostic.message.contains("'nonexistent-icon'"));
    assert_eq!(
        diagnostic.to_string(),
        "guide/index.md:7: error: Icon 'nonexistent-icon' not found"
    );
}

#[test]
fn block_directive_validates_arguments_and_body() {
    let project = Project::new().with_icon("star", STAR_SVG);
    let ext = Extension::from_config(&project.config());

    let none = ext.resolve_block(&[], "", location(1)).unwrap();
    assert!(none.nodes.is_empty());
    assert!(none.diagnostics[0]
        .message
        .contains("1 argument required, 0 supplied"));

    let two = ext.resolve_block(&["star", "moon"], "", location(1)).unwrap();
    assert!(two.diagnostics[0]
        .message
        .contains("1 argument required, 2 supplied"));

    let body = ext
        .resolve_block(&["star"], "unexpected\n", location(1))
        .unwrap();
    assert!(body.nodes.is_empty());
    assert!(body.diagnostics[0].message.contains("no content permitted"));

    let blank_body = ext.resolve_block(&["star"], "  \n", location(1)).unwrap();
    assert!(blank_body.is_success());
}

#[test]
fn inline_role_trims_text_and_emits_inline_node() {
    let project = Project::new().with_icon("star", STAR_SVG);
    let ext = Extension::from_config(&project.config());

    let outcome = ext.resolve_inline("  star ", location(2)).unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        outcome.nodes,
        vec![Node::RawHtml {
            html: STAR_INLINE.to_string(),
            placement: Placement::Inline,
        }]
    );
}

#[test]
fn inline_role_failure_emits_problem_marker_and_diagnostic() {
    let project = Project::new().with_icon("star", STAR_SVG);
    let ext = Extension::from_config(&project.config());

    let outcome = ext.resolve_inline("strr", location(4)).unwrap();

    assert_eq!(
        outcome.nodes,
        vec![Node::Problem {
            text: "{icon}`strr`".to_string()
        }]
    );
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        outcome.diagnostics[0].message,
        "Icon 'strr' not found (did you mean 'star'?)"
    );
}

#[test]
fn metadata_declares_parallel_safety() {
    let project = Project::new();
    let metadata = Extension::from_config(&project.config()).metadata();

    assert!(metadata.parallel_read_safe);
    assert!(metadata.parallel_write_safe);
    assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(metadata.directive, "icon");
    assert_eq!(metadata.role, "icon");
}
