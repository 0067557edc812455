use std::path::Path;

use inline_icons_core::Extension;
use inline_icons_test_support::Project;
use pretty_assertions::assert_eq;

const STAR: &str = "<svg class=\"size-6\">\n\n  <path d=\"M0 0\"/>\n</svg>\n";

fn extension(project: &Project) -> Extension {
    Extension::from_config(&project.config())
}

#[test]
fn expands_directive_block_into_html_block() {
    let project = Project::new().with_icon("star", STAR);
    let source = "# Title\n\n```{icon} star\n```\n\nAfter.\n";

    let outcome = extension(&project)
        .render_markdown(source, None)
        .expect("render");

    assert_eq!(
        outcome.output,
        "# Title\n\n<svg class=\"inline-icon\">\n  <path d=\"M0 0\"/>\n</svg>\n\nAfter.\n"
    );
    assert_eq!(outcome.expanded, 1);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn expands_inline_role_on_one_line() {
    let project = Project::new().with_icon("star", STAR);
    let source = "Rate it {icon}`star` today.\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(
        outcome.output,
        "Rate it <svg class=\"inline-icon\"> <path d=\"M0 0\"/> </svg> today.\n"
    );
    assert_eq!(outcome.expanded, 1);
}

#[test]
fn missing_icons_produce_diagnostics_with_lines() {
    let project = Project::new().with_icon("star", STAR);
    let source = "Intro {icon}`nonexistent-icon` here.\n\n```{icon} moon\n```\n";

    let outcome = extension(&project)
        .render_markdown(source, Some(Path::new("docs/page.md")))
        .unwrap();

    assert_eq!(
        outcome.output,
        "Intro <span class=\"problematic\">{icon}`nonexistent-icon`</span> here.\n\n"
    );
    assert_eq!(outcome.expanded, 0);
    let rendered: Vec<String> = outcome.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "docs/page.md:1: error: Icon 'nonexistent-icon' not found".to_string(),
            "docs/page.md:3: error: Icon 'moon' not found".to_string(),
        ]
    );
}

#[test]
fn leaves_plain_code_and_other_fences_alone() {
    let project = Project::new().with_icon("star", STAR);
    let source = "Use `star` or `{icon}` literally.\n\n```rust\n{icon}`star`\n```\n\n    {icon}`star`\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(outcome.output, source);
    assert!(!outcome.changed(source));
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn honours_custom_markup_names() {
    let project = Project::new().with_icon("star", "<svg/>");
    let mut config = project.config();
    config.markup.directive = "glyph".into();
    config.markup.role = "g".into();
    let ext = Extension::from_config(&config);

    let source = "A {g}`star` and {icon}`star`.\n\n```{glyph} star\n```\n";
    let outcome = ext.render_markdown(source, None).unwrap();

    assert_eq!(
        outcome.output,
        "A <svg class=\"inline-icon\"/> and {icon}`star`.\n\n<svg class=\"inline-icon\"/>\n"
    );
    assert_eq!(outcome.expanded, 2);
}

#[test]
fn directive_argument_errors_remove_the_block() {
    let project = Project::new().with_icon("star", "<svg/>");
    let source = "```{icon}\n```\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(outcome.output, "");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.diagnostics[0]
        .message
        .contains("\"icon\" directive: 1 argument required, 0 supplied"));
}

#[test]
fn directive_inside_blockquote_stays_in_the_quote() {
    let project = Project::new().with_icon("star", STAR);
    let source = "> Quote start\n>\n> ```{icon} star\n> ```\n>\n> Quote end\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(
        outcome.output,
        "> Quote start\n>\n> <svg class=\"inline-icon\">\n>   <path d=\"M0 0\"/>\n> </svg>\n>\n> Quote end\n"
    );
    assert_eq!(outcome.expanded, 1);

    let again = extension(&project)
        .render_markdown(&outcome.output, None)
        .unwrap();
    assert!(!again.changed(&outcome.output));
}

#[test]
fn directive_in_tight_blockquote_gets_quoted_blank_lines() {
    let project = Project::new().with_icon("star", "<svg class=\"size-6\"/>");
    let source = "> Before\n> ```{icon} star\n> ```\n> After\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(
        outcome.output,
        "> Before\n>\n> <svg class=\"inline-icon\"/>\n>\n> After\n"
    );
}

#[test]
fn directive_inside_list_item_keeps_item_indentation() {
    let project = Project::new().with_icon("star", STAR);
    let source = "- item one\n\n  ```{icon} star\n  ```\n\n  still item one\n- item two\n";

    let outcome = extension(&project).render_markdown(source, None).unwrap();

    assert_eq!(
        outcome.output,
        "- item one\n\n  <svg class=\"inline-icon\">\n    <path d=\"M0 0\"/>\n  </svg>\n\n  still item one\n- item two\n"
    );
}
