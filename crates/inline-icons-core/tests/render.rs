use std::path::PathBuf;

use inline_icons_core::{
    CheckFinding, Extension, ExitCode, RenderError, RenderMode, RenderOptions, Severity,
};
use inline_icons_test_support::Project;
use pretty_assertions::assert_eq;

fn options(paths: &[&str], mode: RenderMode) -> RenderOptions {
    RenderOptions {
        paths: paths.iter().map(PathBuf::from).collect(),
        mode,
    }
}

fn project() -> Project {
    let project = Project::new().with_icon("star", r#"<svg class="size-6"/>"#);
    project.write("docs/index.md", "# Home {icon}`star`\n");
    project.write("docs/guide/missing.md", "Oops {icon}`moon`\n");
    project.write("docs/plain.md", "Nothing here.\n");
    project.write("docs/notes.txt", "{icon}`star`\n");
    project.write("node_modules/pkg/README.md", "{icon}`star`\n");
    project
}

#[test]
fn check_mode_reports_without_writing() {
    let project = project();
    let ext = Extension::from_config(&project.config());

    let report = ext
        .render(&options(&[], RenderMode::Check))
        .expect("render");

    let paths: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("docs/guide/missing.md"),
            PathBuf::from("docs/index.md"),
            PathBuf::from("docs/plain.md"),
        ]
    );
    assert_eq!(report.error_count, 1);
    assert_eq!(report.exit_code(), ExitCode::Diagnostics);
    let diagnostic = report.diagnostics().next().expect("one diagnostic");
    assert_eq!(
        diagnostic.to_string(),
        "docs/guide/missing.md:1: error: Icon 'moon' not found"
    );
    assert_eq!(project.read("docs/index.md"), "# Home {icon}`star`\n");
}

#[test]
fn in_place_rewrites_only_changed_documents() {
    let project = project();
    let ext = Extension::from_config(&project.config());

    let report = ext
        .render(&options(&["docs/index.md", "docs/plain.md"], RenderMode::InPlace))
        .unwrap();

    assert_eq!(report.exit_code(), ExitCode::Success);
    assert_eq!(
        project.read("docs/index.md"),
        "# Home <svg class=\"inline-icon\"/>\n"
    );
    let plain = report
        .files
        .iter()
        .find(|f| f.path == PathBuf::from("docs/plain.md"))
        .unwrap();
    assert!(!plain.changed);
    assert!(plain.output_path.is_none());
}

#[test]
fn out_dir_mirrors_selected_tree() {
    let project = project();
    let ext = Extension::from_config(&project.config());
    let out = project.root().join("_build/md");

    let report = ext
        .render(&options(&["docs"], RenderMode::OutDir(out.clone())))
        .unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(
        std::fs::read_to_string(out.join("docs/index.md")).unwrap(),
        "# Home <svg class=\"inline-icon\"/>\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("docs/plain.md")).unwrap(),
        "Nothing here.\n"
    );
    assert!(!out.join("docs/notes.txt").exists());

    // A second run must not pick up its own output under `_build`.
    let again = ext
        .render(&options(&[], RenderMode::Check))
        .unwrap();
    assert_eq!(again.files.len(), 3);
}

#[test]
fn diff_mode_produces_unified_diff() {
    let project = project();
    let ext = Extension::from_config(&project.config());

    let report = ext
        .render(&options(&["docs/index.md"], RenderMode::Diff))
        .unwrap();

    let diff = report.files[0].diff.as_deref().expect("diff present");
    assert!(diff.contains("--- a/docs/index.md"));
    assert!(diff.contains("+++ b/docs/index.md"));
    assert!(diff.contains("-# Home {icon}`star`"));
    assert!(diff.contains("+# Home <svg class=\"inline-icon\"/>"));
}

#[test]
fn unknown_paths_are_invalid_input() {
    let project = project();
    let ext = Extension::from_config(&project.config());

    let err = ext
        .render(&options(&["docs/absent.md"], RenderMode::Check))
        .unwrap_err();
    assert!(matches!(err, RenderError::InvalidInput(_)));
    assert_eq!(err.exit_code(), ExitCode::InvalidInput);
}

#[test]
fn readiness_check_reports_directory_state() {
    let missing = Project::without_icons();
    let report = Extension::from_config(&missing.config()).check();
    assert!(!report.is_ready());
    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0].message.contains("does not exist"));

    let empty = Project::new();
    let report = Extension::from_config(&empty.config()).check();
    assert!(report.is_ready());
    assert_eq!(report.findings[0].severity, Severity::Warning);
    assert!(report.findings[0].message.contains("contains no .svg files"));

    let populated = Project::new()
        .with_icon("star", "<svg/>")
        .with_icon("note", "plain text");
    let report = Extension::from_config(&populated.config()).check();
    assert!(report.is_ready());
    assert_eq!(report.icons, vec!["note".to_string(), "star".to_string()]);
    assert_eq!(
        report.findings,
        vec![CheckFinding {
            severity: Severity::Warning,
            path: Some(populated.icons_dir().join("note.svg")),
            message: "icon 'note' has no <svg> root tag and will be inlined unchanged".into(),
        }]
    );
}
