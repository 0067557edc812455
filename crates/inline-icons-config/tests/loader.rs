use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use inline_icons_config::{Config, ConfigError, ConfigSourceKind, LoadOptions, LogLevel, Pattern};
use tempfile::TempDir;

fn write_file(path: impl AsRef<Path>, contents: &str) {
    let mut file = fs::File::create(path).expect("create config");
    file.write_all(contents.as_bytes()).expect("write config");
}

fn canonical(path: impl AsRef<Path>) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize path")
}

fn pattern_strings<'a, I>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Pattern>,
{
    patterns
        .into_iter()
        .map(|p| p.original().to_string())
        .collect()
}

#[test]
fn loads_defaults_when_no_files_present() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());

    let config = Config::load(LoadOptions::default().with_working_dir(working_dir.clone()))
        .expect("load defaults");

    assert_eq!(config.project.root, working_dir);
    assert_eq!(config.icons.directory, working_dir.join("static/icons"));
    assert_eq!(config.icons.extension, "svg");
    assert_eq!(config.icons.sizing_marker, "size-6");
    assert_eq!(config.icons.inline_class, "inline-icon");
    assert_eq!(config.markup.directive, "icon");
    assert_eq!(config.markup.role, "icon");
    assert_eq!(
        pattern_strings(config.render.include.iter()),
        vec!["**/*.md".to_string()]
    );
    assert_eq!(config.logging.level, LogLevel::Warn);
    assert_eq!(config.sources.layers.len(), 1);
    assert_eq!(config.sources.layers[0].kind, ConfigSourceKind::Default);
}

#[test]
fn applies_precedence_and_resolves_paths_per_layer() {
    let temp = TempDir::new().expect("tempdir");
    let git_root = canonical(temp.path());
    fs::create_dir(git_root.join(".git")).expect("create .git");

    write_file(
        git_root.join(".inline-icons.toml"),
        r#"
        [project]
        name = "root"

        [icons]
        directory = "assets/icons"
        inline_class = "doc-icon"

        [logging]
        level = "debug"
        "#,
    );

    let docs = git_root.join("docs");
    fs::create_dir(&docs).expect("create docs");
    write_file(
        docs.join(".inline-icons.toml"),
        r#"
        [icons]
        sizing_marker = "h-5"

        [markup]
        role = "ico"
        "#,
    );

    let config =
        Config::load(LoadOptions::default().with_working_dir(&docs)).expect("load layered");

    assert_eq!(config.project.name.as_deref(), Some("root"));
    assert_eq!(config.icons.directory, git_root.join("assets/icons"));
    assert_eq!(config.icons.inline_class, "doc-icon");
    assert_eq!(config.icons.sizing_marker, "h-5");
    assert_eq!(config.markup.directive, "icon");
    assert_eq!(config.markup.role, "ico");
    assert_eq!(config.logging.level, LogLevel::Debug);

    let kinds: Vec<_> = config.sources.layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConfigSourceKind::Default,
            ConfigSourceKind::GitRoot,
            ConfigSourceKind::Local
        ]
    );
}

#[test]
fn override_file_wins_and_must_exist() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(
        working_dir.join("custom.toml"),
        r#"
        [icons]
        extension = ".SVG"
        "#,
    );

    let config = Config::load(
        LoadOptions::default()
            .with_working_dir(&working_dir)
            .with_override_path("custom.toml"),
    )
    .expect("load override");
    assert_eq!(config.icons.extension, "SVG");

    let err = Config::load(
        LoadOptions::default()
            .with_working_dir(&working_dir)
            .with_override_path("missing.toml"),
    )
    .expect_err("missing override");
    assert!(matches!(err, ConfigError::OverrideNotFound { .. }));
}

#[test]
fn collects_all_validation_errors_with_provenance() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(
        working_dir.join(".inline-icons.toml"),
        r#"
        [icons]
        inline_class = "inline icon"
        sizing_marker = ""

        [markup]
        directive = "ic on"

        [render]
        include = ["[unclosed"]

        [logging]
        level = "chatty"
        "#,
    );

    let err = Config::load(LoadOptions::default().with_working_dir(&working_dir))
        .expect_err("invalid config");
    let ConfigError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), 5, "{messages:#?}");
    assert!(messages
        .iter()
        .any(|m| m.starts_with("icons.inline_class") && m.contains("local config")));
    assert!(messages.iter().any(|m| m.starts_with("icons.sizing_marker")));
    assert!(messages.iter().any(|m| m.starts_with("markup.directive")));
    assert!(messages.iter().any(|m| m.starts_with("render.include")));
    assert!(messages.iter().any(|m| m.contains("unknown log level 'chatty'")));
}

#[test]
fn extension_made_only_of_dots_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(
        working_dir.join(".inline-icons.toml"),
        r#"
        [icons]
        extension = "."
        "#,
    );

    let err = Config::load(LoadOptions::default().with_working_dir(&working_dir))
        .expect_err("empty extension");
    let ConfigError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), 1, "{messages:#?}");
    assert!(messages[0].starts_with("icons.extension: cannot be empty"));
}

#[test]
fn rejects_unknown_keys() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(
        working_dir.join(".inline-icons.toml"),
        r#"
        [icons]
        dir = "icons"
        "#,
    );

    let err = Config::load(LoadOptions::default().with_working_dir(&working_dir))
        .expect_err("unknown key");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
