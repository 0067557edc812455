//! Configuration primitives and loader for the inline-icons toolkit.
//!
//! Settings resolve through a precedence stack:
//! override flag → working directory → git root → built-in defaults.
//! Parsed layers are merged field by field and normalised into typed
//! structures so downstream crates never touch raw TOML.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".inline-icons.toml";

pub const DEFAULT_ICON_DIRECTORY: &str = "static/icons";
pub const DEFAULT_ICON_EXTENSION: &str = "svg";
pub const DEFAULT_SIZING_MARKER: &str = "size-6";
pub const DEFAULT_INLINE_CLASS: &str = "inline-icon";
pub const DEFAULT_DIRECTIVE_NAME: &str = "icon";
pub const DEFAULT_ROLE_NAME: &str = "icon";

const DEFAULT_RENDER_INCLUDE: &[&str] = &["**/*.md"];
const DEFAULT_RENDER_EXCLUDE: &[&str] = &["**/node_modules/**", "**/_build/**"];

/// Complete configuration resolved from defaults and on-disk overrides.
#[derive(Clone, Debug)]
pub struct Config {
    pub project: ProjectSettings,
    pub icons: IconSettings,
    pub markup: MarkupSettings,
    pub render: RenderSettings,
    pub logging: LoggingSettings,
    pub sources: ConfigSources,
}

/// Project-level settings.
#[derive(Clone, Debug)]
pub struct ProjectSettings {
    pub name: Option<String>,
    pub root: PathBuf,
}

/// Where icon assets live and how they are rewritten for inline use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSettings {
    pub directory: PathBuf,
    pub extension: String,
    pub sizing_marker: String,
    pub inline_class: String,
}

/// Names under which the entry points are exposed to document authors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupSettings {
    pub directive: String,
    pub role: String,
}

/// File selection for batch rendering.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub include: PatternList,
    pub exclude: PatternList,
}

impl RenderSettings {
    /// Returns true when `relative` is selected by include and not excluded.
    pub fn selects(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

/// Default log verbosity used when neither `RUST_LOG` nor CLI flags decide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `logging.level` value outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected trace, debug, info, warn, error or off)")]
pub struct ParseLogLevelError(pub String);

impl std::str::FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(ParseLogLevelError(value.to_string())),
        }
    }
}

/// Pattern plus compiled matcher.
#[derive(Clone, Debug)]
pub struct Pattern {
    original: String,
    matcher: GlobMatcher,
}

impl Pattern {
    fn new(source: Option<&ConfigSource>, value: String) -> Result<Self, ConfigValidationError> {
        match Glob::new(&value) {
            Ok(glob) => Ok(Pattern {
                matcher: glob.compile_matcher(),
                original: value,
            }),
            Err(err) => Err(ConfigValidationError::new(
                source.cloned(),
                format!("invalid glob pattern '{value}': {err}"),
            )),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}

/// Ordered list of glob patterns.
#[derive(Clone, Debug, Default)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    fn new(patterns: Vec<Pattern>) -> Self {
        PatternList { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}

/// Provenance information for resolved configuration.
#[derive(Clone, Debug)]
pub struct ConfigSources {
    pub working_directory: PathBuf,
    pub layers: Vec<ConfigSource>,
}

/// Specific layer of configuration (default/git/local/override).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSource {
    pub kind: ConfigSourceKind,
    pub path: Option<PathBuf>,
    pub base_dir: PathBuf,
}

impl ConfigSource {
    fn default(base_dir: PathBuf) -> Self {
        ConfigSource {
            kind: ConfigSourceKind::Default,
            path: None,
            base_dir,
        }
    }

    fn for_file(kind: ConfigSourceKind, path: PathBuf) -> Self {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        ConfigSource {
            kind,
            path: Some(path),
            base_dir,
        }
    }

    fn describe(&self) -> String {
        match (&self.kind, &self.path) {
            (ConfigSourceKind::Default, _) => "built-in defaults".to_owned(),
            (kind, Some(path)) => format!("{} at {}", kind, path.display()),
            (kind, None) => kind.to_string(),
        }
    }
}

/// Kinds of configuration sources, ordered from lowest to highest precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSourceKind {
    Default,
    GitRoot,
    Local,
    Override,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSourceKind::Default => "defaults",
            ConfigSourceKind::GitRoot => "git-root config",
            ConfigSourceKind::Local => "local config",
            ConfigSourceKind::Override => "override config",
        };
        f.write_str(label)
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub override_path: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
    #[error("override config {path} not found")]
    OverrideNotFound { path: PathBuf },
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("configuration validation failed:\n{0}")]
    Validation(ConfigValidationErrors),
}

impl Config {
    /// Loads configuration using the precedence rules and returns typed settings.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = resolve_working_dir(options.working_dir)?;
        let override_path = options
            .override_path
            .map(|path| make_absolute(&path, &working_dir));

        if let Some(path) = &override_path {
            if !path.exists() {
                return Err(ConfigError::OverrideNotFound { path: path.clone() });
            }
        }

        let default_source = ConfigSource::default(working_dir.clone());
        let mut merged = PartialConfig::default();
        merged.merge(defaults_layer(&default_source));

        let mut source_layers = vec![default_source];

        let git_root = find_git_root(&working_dir);
        let git_config_path = git_root.as_ref().map(|root| root.join(CONFIG_FILE_NAME));
        let local_config_path = working_dir.join(CONFIG_FILE_NAME);

        if let Some(path) = git_config_path.as_ref() {
            if path.exists() && Some(path) != override_path.as_ref() && path != &local_config_path {
                let source = ConfigSource::for_file(ConfigSourceKind::GitRoot, path.clone());
                merged.merge(load_layer(path, &source)?);
                source_layers.push(source);
            }
        }

        if local_config_path.exists() && Some(&local_config_path) != override_path.as_ref() {
            let source = ConfigSource::for_file(ConfigSourceKind::Local, local_config_path.clone());
            merged.merge(load_layer(&local_config_path, &source)?);
            source_layers.push(source);
        }

        if let Some(path) = override_path {
            let source = ConfigSource::for_file(ConfigSourceKind::Override, path.clone());
            merged.merge(load_layer(&path, &source)?);
            source_layers.push(source);
        }

        let resolved = merged.finalize().map_err(ConfigError::Validation)?;
        Ok(Config {
            project: resolved.project,
            icons: resolved.icons,
            markup: resolved.markup,
            render: resolved.render,
            logging: resolved.logging,
            sources: ConfigSources {
                working_directory: working_dir,
                layers: source_layers,
            },
        })
    }

    /// Built-in defaults anchored at `root`, without consulting the filesystem.
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let source = ConfigSource::default(root.clone());
        let patterns = |values: &[&str]| {
            PatternList::new(
                values
                    .iter()
                    .filter_map(|value| Pattern::new(None, (*value).to_string()).ok())
                    .collect(),
            )
        };
        Config {
            project: ProjectSettings {
                name: None,
                root: root.clone(),
            },
            icons: IconSettings {
                directory: root.join(DEFAULT_ICON_DIRECTORY),
                extension: DEFAULT_ICON_EXTENSION.into(),
                sizing_marker: DEFAULT_SIZING_MARKER.into(),
                inline_class: DEFAULT_INLINE_CLASS.into(),
            },
            markup: MarkupSettings {
                directive: DEFAULT_DIRECTIVE_NAME.into(),
                role: DEFAULT_ROLE_NAME.into(),
            },
            render: RenderSettings {
                include: patterns(DEFAULT_RENDER_INCLUDE),
                exclude: patterns(DEFAULT_RENDER_EXCLUDE),
            },
            logging: LoggingSettings {
                level: LogLevel::Warn,
            },
            sources: ConfigSources {
                working_directory: root,
                layers: vec![source],
            },
        }
    }

    /// Same as [`Config::builtin`] with the icon directory replaced.
    pub fn with_icon_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.icons.directory = directory.into();
        self
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}

fn make_absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn load_layer(path: &Path, source: &ConfigSource) -> Result<PartialConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.into(),
        source: err,
    })?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|err| ConfigError::Parse {
        path: path.into(),
        source: err,
    })?;
    Ok(raw.into_partial(source))
}

fn defaults_layer(source: &ConfigSource) -> PartialConfig {
    let located = |value: &str| Some(Located::new(value.to_string(), source.clone()));
    let located_list = |values: &[&str]| {
        Some(Located::new(
            values.iter().map(|value| value.to_string()).collect(),
            source.clone(),
        ))
    };

    PartialConfig {
        project: ProjectPartial {
            name: None,
            root: Some(Located::new(PathBuf::from("."), source.clone())),
        },
        icons: IconsPartial {
            directory: Some(Located::new(
                PathBuf::from(DEFAULT_ICON_DIRECTORY),
                source.clone(),
            )),
            extension: located(DEFAULT_ICON_EXTENSION),
            sizing_marker: located(DEFAULT_SIZING_MARKER),
            inline_class: located(DEFAULT_INLINE_CLASS),
        },
        markup: MarkupPartial {
            directive: located(DEFAULT_DIRECTIVE_NAME),
            role: located(DEFAULT_ROLE_NAME),
        },
        render: RenderPartial {
            include: located_list(DEFAULT_RENDER_INCLUDE),
            exclude: located_list(DEFAULT_RENDER_EXCLUDE),
        },
        logging: LoggingPartial {
            level: located(LogLevel::Warn.as_str()),
        },
    }
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

#[derive(Clone, Debug)]
struct Located<T> {
    value: T,
    source: ConfigSource,
}

impl<T> Located<T> {
    fn new(value: T, source: ConfigSource) -> Self {
        Located { value, source }
    }
}

fn merge_field<T>(target: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *target = other;
    }
}

#[derive(Clone, Debug, Default)]
struct PartialConfig {
    project: ProjectPartial,
    icons: IconsPartial,
    markup: MarkupPartial,
    render: RenderPartial,
    logging: LoggingPartial,
}

#[derive(Clone, Debug, Default)]
struct ProjectPartial {
    name: Option<Located<String>>,
    root: Option<Located<PathBuf>>,
}

#[derive(Clone, Debug, Default)]
struct IconsPartial {
    directory: Option<Located<PathBuf>>,
    extension: Option<Located<String>>,
    sizing_marker: Option<Located<String>>,
    inline_class: Option<Located<String>>,
}

#[derive(Clone, Debug, Default)]
struct MarkupPartial {
    directive: Option<Located<String>>,
    role: Option<Located<String>>,
}

#[derive(Clone, Debug, Default)]
struct RenderPartial {
    include: Option<Located<Vec<String>>>,
    exclude: Option<Located<Vec<String>>>,
}

#[derive(Clone, Debug, Default)]
struct LoggingPartial {
    level: Option<Located<String>>,
}

impl PartialConfig {
    fn merge(&mut self, other: PartialConfig) {
        merge_field(&mut self.project.name, other.project.name);
        merge_field(&mut self.project.root, other.project.root);

        merge_field(&mut self.icons.directory, other.icons.directory);
        merge_field(&mut self.icons.extension, other.icons.extension);
        merge_field(&mut self.icons.sizing_marker, other.icons.sizing_marker);
        merge_field(&mut self.icons.inline_class, other.icons.inline_class);

        merge_field(&mut self.markup.directive, other.markup.directive);
        merge_field(&mut self.markup.role, other.markup.role);

        merge_field(&mut self.render.include, other.render.include);
        merge_field(&mut self.render.exclude, other.render.exclude);

        merge_field(&mut self.logging.level, other.logging.level);
    }

    fn finalize(self) -> Result<ResolvedConfig, ConfigValidationErrors> {
        let mut errors = Vec::new();
        let fallback = || ConfigSource::default(PathBuf::from("."));

        let root = self
            .project
            .root
            .unwrap_or_else(|| Located::new(PathBuf::from("."), fallback()));
        let root = resolve_path(&root);

        let directory = self
            .icons
            .directory
            .unwrap_or_else(|| Located::new(PathBuf::from(DEFAULT_ICON_DIRECTORY), fallback()));
        // The built-in default is relative to the project root, not the working directory.
        let directory = if directory.source.kind == ConfigSourceKind::Default {
            make_absolute(&directory.value, &root)
        } else {
            resolve_path(&directory)
        };

        // `.svg` and `svg` are the same extension; validate what is left.
        let extension = require_token(
            self.icons.extension.map(|mut located| {
                located.value = located.value.trim().trim_start_matches('.').to_string();
                located
            }),
            DEFAULT_ICON_EXTENSION,
            "icons.extension",
            &mut errors,
        );
        let sizing_marker = require_token(
            self.icons.sizing_marker,
            DEFAULT_SIZING_MARKER,
            "icons.sizing_marker",
            &mut errors,
        );
        let inline_class = require_token(
            self.icons.inline_class,
            DEFAULT_INLINE_CLASS,
            "icons.inline_class",
            &mut errors,
        );

        let directive = require_identifier(
            self.markup.directive,
            DEFAULT_DIRECTIVE_NAME,
            "markup.directive",
            &mut errors,
        );
        let role = require_identifier(
            self.markup.role,
            DEFAULT_ROLE_NAME,
            "markup.role",
            &mut errors,
        );

        let include = compile_patterns(self.render.include, "render.include", &mut errors);
        let exclude = compile_patterns(self.render.exclude, "render.exclude", &mut errors);

        let level = match self.logging.level {
            Some(located) => match located.value.parse::<LogLevel>() {
                Ok(level) => level,
                Err(err) => {
                    errors.push(
                        ConfigValidationError::new(Some(located.source.clone()), err.to_string())
                            .with_context("logging.level"),
                    );
                    LogLevel::Warn
                }
            },
            None => LogLevel::Warn,
        };

        if !errors.is_empty() {
            return Err(ConfigValidationErrors(errors));
        }

        Ok(ResolvedConfig {
            project: ProjectSettings {
                name: self.project.name.map(|name| name.value),
                root,
            },
            icons: IconSettings {
                directory,
                extension,
                sizing_marker,
                inline_class,
            },
            markup: MarkupSettings { directive, role },
            render: RenderSettings {
                include: PatternList::new(include),
                exclude: PatternList::new(exclude),
            },
            logging: LoggingSettings { level },
        })
    }
}

fn resolve_path(located: &Located<PathBuf>) -> PathBuf {
    make_absolute(&located.value, &located.source.base_dir)
}

/// Class tokens and file extensions end up inside attribute values and file
/// names, so whitespace and quotes are rejected outright.
fn require_token(
    located: Option<Located<String>>,
    default: &str,
    context: &str,
    errors: &mut Vec<ConfigValidationError>,
) -> String {
    let Some(located) = located else {
        return default.to_string();
    };
    let value = located.value.trim();
    if value.is_empty() {
        errors.push(
            ConfigValidationError::new(Some(located.source.clone()), "cannot be empty".into())
                .with_context(context),
        );
    } else if value
        .chars()
        .any(|ch| ch.is_whitespace() || matches!(ch, '"' | '\'' | '<' | '>'))
    {
        errors.push(
            ConfigValidationError::new(
                Some(located.source.clone()),
                format!("'{value}' must not contain whitespace, quotes or angle brackets"),
            )
            .with_context(context),
        );
    }
    value.to_string()
}

fn require_identifier(
    located: Option<Located<String>>,
    default: &str,
    context: &str,
    errors: &mut Vec<ConfigValidationError>,
) -> String {
    let Some(located) = located else {
        return default.to_string();
    };
    let value = located.value.trim();
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if !valid {
        errors.push(
            ConfigValidationError::new(
                Some(located.source.clone()),
                format!("'{value}' is not a valid name (use letters, digits, '-' or '_')"),
            )
            .with_context(context),
        );
    }
    value.to_string()
}

fn compile_patterns(
    located: Option<Located<Vec<String>>>,
    context: &str,
    errors: &mut Vec<ConfigValidationError>,
) -> Vec<Pattern> {
    let Some(located) = located else {
        return Vec::new();
    };
    let mut patterns = Vec::new();
    for pattern in located.value {
        match Pattern::new(Some(&located.source), pattern) {
            Ok(compiled) => patterns.push(compiled),
            Err(err) => errors.push(err.with_context(context)),
        }
    }
    patterns
}

#[derive(Clone, Debug)]
struct ResolvedConfig {
    project: ProjectSettings,
    icons: IconSettings,
    markup: MarkupSettings,
    render: RenderSettings,
    logging: LoggingSettings,
}

/// Container for validation failures, formatted as a bullet list.
#[derive(Debug)]
pub struct ConfigValidationErrors(pub Vec<ConfigValidationError>);

impl fmt::Display for ConfigValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "- {err}")?;
        }
        Ok(())
    }
}

impl ConfigValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigValidationError> {
        self.0.iter()
    }
}

/// Validation failure with optional provenance.
#[derive(Clone, Debug)]
pub struct ConfigValidationError {
    pub source: Option<ConfigSource>,
    pub message: String,
    pub context: Option<String>,
}

impl ConfigValidationError {
    fn new(source: Option<ConfigSource>, message: String) -> Self {
        ConfigValidationError {
            source,
            message,
            context: None,
        }
    }

    fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{}: {}", context, self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        if let Some(source) = &self.source {
            write!(f, " ({})", source.describe())?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    project: Option<RawProject>,
    #[serde(default)]
    icons: Option<RawIcons>,
    #[serde(default)]
    markup: Option<RawMarkup>,
    #[serde(default)]
    render: Option<RawRender>,
    #[serde(default)]
    logging: Option<RawLogging>,
}

impl RawConfig {
    fn into_partial(self, source: &ConfigSource) -> PartialConfig {
        let at = |value| Located::new(value, source.clone());
        let mut partial = PartialConfig::default();

        if let Some(project) = self.project {
            partial.project.name = project.name.map(at);
            partial.project.root = project.root.map(|value| Located::new(value, source.clone()));
        }
        if let Some(icons) = self.icons {
            partial.icons.directory = icons
                .directory
                .map(|value| Located::new(value, source.clone()));
            partial.icons.extension = icons.extension.map(at);
            partial.icons.sizing_marker = icons.sizing_marker.map(at);
            partial.icons.inline_class = icons.inline_class.map(at);
        }
        if let Some(markup) = self.markup {
            partial.markup.directive = markup.directive.map(at);
            partial.markup.role = markup.role.map(at);
        }
        if let Some(render) = self.render {
            partial.render.include = render
                .include
                .map(|value| Located::new(value, source.clone()));
            partial.render.exclude = render
                .exclude
                .map(|value| Located::new(value, source.clone()));
        }
        if let Some(logging) = self.logging {
            partial.logging.level = logging.level.map(at);
        }
        partial
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    root: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIcons {
    #[serde(default)]
    directory: Option<PathBuf>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    sizing_marker: Option<String>,
    #[serde(default)]
    inline_class: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarkup {
    #[serde(default)]
    directive: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRender {
    #[serde(default)]
    include: Option<Vec<String>>,
    #[serde(default)]
    exclude: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLogging {
    #[serde(default)]
    level: Option<String>,
}
