use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use inline_icons_config::{Config, LoadOptions};
use inline_icons_core::{ExitCode, Extension, RenderError, RenderMode, RenderOptions, ResolveError};
use inline_icons_format::{
    render_check, render_icons, render_metadata, render_report, OutputFormat,
};
use tracing::debug;

mod logging;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    let mut options = LoadOptions::default();
    if let Some(path) = &cli.config {
        options = options.with_override_path(path);
    }
    let config = match Config::load(options) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::Configuration.as_i32());
        }
    };

    logging::init(cli.verbose, config.logging.level);
    debug!(
        directory = %config.icons.directory.display(),
        layers = config.sources.layers.len(),
        "configuration loaded"
    );

    let extension = Extension::from_config(&config);

    match cli.command {
        Command::Resolve(args) => handle_resolve(&extension, args),
        Command::Check(args) => handle_check(&extension, args),
        Command::List(args) => handle_list(&extension, args),
        Command::Render(args) => handle_render(&extension, args),
        Command::Metadata => handle_metadata(&extension),
    }
}

fn handle_resolve(extension: &Extension, args: ResolveArgs) -> Result<i32> {
    let name = args.name.trim();
    match extension.resolve(name) {
        Ok(markup) => {
            emit(&markup)?;
            Ok(ExitCode::Success.as_i32())
        }
        Err(ResolveError::NotFound { name }) => {
            match extension.resolver().suggest(&name) {
                Some(suggestion) => {
                    eprintln!("Icon '{name}' not found (did you mean '{suggestion}'?)")
                }
                None => eprintln!("Icon '{name}' not found"),
            }
            Ok(ExitCode::Diagnostics.as_i32())
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(err.exit_code().as_i32())
        }
    }
}

fn handle_check(extension: &Extension, args: FormatArgs) -> Result<i32> {
    let report = extension.check();
    emit(&render_check(&report, args.output_format())?)?;
    if report.is_ready() {
        Ok(ExitCode::Success.as_i32())
    } else {
        Ok(ExitCode::Configuration.as_i32())
    }
}

fn handle_list(extension: &Extension, args: FormatArgs) -> Result<i32> {
    let directory = extension.resolver().directory();
    match extension.list_icons() {
        Ok(icons) => {
            let rendered = render_icons(directory, &icons, args.output_format())?;
            if !rendered.is_empty() {
                emit(&rendered)?;
            }
            Ok(ExitCode::Success.as_i32())
        }
        Err(err) => {
            eprintln!("failed to list {}: {err}", directory.display());
            Ok(ExitCode::Configuration.as_i32())
        }
    }
}

fn handle_render(extension: &Extension, args: RenderArgs) -> Result<i32> {
    let RenderArgs {
        paths,
        out_dir,
        in_place,
        diff,
        format,
    } = args;

    let mode = match (out_dir, in_place, diff) {
        (Some(dir), _, _) => RenderMode::OutDir(dir),
        (None, true, _) => RenderMode::InPlace,
        (None, false, true) => RenderMode::Diff,
        (None, false, false) => RenderMode::Check,
    };

    match extension.render(&RenderOptions { paths, mode }) {
        Ok(report) => {
            emit(&render_report(&report, format.output_format())?)?;
            Ok(report.exit_code().as_i32())
        }
        Err(RenderError::InvalidInput(message)) => {
            eprintln!("{message}");
            Ok(ExitCode::InvalidInput.as_i32())
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(err.exit_code().as_i32())
        }
    }
}

fn handle_metadata(extension: &Extension) -> Result<i32> {
    emit(&render_metadata(&extension.metadata())?)?;
    Ok(ExitCode::Success.as_i32())
}

fn emit(content: &str) -> Result<()> {
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Inline SVG icons for documentation builds",
    propagate_version = true
)]
struct Cli {
    /// Use this config file instead of discovered `.inline-icons.toml` layers
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the inline markup for one icon
    Resolve(ResolveArgs),
    /// Verify the icon directory is usable
    Check(FormatArgs),
    /// List available icon names
    List(FormatArgs),
    /// Expand icon directives and roles in Markdown documents
    Render(RenderArgs),
    /// Print the extension registration metadata as JSON
    Metadata,
}

#[derive(Args)]
struct ResolveArgs {
    /// Icon name (file stem inside the icon directory)
    #[arg(value_name = "NAME")]
    name: String,
}

#[derive(Args)]
struct FormatArgs {
    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatValue>,
}

impl FormatArgs {
    fn output_format(&self) -> OutputFormat {
        match self.format.unwrap_or(FormatValue::Plain) {
            FormatValue::Plain => OutputFormat::Plain,
            FormatValue::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args)]
struct RenderArgs {
    /// Files or directories to render (defaults to the project root)
    #[arg(value_name = "PATH", action = ArgAction::Append)]
    paths: Vec<PathBuf>,
    /// Write rendered documents under this directory
    #[arg(long, value_name = "DIR", conflicts_with_all = ["in_place", "diff"])]
    out_dir: Option<PathBuf>,
    /// Rewrite documents in place
    #[arg(long = "in-place", conflicts_with_all = ["out_dir", "diff"])]
    in_place: bool,
    /// Print unified diffs instead of writing
    #[arg(long, conflicts_with_all = ["out_dir", "in_place"])]
    diff: bool,
    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatValue {
    Plain,
    Json,
}
