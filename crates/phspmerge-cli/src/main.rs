//! phspmerge CLI - IAEA phase-space merge driver
//!
//! Locates the Geant4phspMerger executable (building it with CMake/Make if
//! absent), discovers `.IAEAheader` files under the given directory, and
//! invokes the merger with the suffix-stripped stems plus the output name.

use camino::Utf8PathBuf;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use phspmerge_core::config::Config;
use phspmerge_core::merge::MergePipeline;
use phspmerge_core::runner::SystemRunner;

/// phspmerge - IAEA phase-space merge driver
#[derive(Debug, Parser)]
#[command(name = "phspmerge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to search recursively for .IAEAheader files
    directory: String,

    /// Merger project directory (default: Geant4phspMerger next to this
    /// executable)
    #[arg(short, long)]
    project_dir: Option<String>,

    /// Output path passed to the merger as its last argument
    #[arg(short, long)]
    output: Option<String>,

    /// Header file suffix to search for
    #[arg(long)]
    suffix: Option<String>,

    /// Print the merger command without executing it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_error_exit_code(&err));
        }
    };

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let current_dir = std::env::current_dir()
        .ok()
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."));

    let mut config = Config::load(&current_dir).into_diagnostic()?;
    if let Some(output) = cli.output {
        config.merger.output = output;
    }
    if let Some(suffix) = cli.suffix {
        config.merger.header_suffix = suffix;
    }

    let project_dir = match cli.project_dir {
        Some(path) => Utf8PathBuf::from(path),
        None => default_project_dir(&config)?,
    };

    let search_dir = Utf8PathBuf::from(cli.directory);

    let runner = SystemRunner;
    let pipeline = MergePipeline::new(&config, &runner);

    if cli.dry_run {
        let plan = pipeline
            .dry_run(&project_dir, &search_dir)
            .into_diagnostic()?;
        println!("{}", plan.command_line());
        return Ok(());
    }

    pipeline.run(&project_dir, &search_dir).into_diagnostic()?;
    Ok(())
}

/// Exit code for a clap parse error.
///
/// clap's own usage errors exit with status 2; misuse exits with 1 here,
/// while help and version requests stay successful.
fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Resolve the merger project directory relative to this program's own
/// location
fn default_project_dir(config: &Config) -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().into_diagnostic()?;
    let exe = Utf8PathBuf::try_from(exe).into_diagnostic()?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| miette::miette!("Executable path has no parent directory: {}", exe))?;

    Ok(exe_dir.join(&config.merger.project_dir))
}
