//! seace-admin CLI
//!
//! Terminal front end for the SEACE report administration site.

use std::cell::Cell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};

use seace_admin::config::{ConfigFile, Overrides};
use seace_admin::error::Result;
use seace_admin::logging::{self, Sink};
use seace_admin::report::{format_snapshot, Snapshot};
use seace_admin::selector::ModeSelector;
use seace_admin::shell::PageShell;
use seace_admin::tui;
use seace_admin::types::{OperationMode, OutputFormat};

#[derive(Parser)]
#[command(name = "seace-admin")]
#[command(about = "Administer SEACE reports: pick between exploring and generating")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/seace-admin/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Heading text, overriding the config file
    #[arg(long, global = true)]
    title: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive selector (default)
    Run,

    /// Apply selections headlessly and print the resulting page
    Snapshot {
        /// Mode to select, applied in order; repeatable
        #[arg(long = "select", value_enum)]
        selections: Vec<ModeArg>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Explore,
    Generate,
}

impl From<ModeArg> for OperationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Explore => OperationMode::Explore,
            ModeArg::Generate => OperationMode::Generate,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = ConfigFile::resolve(cli.config.as_deref())?.with_overrides(Overrides {
        title: cli.title,
        log_file: cli.log_file,
    });

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config),
        Commands::Snapshot { selections, format } => {
            let modes: Vec<OperationMode> = selections.into_iter().map(Into::into).collect();
            cmd_snapshot(&config, &modes, format.into())
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(config: &ConfigFile) -> Result<()> {
    let sink = match &config.logging.file {
        Some(path) => Sink::File(path),
        None => Sink::Off,
    };
    logging::init(sink, &config.logging.level)?;

    tui::run(PageShell::new(config.shell.title.as_str()), config.ui.mouse)
}

fn cmd_snapshot(config: &ConfigFile, selections: &[OperationMode], format: OutputFormat) -> Result<()> {
    let sink = match &config.logging.file {
        Some(path) => Sink::File(path),
        None => Sink::Stderr,
    };
    logging::init(sink, &config.logging.level)?;

    let shell = PageShell::new(config.shell.title.as_str());
    let mut selector = ModeSelector::new();

    let changes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&changes);
    selector.on_change(move |change| {
        tracing::info!(from = %change.from, to = %change.to, "mode changed");
        counter.set(counter.get() + 1);
    });

    for &mode in selections {
        if selector.select(mode).is_none() {
            tracing::debug!(%mode, "already selected");
        }
    }

    let snapshot = Snapshot::capture(&shell, &selector, changes.get());
    print!("{}", format_snapshot(&snapshot, format)?);

    Ok(())
}
