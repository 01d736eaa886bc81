//! vite-picker CLI
//!
//! Pick a Vite template and a project directory interactively, then run
//! `npm create vite` for it.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use vite_picker::catalog::{format_catalog, VITE_TEMPLATES};
use vite_picker::completion::OsFilesystem;
use vite_picker::scaffold::{DryRunScaffolder, NpmScaffolder};
use vite_picker::tui;
use vite_picker::types::{default_log_file, OutputFormat, WizardConfig};

#[derive(Parser)]
#[command(name = "vite-picker")]
#[command(about = "Pick a Vite template and scaffold a project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the generator command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Log file (default: <cache dir>/vite-picker/wizard.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available templates (no wizard)
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
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

    let config = WizardConfig {
        dry_run: cli.dry_run,
        log_file: cli.log_file.or_else(default_log_file),
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Some(Commands::List { format }) => cmd_list(format.into()),
        None => cmd_wizard(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Start the file logger. The TUI owns the terminal, so logs never go to
/// stdout/stderr. Failing to open the log file just disables logging.
fn init_logging(config: &WizardConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = WriteLogger::init(level, log_config, file);
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_list(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_catalog(VITE_TEMPLATES, format));
    Ok(())
}

fn cmd_wizard(config: &WizardConfig) -> Result<(), String> {
    init_logging(config);
    info!("vite-picker starting (dry run: {})", config.dry_run);

    let result = if config.dry_run {
        tui::run::run(VITE_TEMPLATES, &OsFilesystem, &mut DryRunScaffolder)
    } else {
        tui::run::run(VITE_TEMPLATES, &OsFilesystem, &mut NpmScaffolder)
    };

    match result {
        Ok(Some(request)) => {
            info!("done: {}", request.target.display());
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            log::error!("{}", e);
            Err(e.to_string())
        }
    }
}
