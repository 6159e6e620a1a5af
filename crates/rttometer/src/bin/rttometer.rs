//! CLI for aggregating RTT probe sweeps.
//!
//! # Usage
//!
//! ```bash
//! # Aggregate every output_<N>mcu log in ./measures into all_master.csv
//! rttometer sweep ./measures
//!
//! # Custom naming convention, JSON copy of the table, no progress bar
//! rttometer sweep ./measures --prefix period_ --suffix us --json sweep.json --no-progress
//!
//! # Inspect a single log and export its derived records
//! rttometer analyze ./measures/output_500mcu --export master.csv
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use rttometer::data::{write_derived_csv, write_summary_csv};
use rttometer::output::{format_rtt_summary, format_sweep_table, to_json_pretty, write_json_file};
use rttometer::{aggregate_files, discover_sweep_files, summarize_log, SweepConfig};

/// Round-trip-time sweep aggregation
#[derive(Parser, Debug)]
#[command(name = "rttometer")]
#[command(about = "Summarize RTT probe logs across a sweep of sending periods")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Show debug events
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate a sweep directory into a summary table
    Sweep {
        /// Directory holding one raw log per configured period
        dir: PathBuf,

        /// Summary CSV to write
        #[arg(short, long, default_value = "all_master.csv")]
        output: PathBuf,

        /// Also write the table as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// File-name prefix before the period digits (overrides config)
        #[arg(long)]
        prefix: Option<String>,

        /// File-name suffix after the period digits (overrides config)
        #[arg(long)]
        suffix: Option<String>,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Summarize the RTT distribution of one raw log
    Analyze {
        /// Raw probe log
        file: PathBuf,

        /// Write the derived records as CSV
        #[arg(long)]
        export: Option<PathBuf>,

        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let result = match args.command {
        Command::Sweep {
            dir,
            output,
            json,
            prefix,
            suffix,
            config,
            no_progress,
        } => load_config(config.as_deref(), prefix, suffix).and_then(|config| {
            run_sweep(
                &dir,
                &output,
                json.as_deref(),
                &config,
                !no_progress && !args.quiet,
            )
        }),
        Command::Analyze { file, export, json } => run_analyze(&file, export.as_deref(), json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only tables and JSON.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(
    path: Option<&Path>,
    prefix: Option<String>,
    suffix: Option<String>,
) -> Result<SweepConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => SweepConfig::from_json_file(path)?,
        None => SweepConfig::default(),
    };
    if let Some(prefix) = prefix {
        config = config.prefix(prefix);
    }
    if let Some(suffix) = suffix {
        config = config.suffix(suffix);
    }
    Ok(config)
}

fn run_sweep(
    dir: &Path,
    output: &Path,
    json: Option<&Path>,
    config: &SweepConfig,
    show_progress: bool,
) -> CliResult {
    let files = discover_sweep_files(dir, &config.pattern)?;
    tracing::info!(dir = %dir.display(), files = files.len(), "discovered sweep files");

    let progress_bar = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress_bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    let result = aggregate_files(&files, config, |file| {
        progress_bar.set_message(file.configured_period.to_string());
        progress_bar.inc(1);
    });
    let table = match result {
        Ok(table) => {
            progress_bar.finish_with_message("done");
            table
        }
        Err(e) => {
            progress_bar.abandon();
            return Err(e.into());
        }
    };

    write_summary_csv(&table, output)?;
    tracing::info!(path = %output.display(), "wrote summary table");

    if let Some(json_path) = json {
        write_json_file(&table, json_path)?;
        tracing::info!(path = %json_path.display(), "wrote JSON table");
    }

    print!("{}", format_sweep_table(&table));
    Ok(())
}

fn run_analyze(file: &Path, export: Option<&Path>, json: bool) -> CliResult {
    let (derived, summary) = summarize_log(file)?;

    if let Some(export_path) = export {
        write_derived_csv(&derived, export_path)?;
        tracing::info!(path = %export_path.display(), records = derived.len(), "wrote derived records");
    }

    if json {
        println!("{}", to_json_pretty(&summary)?);
    } else {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        print!("{}", format_rtt_summary(&name, &summary));
    }
    Ok(())
}
