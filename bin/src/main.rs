//! suimon CLI - Hydrological record downloader for the Japanese river portal.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use suimon_lib::prelude::*;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "suimon")]
#[command(about = "Rainfall and water-level downloader for www1.river.go.jp", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Portal host to talk to instead of www1.river.go.jp (e.g. http://127.0.0.1:8080)
    #[arg(long, global = true)]
    host: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List downloadable data kinds and how each is queried
    Kinds {
        /// Filter by category (rain, water)
        #[arg(short, long)]
        category: Option<DataCategory>,
    },

    /// Show a station's identity and data availability
    Info {
        /// Station identifier
        station: String,

        /// Data category (rain, water, ...)
        #[arg(short, long)]
        category: DataCategory,

        /// Kind code
        #[arg(short, long)]
        kind: KindCode,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the category and kind code for a station's data item
    Resolve {
        /// Station identifier
        station: String,

        /// Item name as labelled on the station's site-info page
        item: String,
    },

    /// Download data files for a station
    Download {
        /// Station identifier
        station: String,

        /// Data category (rain, water)
        #[arg(short, long)]
        category: DataCategory,

        /// Kind code
        #[arg(short, long)]
        kind: KindCode,

        /// Start (YYYY/MM for monthly kinds, YYYY otherwise)
        #[arg(short, long)]
        start: String,

        /// End (YYYY/MM for monthly kinds, YYYY otherwise)
        #[arg(short, long)]
        end: String,

        /// Output root directory
        #[arg(short, long, default_value = "./Download")]
        output_dir: PathBuf,

        /// Per-request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = match cli.host.as_deref() {
        Some(host) => ClientConfig::default().with_host(host),
        None => ClientConfig::default(),
    };

    match command {
        Commands::Kinds { category } => commands::kinds::list_kinds(category),
        Commands::Info {
            station,
            category,
            kind,
            json,
        } => commands::info::show_info(config, &station, category, kind, json).await,
        Commands::Resolve { station, item } => {
            commands::resolve::resolve(config, &station, &item).await
        }
        Commands::Download {
            station,
            category,
            kind,
            start,
            end,
            output_dir,
            timeout,
        } => {
            commands::download::download(
                config,
                &station,
                category,
                kind,
                &start,
                &end,
                output_dir,
                timeout,
                cli.quiet,
            )
            .await
        }
    }
}
