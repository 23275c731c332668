//! cinelist CLI
//!
//! Command-line interface for exporting the Médiathèque numérique film
//! catalog to CSV and syncing it to a remote list.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cinelist_scraper::SortType;

mod commands;
mod config;
mod error;

use config::Config;

#[derive(Parser)]
#[command(name = "cinelist")]
#[command(about = "Export films from the Médiathèque numérique and sync them to a remote list", long_about = None)]
struct Cli {
    /// Catalog CSV path (defaults to all_films.csv or the configured path)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Common arguments for commands that fetch the catalog.
#[derive(Args, Clone)]
struct FetchArgs {
    /// Sort order requested from the source
    #[arg(long, value_enum, default_value_t = SortArg::Title)]
    sort: SortArg,

    /// Maximum number of pages to fetch
    #[arg(short, long)]
    limit: Option<usize>,

    /// Always replace the whole remote list, even for a purely additive diff
    #[arg(long)]
    force_full: bool,

    /// Abort when more than this many films disappear at once
    #[arg(long)]
    max_removals: Option<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Title,
    PublicationDate,
}

impl From<SortArg> for SortType {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortType::Title,
            SortArg::PublicationDate => SortType::PublicationDate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and write the CSV export
    Export {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Show what would change without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Fetch, export, and push the result to the remote list
    Sync {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Command to run for the import step (overrides the config file)
        #[arg(long)]
        sync_command: Option<String>,

        /// Skip the France-only IP check
        #[arg(long)]
        no_geo_check: bool,

        /// Show what would be synced without writing or importing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Export { fetch, dry_run } => commands::export::run_export(
            &config,
            fetch.sort.into(),
            fetch.limit,
            fetch.force_full,
            fetch.max_removals,
            cli.output,
            dry_run,
        ),
        Commands::Sync {
            fetch,
            sync_command,
            no_geo_check,
            dry_run,
        } => commands::sync::run_sync(
            &config,
            fetch.sort.into(),
            fetch.limit,
            fetch.force_full,
            fetch.max_removals,
            cli.output,
            sync_command,
            no_geo_check,
            dry_run,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&config),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
