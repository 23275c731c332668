pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod sync;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinelist_catalog::{
    CatalogSnapshot, FilmFilter, SnapshotDiff, SyncDecision, SyncPolicy, diff,
};
use cinelist_scraper::{CatalogClient, EntryParser, ParseStats, SortType};

use crate::config::Config;
use crate::error::CliError;

/// Everything the export/sync commands need from one fetch-and-diff pass.
pub(crate) struct PipelineOutcome {
    pub previous: CatalogSnapshot,
    pub current: CatalogSnapshot,
    pub diff: SnapshotDiff,
    pub decision: SyncDecision,
    pub stats: ParseStats,
}

/// Fetch the catalog, parse/filter/dedup it, and diff against the previous
/// export. Pure reporting: nothing on disk is touched.
pub(crate) fn run_pipeline(
    rt: &tokio::runtime::Runtime,
    config: &Config,
    sort: SortType,
    limit: Option<usize>,
    force_full: bool,
    max_removals: Option<usize>,
) -> Result<PipelineOutcome, CliError> {
    let previous = cinelist_export::load_snapshot(&config.output)?;

    let client = CatalogClient::new(config.source.clone())?;
    let products = rt.block_on(async {
        let pb = spinner("Fetching catalog...");
        let result = client.fetch_catalog(sort, limit).await;
        pb.finish_and_clear();
        result
    })?;

    let parser = EntryParser::new(&config.source.category_name);
    let mut stats = ParseStats::default();
    let entries = parser.parse_all(&products, &mut stats);

    let filter = FilmFilter::new(config.min_runtime_minutes, &config.source.category_name);
    let current: CatalogSnapshot = entries.into_iter().filter(|e| filter.keep(e)).collect();

    let diff = diff(&previous, &current);
    let policy = SyncPolicy {
        force_full,
        max_removals: max_removals.unwrap_or(config.max_removals),
    };
    let decision = policy.decide(&diff);

    Ok(PipelineOutcome {
        previous,
        current,
        diff,
        decision,
        stats,
    })
}

/// Print the end-of-run summary the way every command reports it.
pub(crate) fn print_summary(outcome: &PipelineOutcome) {
    let stats = &outcome.stats;
    log::info!(
        "parsed {} products ({} dropped: {} incomplete, {} not films, {} season titles)",
        stats.parsed,
        stats.dropped(),
        stats.missing_field,
        stats.not_a_film,
        stats.season_title
    );
    log::info!(
        "{} films after filter and dedup ({} previously exported)",
        outcome.current.len(),
        outcome.previous.len()
    );
    log::info!(
        "{} new, {} removed",
        outcome.diff.additions.len(),
        outcome.diff.removals.len()
    );
    for entry in &outcome.diff.additions {
        log::debug!("  + {}", entry.key());
    }
    for entry in &outcome.diff.removals {
        log::debug!("  - {}", entry.key());
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

pub(crate) fn check_mark() -> impl std::fmt::Display {
    "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
}

pub(crate) fn warn_mark() -> impl std::fmt::Display {
    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()).to_string()
}
