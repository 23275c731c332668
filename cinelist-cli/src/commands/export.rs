use std::path::PathBuf;

use cinelist_catalog::SyncDecision;
use cinelist_scraper::SortType;

use crate::commands::{check_mark, print_summary, run_pipeline, warn_mark};
use crate::config::Config;
use crate::error::CliError;

/// Run the export command: fetch, filter, diff, write the catalog CSV.
pub(crate) fn run_export(
    config: &Config,
    sort: SortType,
    limit: Option<usize>,
    force_full: bool,
    max_removals: Option<usize>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut config = config.clone();
    if let Some(path) = output {
        config.output = path;
    }

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let outcome = run_pipeline(&rt, &config, sort, limit, force_full, max_removals)?;
    print_summary(&outcome);

    if let SyncDecision::SuspiciousRemovals { removed, limit: cap } = outcome.decision {
        log::warn!(
            "{} {} films disappeared at once (limit {}); not overwriting {}",
            warn_mark(),
            removed,
            cap,
            config.output.display()
        );
        return Err(CliError::aborted("suspicious removal count"));
    }

    if dry_run {
        log::info!("dry run: {} not written", config.output.display());
        return Ok(());
    }

    cinelist_export::write_snapshot(&outcome.current, &config.output)?;
    log::info!(
        "{} wrote {} films to {}",
        check_mark(),
        outcome.current.len(),
        config.output.display()
    );
    Ok(())
}
