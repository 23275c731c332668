use std::path::PathBuf;

use cinelist_catalog::SyncDecision;
use cinelist_scraper::{LICENSED_COUNTRY, SortType};
use cinelist_sync::{CommandSyncDriver, SyncDriver};

use crate::commands::{check_mark, print_summary, run_pipeline, warn_mark};
use crate::config::Config;
use crate::error::CliError;

/// Run the sync command: export, then hand the import file to the driver.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_sync(
    config: &Config,
    sort: SortType,
    limit: Option<usize>,
    force_full: bool,
    max_removals: Option<usize>,
    output: Option<PathBuf>,
    sync_command: Option<String>,
    no_geo_check: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut config = config.clone();
    if let Some(path) = output {
        config.output = path;
    }

    let command_line = sync_command
        .or_else(|| config.sync_command.clone())
        .ok_or_else(|| {
            CliError::config(
                "no sync command configured; pass --sync-command or set [sync] command",
            )
        })?;
    let driver = CommandSyncDriver::from_command_line(&command_line)?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    if !no_geo_check {
        let country = rt.block_on(cinelist_scraper::current_country())?;
        if country != LICENSED_COUNTRY {
            log::warn!(
                "{} the source only serves {} IPs; you appear to be in {}",
                warn_mark(),
                LICENSED_COUNTRY,
                country
            );
            return Err(CliError::aborted("wrong country for the source catalog"));
        }
    }

    let outcome = run_pipeline(&rt, &config, sort, limit, force_full, max_removals)?;
    print_summary(&outcome);

    let full_replace = match outcome.decision {
        SyncDecision::NoChange => {
            log::info!("no new films: no import performed");
            return Ok(());
        }
        SyncDecision::SuspiciousRemovals { removed, limit: cap } => {
            log::warn!(
                "{} {} films disappeared at once (limit {}); refusing to sync",
                warn_mark(),
                removed,
                cap
            );
            return Err(CliError::aborted("suspicious removal count"));
        }
        SyncDecision::Incremental => false,
        SyncDecision::FullReplace => true,
    };

    if dry_run {
        log::info!(
            "dry run: would {} via '{}'",
            if full_replace {
                "replace the whole list"
            } else {
                "append the new films"
            },
            command_line
        );
        return Ok(());
    }

    // Commit the new catalog state, then hand off. If the driver fails, the
    // previous catalog file is restored so the next run re-detects the same
    // additions.
    cinelist_export::write_snapshot(&outcome.current, &config.output)?;

    if full_replace {
        cinelist_export::write_snapshot(&outcome.current, &config.import_file)?;
        log::info!(
            "{} films removed, {} added; the whole list will be imported",
            outcome.diff.removals.len(),
            outcome.diff.additions.len()
        );
    } else {
        cinelist_export::write_entries(&outcome.diff.additions, &config.import_file)?;
        log::info!("{} new films will be imported", outcome.diff.additions.len());
    }

    match driver.apply(&config.import_file, full_replace) {
        Ok(()) => {
            if let Err(e) = std::fs::remove_file(&config.import_file) {
                log::warn!(
                    "could not remove {}: {}",
                    config.import_file.display(),
                    e
                );
            }
            log::info!("{} list imported successfully", check_mark());
            Ok(())
        }
        Err(e) => {
            log::error!("import failed, restoring {}", config.output.display());
            if let Err(restore_err) =
                cinelist_export::write_snapshot(&outcome.previous, &config.output)
            {
                log::error!(
                    "could not restore previous export: {}; next run will diff against the new state",
                    restore_err
                );
            }
            Err(e.into())
        }
    }
}
