//! Configuration loading: defaults, overlaid by the config file, overlaid
//! by `CINELIST_*` environment variables. CLI flags win over everything and
//! are applied by the individual commands.

use std::path::PathBuf;

use cinelist_catalog::{DEFAULT_MAX_REMOVALS, DEFAULT_MIN_RUNTIME_MINUTES};
use cinelist_scraper::SourceConfig;

use crate::error::CliError;

pub(crate) const DEFAULT_OUTPUT: &str = "all_films.csv";
pub(crate) const DEFAULT_IMPORT_FILE: &str = "films_import.csv";

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub source: SourceConfig,
    /// Catalog CSV: the export target and the previous-run state.
    pub output: PathBuf,
    /// Import file handed to the sync driver, deleted after a successful sync.
    pub import_file: PathBuf,
    /// External command the sync driver runs.
    pub sync_command: Option<String>,
    pub min_runtime_minutes: u32,
    pub max_removals: usize,
}

/// On-disk config file format (`~/.config/cinelist/config.toml`).
#[derive(Debug, Default, serde::Deserialize)]
struct ConfigFile {
    #[serde(default)]
    source: SourceSection,
    #[serde(default)]
    filter: FilterSection,
    #[serde(default)]
    export: ExportSection,
    #[serde(default)]
    sync: SyncSection,
}

#[derive(Debug, Default, serde::Deserialize)]
struct SourceSection {
    endpoint: Option<String>,
    category_uuid: Option<String>,
    category_name: Option<String>,
    page_size: Option<u32>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct FilterSection {
    min_runtime_minutes: Option<u32>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ExportSection {
    output: Option<PathBuf>,
    import_file: Option<PathBuf>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct SyncSection {
    command: Option<String>,
    max_removals: Option<usize>,
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cinelist").join("config.toml"))
}

fn load_config_file() -> Result<ConfigFile, CliError> {
    let Some(path) = config_path() else {
        return Ok(ConfigFile::default());
    };
    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("failed to parse {}: {}", path.display(), e)))
}

fn env_page_size() -> Result<Option<u32>, CliError> {
    match std::env::var("CINELIST_PAGE_SIZE") {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CliError::config(format!("invalid CINELIST_PAGE_SIZE: {raw:?}"))),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Load configuration once at process start.
    pub(crate) fn load() -> Result<Self, CliError> {
        let file = load_config_file()?;
        let defaults = SourceConfig::default();

        let source = SourceConfig {
            endpoint: std::env::var("CINELIST_ENDPOINT")
                .ok()
                .or(file.source.endpoint)
                .unwrap_or(defaults.endpoint),
            category_uuid: std::env::var("CINELIST_CATEGORY_UUID")
                .ok()
                .or(file.source.category_uuid)
                .unwrap_or(defaults.category_uuid),
            category_name: std::env::var("CINELIST_CATEGORY_NAME")
                .ok()
                .or(file.source.category_name)
                .unwrap_or(defaults.category_name),
            page_size: env_page_size()?
                .or(file.source.page_size)
                .unwrap_or(defaults.page_size),
        };

        Ok(Self {
            source,
            output: std::env::var("CINELIST_OUTPUT")
                .ok()
                .map(PathBuf::from)
                .or(file.export.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            import_file: file
                .export
                .import_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMPORT_FILE)),
            sync_command: std::env::var("CINELIST_SYNC_COMMAND")
                .ok()
                .or(file.sync.command),
            min_runtime_minutes: file
                .filter
                .min_runtime_minutes
                .unwrap_or(DEFAULT_MIN_RUNTIME_MINUTES),
            max_removals: file.sync.max_removals.unwrap_or(DEFAULT_MAX_REMOVALS),
        })
    }
}
