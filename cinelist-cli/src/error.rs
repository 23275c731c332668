use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog fetch failed
    #[error("fetch error: {0}")]
    Fetch(#[from] cinelist_scraper::FetchError),

    /// Export file could not be written or read
    #[error("export error: {0}")]
    Export(#[from] cinelist_export::ExportError),

    /// Sync handoff failed
    #[error("sync error: {0}")]
    Sync(#[from] cinelist_sync::SyncError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Run aborted before any changes were made
    #[error("{0}")]
    Aborted(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn aborted(msg: impl Into<String>) -> Self {
        Self::Aborted(msg.into())
    }
}
