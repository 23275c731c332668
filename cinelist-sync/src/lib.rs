//! Handoff to the external list-sync step.
//!
//! The remote list is updated by a browser-automation tool that lives
//! outside this workspace. The core only hands it two values: the path of
//! the import file and whether to replace the whole list or append to it.
//! Modeling that handoff as a trait keeps the pipeline unit-testable
//! without a browser anywhere in sight.

use std::path::Path;
use std::process::Command;

/// Errors from the sync handoff.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("sync command is empty")]
    EmptyCommand,

    #[error("failed to run sync command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sync command '{program}' exited with {}", code.map_or("signal".to_string(), |c| format!("status {c}")))]
    Failed { program: String, code: Option<i32> },
}

/// Applies an import file to the remote list.
pub trait SyncDriver {
    /// Push `csv_path` to the remote list. `full_replace` overwrites the
    /// whole list; otherwise the file's entries are appended.
    fn apply(&self, csv_path: &Path, full_replace: bool) -> Result<(), SyncError>;
}

/// Sync driver that shells out to a configured external command.
///
/// The command is invoked as
/// `<program> <args...> <csv_path> --replace|--append`.
#[derive(Debug, Clone)]
pub struct CommandSyncDriver {
    program: String,
    args: Vec<String>,
}

impl CommandSyncDriver {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a whitespace-separated command line into program and args.
    pub fn from_command_line(line: &str) -> Result<Self, SyncError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(SyncError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl SyncDriver for CommandSyncDriver {
    fn apply(&self, csv_path: &Path, full_replace: bool) -> Result<(), SyncError> {
        let mode = if full_replace { "--replace" } else { "--append" };
        log::info!(
            "running sync command: {} {} {} {}",
            self.program,
            self.args.join(" "),
            csv_path.display(),
            mode
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(csv_path)
            .arg(mode)
            .status()
            .map_err(|source| SyncError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SyncError::Failed {
                program: self.program.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
