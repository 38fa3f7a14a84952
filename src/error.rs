use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenameError>;

/// Errors that abort a whole run. Per-file problems never surface here,
/// they end up as lines in the skipped section of the log.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("The target folder '{}' was not found.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to write log file '{}': {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot locate the program directory: {0}")]
    ExecutableDir(#[source] std::io::Error),
}
