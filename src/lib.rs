pub mod console;
pub mod date;
pub mod error;
pub mod media;
pub mod renamer;
pub mod report;
pub mod scan;

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

pub use error::{RenameError, Result};
pub use media::MediaFile;
pub use renamer::RenameAction;
pub use report::OperationLog;

/// Fixed name of the log file written at the end of every run
pub const LOG_FILENAME: &str = "log.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOptions {
    /// Directory tree to organize
    pub root: PathBuf,
    /// Compute and log renames without touching the filesystem
    #[serde(default)]
    pub simulate: bool,
    /// Where the log is written (overwritten each run)
    pub log_path: PathBuf,
}

impl RenameOptions {
    /// Options with the log placed next to the running executable.
    pub fn new(root: impl Into<PathBuf>, simulate: bool) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            simulate,
            log_path: default_log_path()?,
        })
    }
}

/// `log.txt` in the directory containing the program.
pub fn default_log_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(RenameError::ExecutableDir)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(LOG_FILENAME))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_found: u64,
    pub renamed: u64,
    pub correct: u64,
    pub skipped: u64,
    pub errors: u64,
    pub simulate: bool,
    /// None when nothing was found and no log was written
    pub log_path: Option<PathBuf>,
}

impl RunSummary {
    fn from_log(log: &OperationLog, options: &RenameOptions) -> Self {
        Self {
            total_found: log.total_found as u64,
            renamed: log.renamed_count() as u64,
            correct: log.correct_count() as u64,
            skipped: log.skipped_count() as u64,
            errors: log.error_count() as u64,
            simulate: options.simulate,
            log_path: Some(options.log_path.clone()),
        }
    }
}

/// Presentation hooks. The core calls these in order and never waits on them.
pub trait Reporter {
    /// Called once the root has been validated, before scanning.
    fn on_start(&mut self, options: &RenameOptions);

    /// Called when the scan turned up no media; the run ends without a log.
    fn on_no_media(&mut self) {}

    /// Called after each file; `position` is 1-based.
    fn on_file_processed(
        &mut self,
        position: usize,
        total: usize,
        file: &MediaFile,
        action: &RenameAction,
    );

    /// Called after the log has been written.
    fn on_complete(&mut self, summary: &RunSummary);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_start(&mut self, _options: &RenameOptions) {}

    fn on_file_processed(&mut self, _: usize, _: usize, _: &MediaFile, _: &RenameAction) {}

    fn on_complete(&mut self, _summary: &RunSummary) {}
}

/// Scan, rename and log a whole tree.
///
/// The log is written only after every file has been handled; a run that is
/// killed midway leaves its completed renames on disk with no log describing
/// them.
pub fn run(options: &RenameOptions, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    if !options.root.is_dir() {
        return Err(RenameError::NotADirectory(options.root.clone()));
    }

    reporter.on_start(options);
    info!(
        "Scanning {} ({})",
        options.root.display(),
        if options.simulate { "simulation" } else { "real" }
    );

    let files = scan::scan_media(&options.root)?;
    if files.is_empty() {
        reporter.on_no_media();
        return Ok(RunSummary {
            total_found: 0,
            renamed: 0,
            correct: 0,
            skipped: 0,
            errors: 0,
            simulate: options.simulate,
            log_path: None,
        });
    }

    let current_year = Local::now().year();
    let total = files.len();
    let mut log = OperationLog::new(total);

    for (i, file) in files.iter().enumerate() {
        let action = renamer::process_file(file, current_year, options.simulate, &mut log);
        reporter.on_file_processed(i + 1, total, file, &action);
    }

    log.write_to(&options.log_path, Local::now().naive_local())?;

    let summary = RunSummary::from_log(&log, options);
    info!(
        "Done: {} found, {} renamed, {} correct, {} skipped, {} errors",
        summary.total_found, summary.renamed, summary.correct, summary.skipped, summary.errors
    );
    reporter.on_complete(&summary);
    Ok(summary)
}
