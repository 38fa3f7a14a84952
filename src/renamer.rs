use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::date::{self, ResolvedDate};
use crate::media::MediaFile;
use crate::report::OperationLog;

/// What a single file resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    /// Date could not be resolved (or the modification time was unreadable)
    Unresolved,
    /// Current name already is the canonical one
    AlreadyCorrect,
    /// Move to this path in the same directory
    Rename { dest: PathBuf },
}

/// `<date>_<HHMMSS>`, the canonical name without extension.
pub fn canonical_base(date: &ResolvedDate, modified: NaiveDateTime) -> String {
    format!("{}_{}", date, modified.format("%H%M%S"))
}

/// Pick the destination for `file` given its canonical base name.
///
/// Candidates are `<base><ext>`, then `<base>-1<ext>`, `<base>-2<ext>`, ...
/// and the first one with nothing on disk wins. Existence is probed on the
/// live filesystem only: in simulation mode, targets claimed by earlier
/// simulated renames of the same run are not seen, so two files can be
/// reported with the same destination.
///
/// Reaching the file's own path while probing means it already carries a
/// canonical (possibly suffixed) name.
pub fn plan_rename(file: &MediaFile, base: &str) -> RenameAction {
    let first = format!("{}{}", base, file.extension);
    if first == file.filename {
        return RenameAction::AlreadyCorrect;
    }

    let dir = file.path.parent().unwrap_or_else(|| Path::new(""));
    let mut dest = dir.join(&first);
    let mut counter = 1u32;
    loop {
        if dest == file.path {
            return RenameAction::AlreadyCorrect;
        }
        if !occupied(&dest) {
            return RenameAction::Rename { dest };
        }
        dest = dir.join(format!("{}-{}{}", base, counter, file.extension));
        counter += 1;
    }
}

/// Anything at the path at all, including dangling symlinks.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Resolve, plan and (unless simulating) rename one file, recording the outcome.
pub fn process_file(
    file: &MediaFile,
    current_year: i32,
    simulate: bool,
    log: &mut OperationLog,
) -> RenameAction {
    let action = match file.modified {
        Some(modified) => match date::resolve_date(&file.filename, Some(modified), current_year) {
            Some(resolved) => {
                debug!("{}: date {} from {:?}", file.path.display(), resolved, resolved.source);
                plan_rename(file, &canonical_base(&resolved, modified))
            }
            None => RenameAction::Unresolved,
        },
        None => RenameAction::Unresolved,
    };

    match &action {
        RenameAction::Unresolved => {
            debug!("{}: no usable date", file.path.display());
            log.record_unresolved(&file.path);
        }
        RenameAction::AlreadyCorrect => log.record_correct(&file.path),
        RenameAction::Rename { dest } => {
            log.record_renamed(&file.path, dest);
            if !simulate {
                if let Err(err) = fs::rename(&file.path, dest) {
                    warn!("Failed to rename {}: {}", file.path.display(), err);
                    log.demote_last_rename(&file.path, &err);
                }
            }
        }
    }

    action
}
