use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::date::mtime;
use crate::error::{RenameError, Result};
use crate::media::{self, MediaFile};

/// Walk `root` recursively and collect every regular file with a media extension.
/// The whole tree is listed before anything is renamed; entries are sorted by
/// file name within each directory so runs are reproducible.
pub fn scan_media(root: &Path) -> Result<Vec<MediaFile>> {
    if !root.is_dir() {
        return Err(RenameError::NotADirectory(root.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() || !media::is_media_path(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        let modified = mtime::read_modified(&path);
        found.push(MediaFile::new(path, modified));
    }

    debug!("Found {} media files under {}", found.len(), root.display());
    Ok(found)
}
