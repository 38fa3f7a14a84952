use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "heic", "heif",
];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "wmv", "flv", "webm", "mpeg", "mpg",
];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "flac", "ogg", "m4a", "wma"];

/// Check if a path carries one of the known image/video/audio extensions (case-insensitive).
pub fn is_media_path(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS)
        .chain(AUDIO_EXTENSIONS)
        .any(|known| *known == ext)
}

#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Full path as found by the scanner
    pub path: PathBuf,
    /// Just the filename
    pub filename: String,
    /// Extension including the leading dot, original case kept ("" if none)
    pub extension: String,
    /// Last-modified time in local time, None if unreadable
    pub modified: Option<NaiveDateTime>,
}

impl MediaFile {
    pub fn new(path: PathBuf, modified: Option<NaiveDateTime>) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Self {
            path,
            filename,
            extension,
            modified,
        }
    }
}
