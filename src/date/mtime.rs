use std::path::Path;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use filetime::FileTime;

/// Earliest year a modification time is trusted for.
pub const MIN_PLAUSIBLE_YEAR: i32 = 2000;

/// Read the last-modified time of a file as local wall-clock time.
/// Any metadata failure yields None.
pub fn read_modified(path: &Path) -> Option<NaiveDateTime> {
    let meta = std::fs::metadata(path).ok()?;
    let ft = FileTime::from_last_modification_time(&meta);
    let utc = DateTime::<Utc>::from_timestamp(ft.unix_seconds(), ft.nanoseconds())?;
    Some(utc.with_timezone(&Local).naive_local())
}

/// Accept a modification time as a date only if its year lies in
/// [`MIN_PLAUSIBLE_YEAR`, `current_year`].
pub fn plausible_date(modified: NaiveDateTime, current_year: i32) -> Option<NaiveDate> {
    let year = modified.year();
    if (MIN_PLAUSIBLE_YEAR..=current_year).contains(&year) {
        Some(modified.date())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_plausible_range() {
        assert_eq!(plausible_date(at(2000, 1, 1), 2024), NaiveDate::from_ymd_opt(2000, 1, 1));
        assert_eq!(plausible_date(at(2024, 12, 31), 2024), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(plausible_date(at(1999, 12, 31), 2024), None);
        assert_eq!(plausible_date(at(2025, 1, 1), 2024), None);
        assert_eq!(plausible_date(at(1970, 1, 1), 2024), None);
    }

    #[test]
    fn test_read_modified_roundtrips_local_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        File::create(&path).unwrap();

        let local = NaiveDate::from_ymd_opt(2021, 7, 19)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let ts = local.and_local_timezone(Local).single().unwrap().timestamp();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(ts, 0)).unwrap();

        assert_eq!(read_modified(&path), Some(local));
    }

    #[test]
    fn test_read_modified_missing_file() {
        let dir = tempdir().unwrap();
        assert_eq!(read_modified(&dir.path().join("gone.jpg")), None);
    }
}
