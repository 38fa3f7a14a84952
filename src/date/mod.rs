pub mod guess;
pub mod mtime;

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Where a resolved date came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Filename,
    Modified,
}

/// A calendar date attributed to a file, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub source: DateSource,
}

impl fmt::Display for ResolvedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

/// Resolve a date: filename pattern first, then a plausible modification time.
pub fn resolve_date(
    filename: &str,
    modified: Option<NaiveDateTime>,
    current_year: i32,
) -> Option<ResolvedDate> {
    // 1. Filename pattern
    if let Some(date) = guess::guess_date_from_filename(filename) {
        return Some(ResolvedDate {
            date,
            source: DateSource::Filename,
        });
    }

    // 2. Modification time within [2000, current year]
    let date = mtime::plausible_date(modified?, current_year)?;
    Some(ResolvedDate {
        date,
        source: DateSource::Modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_filename_wins_over_mtime() {
        let r = resolve_date("IMG_20230405_141230.jpg", Some(dt(2011, 1, 1, 0, 0, 0)), 2024).unwrap();
        assert_eq!(r.source, DateSource::Filename);
        assert_eq!(r.to_string(), "2023-04-05");
    }

    #[test]
    fn test_invalid_filename_date_falls_back_to_mtime() {
        let r = resolve_date("IMG_20231301.jpg", Some(dt(2021, 7, 19, 9, 5, 0)), 2024).unwrap();
        assert_eq!(r.source, DateSource::Modified);
        assert_eq!(r.to_string(), "2021-07-19");

        let r = resolve_date("2023-01-32.jpg", Some(dt(2020, 3, 4, 0, 0, 0)), 2024).unwrap();
        assert_eq!(r.to_string(), "2020-03-04");
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(resolve_date("vacation.mp4", None, 2024), None);
        assert_eq!(resolve_date("vacation.mp4", Some(dt(1998, 5, 5, 0, 0, 0)), 2024), None);
        assert_eq!(resolve_date("vacation.mp4", Some(dt(2030, 5, 5, 0, 0, 0)), 2024), None);
    }
}
