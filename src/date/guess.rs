use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20\d{2})[-_]?(\d{2})[-_]?(\d{2})").unwrap());

/// Find a `20YY[-_]MM[-_]DD` date in the filename. Only the leftmost match
/// counts: if it is not a real calendar date, no other substring is tried.
pub fn guess_date_from_filename(filename: &str) -> Option<NaiveDate> {
    let basename = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let caps = DATE_RE.captures(basename)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
