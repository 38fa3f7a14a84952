use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{RenameError, Result};

const SECTION_RULE_WIDTH: usize = 50;

pub const REASON_NAME_CORRECT: &str = "[NAME ALREADY CORRECT]";
pub const REASON_INVALID_DATE: &str = "[INVALID OR UNREADABLE DATE]";

/// Per-run record of what happened to each media file.
///
/// Every file lands in exactly one of the three sections, so
/// `renamed + correct + skipped == total_found` once all files are recorded.
#[derive(Debug, Default)]
pub struct OperationLog {
    pub total_found: usize,
    renamed: Vec<String>,
    correct: Vec<String>,
    skipped: Vec<String>,
    errors: usize,
}

impl OperationLog {
    pub fn new(total_found: usize) -> Self {
        Self {
            total_found,
            ..Self::default()
        }
    }

    pub fn record_renamed(&mut self, source: &Path, dest: &Path) {
        self.renamed
            .push(format!("{} -> {}", source.display(), dest.display()));
    }

    pub fn record_correct(&mut self, path: &Path) {
        self.correct
            .push(format!("{} -> {}", path.display(), REASON_NAME_CORRECT));
    }

    pub fn record_unresolved(&mut self, path: &Path) {
        self.skipped
            .push(format!("{} -> {}", path.display(), REASON_INVALID_DATE));
    }

    /// Turn the most recent rename entry into a skipped one carrying the error.
    pub fn demote_last_rename(&mut self, source: &Path, err: &std::io::Error) {
        self.renamed.pop();
        self.skipped.push(format!(
            "{} -> [ERROR RENAMING: {}]",
            source.display(),
            err
        ));
        self.errors += 1;
    }

    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn renamed_lines(&self) -> &[String] {
        &self.renamed
    }

    pub fn correct_lines(&self) -> &[String] {
        &self.correct
    }

    pub fn skipped_lines(&self) -> &[String] {
        &self.skipped
    }

    /// Render the log document. Empty sections are left out entirely.
    pub fn render(&self, generated_at: NaiveDateTime) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "# MEDIA ORGANIZATION LOG\n# Generated on: {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        push_section(&mut out, "", "RENAMED FILES", &self.renamed);
        push_section(&mut out, "\n", "FILES ALREADY NAMED CORRECTLY", &self.correct);
        push_section(&mut out, "\n", "SKIPPED OR ERRORED FILES", &self.skipped);
        out
    }

    /// Write the log, replacing any previous one at `path`.
    pub fn write_to(&self, path: &Path, generated_at: NaiveDateTime) -> Result<()> {
        fs::write(path, self.render(generated_at)).map_err(|source| RenameError::LogWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn push_section(out: &mut String, lead: &str, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}# {} ({})", lead, title, lines.len());
    out.push_str(&"=".repeat(SECTION_RULE_WIDTH));
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(8, 7, 6)
            .unwrap()
    }

    #[test]
    fn test_render_all_sections() {
        let mut log = OperationLog::new(3);
        log.record_renamed(Path::new("/p/IMG_1.jpg"), Path::new("/p/2023-04-05_141230.jpg"));
        log.record_correct(Path::new("/p/2022-01-01_000000.png"));
        log.record_unresolved(Path::new("/p/old.mp3"));

        let rule = "=".repeat(50);
        let expected = format!(
            "# MEDIA ORGANIZATION LOG\n# Generated on: 2024-03-09 08:07:06\n\n\
             # RENAMED FILES (1)\n{rule}\n/p/IMG_1.jpg -> /p/2023-04-05_141230.jpg\n\
             \n# FILES ALREADY NAMED CORRECTLY (1)\n{rule}\n/p/2022-01-01_000000.png -> [NAME ALREADY CORRECT]\n\
             \n# SKIPPED OR ERRORED FILES (1)\n{rule}\n/p/old.mp3 -> [INVALID OR UNREADABLE DATE]\n"
        );
        assert_eq!(log.render(generated()), expected);
    }

    #[test]
    fn test_render_omits_empty_sections() {
        let mut log = OperationLog::new(1);
        log.record_correct(Path::new("/p/a.png"));
        let text = log.render(generated());
        assert!(!text.contains("RENAMED FILES"));
        assert!(!text.contains("SKIPPED"));
        assert!(text.contains("\n\n\n# FILES ALREADY NAMED CORRECTLY (1)\n"));
    }

    #[test]
    fn test_demote_keeps_counts_balanced() {
        let mut log = OperationLog::new(2);
        log.record_renamed(Path::new("/p/a.jpg"), Path::new("/p/b.jpg"));
        log.record_renamed(Path::new("/p/c.jpg"), Path::new("/p/d.jpg"));
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        log.demote_last_rename(Path::new("/p/c.jpg"), &err);

        assert_eq!(log.renamed_count(), 1);
        assert_eq!(log.skipped_count(), 1);
        assert_eq!(log.error_count(), 1);
        assert_eq!(
            log.renamed_count() + log.correct_count() + log.skipped_count(),
            log.total_found
        );
        assert_eq!(log.renamed_lines(), ["/p/a.jpg -> /p/b.jpg"]);
        assert_eq!(log.skipped_lines(), ["/p/c.jpg -> [ERROR RENAMING: denied]"]);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path: PathBuf = dir.path().join("log.txt");
        fs::write(&path, "stale content that is long enough to notice\n").unwrap();

        let log = OperationLog::new(0);
        log.write_to(&path, generated()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# MEDIA ORGANIZATION LOG\n# Generated on: 2024-03-09 08:07:06\n\n"
        );
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/log.txt");
        let err = OperationLog::new(0).write_to(&path, generated()).unwrap_err();
        assert!(matches!(err, RenameError::LogWrite { .. }));
    }
}
