use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{MediaFile, RenameAction, RenameOptions, Reporter, RunSummary};

const TABLE_TITLE: &str = "Complete Operation Summary";

/// Terminal front end: startup panel, progress bar, summary table.
pub struct ConsoleReporter {
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { progress: None }
    }

    fn progress_bar(&mut self, total: usize) -> &ProgressBar {
        self.progress.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {percent:>3}% ({pos} of {len}) {eta}")
            {
                pb.set_style(style);
            }
            pb
        })
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn on_start(&mut self, options: &RenameOptions) {
        let mode = if options.simulate {
            "SIMULATION (DRY RUN)".yellow()
        } else {
            "REAL".green()
        };
        let lines = [
            format!(
                "{} {}",
                "Scanning for media in:".bold(),
                options.root.display().to_string().as_str().cyan()
            ),
            format!("{} {}", "Execution Mode:".bold(), mode),
            format!(
                "{} {}",
                "Log file will be saved to:".bold(),
                options.log_path.display().to_string().as_str().cyan()
            ),
        ];
        println!("{}", panel("Media Renamer", &lines));
    }

    fn on_no_media(&mut self) {
        println!("{}", "No media files found to process.".yellow());
    }

    fn on_file_processed(
        &mut self,
        position: usize,
        total: usize,
        file: &MediaFile,
        _action: &RenameAction,
    ) {
        let pb = self.progress_bar(total);
        let message = format!("Analyzing '{}'", file.filename.as_str().bold());
        pb.set_message(message.as_str().green().to_string());
        pb.set_position(position as u64);
    }

    fn on_complete(&mut self, summary: &RunSummary) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }

        println!("{}", summary_table(&summary_rows(summary)));
    }
}

/// One row per category; the error row only shows up when something failed.
fn summary_rows(summary: &RunSummary) -> Vec<(&'static str, ColoredString)> {
    let mut rows = vec![
        ("Total Media Files Found", summary.total_found.to_string().as_str().white()),
        ("Files Renamed", summary.renamed.to_string().as_str().green()),
        ("Names Already Correct", summary.correct.to_string().as_str().cyan()),
        ("Files Skipped", summary.skipped.to_string().as_str().yellow()),
    ];
    if summary.errors > 0 {
        rows.push(("Renaming Errors", summary.errors.to_string().as_str().red().bold()));
    }
    rows
}

/// Box drawn around `lines`, title in the top border.
fn panel(title: &str, lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|l| visible_len(l))
        .max()
        .unwrap_or(0)
        .max(title.len() + 2);

    let top_fill = width + 2 - title.len() - 2;
    let left = top_fill / 2;
    let right = top_fill - left;
    let mut out = format!(
        "{} {} {}\n",
        format!("╭{}", "─".repeat(left)).as_str().magenta(),
        title.magenta().bold(),
        format!("{}╮", "─".repeat(right)).as_str().magenta()
    );
    for line in lines {
        let pad = width - visible_len(line);
        out.push_str(&format!(
            "{} {}{} {}\n",
            "│".magenta(),
            line,
            " ".repeat(pad),
            "│".magenta()
        ));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(width + 2)).as_str().magenta().to_string());
    out
}

fn summary_table(rows: &[(&str, ColoredString)]) -> String {
    let label_w = rows
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    let value_w = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let rule = |l: char, m: char, r: char| {
        format!(
            "{}{}{}{}{}",
            l,
            "─".repeat(label_w + 2),
            m,
            "─".repeat(value_w + 2),
            r
        )
        .as_str()
        .magenta()
        .to_string()
    };
    let bar = "│".magenta();

    let mut out = format!("{}\n", TABLE_TITLE.magenta().bold());
    out.push_str(&rule('┌', '┬', '┐'));
    out.push('\n');
    out.push_str(&format!(
        "{bar} {:<label_w$} {bar} {:>value_w$} {bar}\n",
        "Category".bold(),
        "Total".bold(),
    ));
    out.push_str(&rule('├', '┼', '┤'));
    out.push('\n');
    for (label, value) in rows {
        out.push_str(&format!(
            "{bar} {:<label_w$} {bar} {:>value_w$} {bar}\n",
            label.cyan(),
            value,
        ));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}

/// Length of a string as shown on screen, ignoring ANSI color sequences.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}
