use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use media_renamer::console::ConsoleReporter;
use media_renamer::{RenameError, RenameOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "media-renamer", version, about = "Rename photos, videos and audio to YYYY-MM-DD_HHMMSS names")]
struct Cli {
    /// Folder to scan recursively
    root: PathBuf,

    /// Only log what would be renamed, touch nothing
    #[arg(long, alias = "dry-run")]
    simulate: bool,

    /// Log file path (default: log.txt next to the executable)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = match cli.log {
        Some(log_path) => RenameOptions {
            root: cli.root,
            simulate: cli.simulate,
            log_path,
        },
        None => RenameOptions::new(cli.root, cli.simulate)?,
    };

    let mut reporter = ConsoleReporter::new();
    match media_renamer::run(&options, &mut reporter) {
        Ok(_) => Ok(()),
        Err(err @ RenameError::NotADirectory(_)) => {
            eprintln!("{}", format!("Error: {}", err).as_str().red().bold());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
