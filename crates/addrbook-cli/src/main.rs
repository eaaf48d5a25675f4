//! Address book command-line front end.
//!
//! Loads the book from a JSON file, runs the interactive menu on
//! stdin/stdout, and saves when the user picks "Save and exit". Only one
//! process should use a given file at a time.

mod logging;
mod menu;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use addrbook_adapters::persistence::{JsonFileStore, DEFAULT_FILE_NAME};
use addrbook_app::BookSession;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use crate::menu::Menu;

#[derive(Parser, Debug)]
#[command(name = "addrbook", about = "Keep contacts in a local address book")]
struct Cli {
    /// Address book file to load on start and save on exit
    #[arg(short, long, env = "ADDRBOOK_FILE", default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = JsonFileStore::new(&cli.file);
    let mut session = BookSession::open(store)
        .with_context(|| format!("Failed to load address book from {}", cli.file.display()))?;

    let stdin = io::stdin();
    let exit = Menu::new(stdin.lock(), io::stdout().lock())
        .run(&mut session)
        .context("Console I/O failed")?;

    info!(?exit, "menu closed");
    Ok(())
}
