//! Contact Book - Main entry point
//!
//! Runs the interactive prompt over stdin/stdout against a single in-memory
//! address book.

use anyhow::Result;
use contact_book::{AddressBook, Config, Dispatcher};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout belongs to the prompt)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book (default page size {})",
        config.default_page_size
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut dispatcher = Dispatcher::new(&mut book, config.default_page_size);
    if let Err(e) = dispatcher.run(stdin.lock(), stdout.lock()) {
        error!("Prompt loop failed: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete ({} contacts in memory)", book.len());
    Ok(())
}
