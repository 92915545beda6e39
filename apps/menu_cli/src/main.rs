use std::{
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use menu_core::MenuSession;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod render;

use controller::{
    events::{InputEvent, HELP_TEXT},
    orchestration::{run_session, spawn_input_reader},
};

#[derive(Parser, Debug)]
#[command(about = "Compose a menu from the terminal; items live for this session only")]
struct Args {
    /// Settings file; defaults to ./menu.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(title) = args.title {
        settings.screen_title = title;
    }
    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|err| anyhow!("invalid log filter '{}': {err}", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (event_tx, event_rx) = bounded::<InputEvent>(64);
    let reader = spawn_input_reader(BufReader::new(io::stdin()), event_tx);

    println!("{}\n{HELP_TEXT}\n", settings.screen_title);
    let mut session = MenuSession::new();
    let mut stdout = io::stdout().lock();
    run_session(event_rx, &mut session, &settings, &mut stdout)?;

    tracing::debug!(items = session.catalog().count(), "session ended");
    reader
        .join()
        .map_err(|_| anyhow!("input reader thread panicked"))??;
    Ok(())
}
