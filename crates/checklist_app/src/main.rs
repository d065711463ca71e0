use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use checklist_app::commands::HELP;
use checklist_app::{load_config, load_or_default, parse_command, render, Command, Store};
use checklist_core::{Msg, UuidGenerator};
use checklist_logging::{checklist_info, checklist_warn};
use clap::Parser;
use log::LevelFilter;

const DEFAULT_CONFIG: &str = "checklist.ron";
const TICK: Duration = Duration::from_millis(75);

/// Interactive checklist screen driven from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RON config file. Defaults to ./checklist.ron when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured log level (off, error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path).context("loading --config")?,
        None => load_or_default(Path::new(DEFAULT_CONFIG))?,
    };
    let level = cli.log_level.unwrap_or(config.log.level);
    checklist_logging::initialize(config.log.destination, level, &config.log.file);
    checklist_info!("Starting with source {:?}", config.source);

    let mut store = Store::new(config.source.build_client(), Box::new(UuidGenerator));
    store.subscribe(|view| {
        for line in render(view) {
            println!("{line}");
        }
    });

    println!("{HELP}");
    for line in render(&store.view()) {
        println!("{line}");
    }
    store.send(Msg::Appear);
    // Commands refer to rows, so hold them back until the first list is in.
    if !store.process_until_fetched(config.source.fetch_timeout()) {
        checklist_warn!("No checklist received before reading commands");
    }

    let lines = spawn_stdin_reader();
    loop {
        store.process_next(TICK);
        match lines.try_recv() {
            Ok(line) => match parse_command(&line, &store.view()) {
                Ok(Command::Send(msg)) => store.send(msg),
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::Quit) => break,
                Err(err) => println!("{err}"),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }
    }

    store.process_pending();
    checklist_info!("Exiting");
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
