use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use messenger::app::{Overrides, build_state, save_settings};
use messenger::console::Console;
use messenger::settings::SettingsStore;
use messenger_chat::{ChatFilter, ThreadMode};
use tracing::Level;

/// Single-screen messenger running in the terminal.
#[derive(Parser, Debug)]
#[command(name = "messenger", version)]
struct Args {
    /// Settings file to read (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// JSON seed with conversations and messages to start from
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Whether conversations share one thread or keep their own
    #[arg(long, value_parser = parse_thread_mode)]
    thread_mode: Option<ThreadMode>,

    /// Category shown when the console opens
    #[arg(long, value_parser = parse_filter)]
    filter: Option<ChatFilter>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Save the effective settings and exit
    #[arg(long)]
    write_settings: bool,
}

fn parse_thread_mode(raw: &str) -> Result<ThreadMode, String> {
    raw.parse().map_err(|error: messenger_chat::ChatError| error.to_string())
}

fn parse_filter(raw: &str) -> Result<ChatFilter, String> {
    raw.parse().map_err(|error: messenger_chat::ChatError| error.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so the console view on stdout stays readable.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let store = match args.settings.clone() {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::load(),
    };
    let overrides = Overrides {
        seed_path: args.seed.clone(),
        thread_mode: args.thread_mode,
        initial_filter: args.filter,
    };
    let settings = overrides.apply(&store.settings());

    if args.write_settings {
        return match save_settings(&store, settings) {
            Ok(()) => {
                println!("settings written to {}", store.config_path().display());
                ExitCode::SUCCESS
            }
            Err(error) => {
                tracing::error!("{error}");
                eprintln!("messenger: {error}");
                ExitCode::FAILURE
            }
        };
    }

    let result = build_state(&settings).and_then(|state| Console::new(state).run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("messenger: {error}");
            ExitCode::FAILURE
        }
    }
}
