//! Taskboard tracker shell -- a thin interactive host over the core.
//!
//! Reads one command per line from stdin and dispatches it to the tracker
//! as the current caller identity. Stands in for the external transport
//! layer during local development.
//!
//! # Usage
//!
//! ```bash
//! # Start with the admin identity on the command line
//! cargo run --bin taskboard-tracker -- --admin admin-a
//!
//! # Or via environment variable
//! TASKBOARD_ADMIN=admin-a cargo run --bin taskboard-tracker
//! ```

use std::io::{self, BufRead, Write};

use clap::Parser;
use taskboard_tracker::config::{TrackerCliArgs, TrackerConfig};
use taskboard_tracker::shell::{self, Command, Shell};
use taskboard_tracker::tracker::Tracker;

fn main() {
    let cli = TrackerCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match TrackerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level, on stderr so log
    // lines do not interleave with command output.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(admin = %config.admin_identity, "starting taskboard shell");

    let mut shell = Shell::new(Tracker::new(&config));
    println!("taskboard shell; caller is {} (try 'help')", shell.caller());

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            prompt();
            continue;
        }
        match shell::parse(line) {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", shell.run(command)),
            Err(e) => println!("error: {e}"),
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
