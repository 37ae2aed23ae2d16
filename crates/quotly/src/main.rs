// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quotly - a Telegram bot for fetching and favoriting quotes.
//!
//! This is the binary entry point for the Quotly bot.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Quotly - a Telegram bot for fetching and favoriting quotes.
#[derive(Parser, Debug)]
#[command(name = "quotly", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Quotly bot.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match quotly_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            quotly_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("quotly: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("quotly: use --help for available commands");
        }
    }
}
