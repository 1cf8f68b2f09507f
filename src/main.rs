//! route-shell
//!
//! Drives the meeting router from the command line, standing in for the
//! web-view host.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin ──▶ shell::command ──▶ shell::session ──▶ routing::router ──▶ stdout (JSON)
//!                                      │                   │
//!                                      ▼                   ▼
//!                             history::MemoryHistory ◀── fragment writes
//!
//!   config file ──▶ config::loader ──▶ lifecycle::startup ──▶ routing::table
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use meeting_router::lifecycle::{signals, startup, Shutdown};
use meeting_router::observability::init_logging;
use meeting_router::routing::RouteTable;
use meeting_router::shell::Session;

#[derive(Parser)]
#[command(name = "route-shell")]
#[command(about = "Drive the meeting router from the command line", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Built-in routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print the route table
    Routes,
    /// Read navigation commands from stdin
    Run {
        /// Fragment the history starts from, overriding the config
        #[arg(short, long)]
        fragment: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = startup::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability);

    tracing::info!("route-shell v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Routes => {
            let table = RouteTable::from_config(&config.routes)?;
            let routes: Vec<_> = table.routes().collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Run { fragment } => {
            if let Some(fragment) = fragment {
                config.router.initial_fragment = fragment;
            }

            let started = startup::start(&config)?;
            let shutdown = Shutdown::new();
            let _interrupt = signals::listen_for_interrupt(shutdown.clone());

            let mut session = Session::new(started.router, started.history);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let handled = session
                .run(input, tokio::io::stdout(), shutdown.subscribe())
                .await?;

            tracing::info!(handled, "Shell finished");
        }
    }

    Ok(())
}
