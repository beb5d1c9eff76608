//! Cinegraph CLI - GraphQL API over movies and directors.
//!
//! Usage:
//!   cinegraph serve                          # Serve with defaults (127.0.0.1:3005)
//!   cinegraph serve --bind 0.0.0.0:8080      # Override the bind address
//!   cinegraph serve --data store.json        # Persist to a snapshot file
//!   cinegraph --config cinegraph.toml serve  # Load settings from a file
//!   cinegraph schema                         # Print the SDL and exit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use cinegraph::{build_schema, server, Config, Store};

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Cinegraph - GraphQL API over movies and directors", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Socket address to bind (overrides config file)
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Snapshot file path (overrides config file)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Disable the interactive playground on GET /graphql
        #[arg(long)]
        no_playground: bool,
    },

    /// Print the schema SDL to stdout
    Schema,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinegraph=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Serve {
            bind,
            data,
            no_playground,
        } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(data) = data {
                config.data = Some(data);
            }
            if no_playground {
                config.playground = false;
            }

            let store = match &config.data {
                Some(path) => Store::open(path)?,
                None => Store::in_memory(),
            };

            server::serve(&config, Arc::new(store)).await?;
        }

        Commands::Schema => {
            let schema = build_schema(Arc::new(Store::in_memory()));
            println!("{}", schema.sdl());
        }
    }

    Ok(())
}
