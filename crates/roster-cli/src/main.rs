//! CLI entry point for the Roster employment graph console.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use roster_graph::{GraphClient, GraphConfig};

mod console;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "CRUD console and visualization for a Neo4j employment graph")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: roster).
    #[arg(short, long, default_value = "roster")]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive CRUD console (the default).
    Console,
    /// Render the employment subgraph once and exit.
    Visualize {
        /// Output DOT file.
        #[arg(short, long, default_value = "employment.dot")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the menu on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let graph_config = load_graph_config(&cli.config);
    tracing::debug!(uri = %graph_config.uri, user = %graph_config.user, "Loaded graph configuration");
    let client = GraphClient::connect(&graph_config).await?;

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            tracing::info!("Starting interactive console");
            console::run(&client).await?;
        }
        Command::Visualize { ref output } => console::visualize(&client, output).await?,
    }

    // The connection pool is released when `client` drops here.
    tracing::debug!("Shutting down");
    Ok(())
}

fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| "neo4j".to_string()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| "roster-dev".to_string()),
            ..Default::default()
        },
        Err(_) => GraphConfig::default(),
    }
}
