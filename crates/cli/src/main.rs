use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flavors_core::ServerConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "flavors")]
#[command(about = "Ice cream flavors REST API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DbArgs {
    /// PostgreSQL connection string [env: DATABASE_URL]
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset and seed the flavors table, then serve the HTTP API
    Serve {
        /// Listening port [env: PORT, default: 3000]
        #[arg(short, long)]
        port: Option<u16>,
        /// Listening address [env: HOST, default: 0.0.0.0]
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Keep flavors in process memory instead of PostgreSQL
        #[arg(long, conflicts_with = "database_url")]
        in_memory: bool,
        #[command(flatten)]
        db: DbArgs,
    },
    /// Reset and seed the flavors table, then exit
    Seed {
        #[command(flatten)]
        db: DbArgs,
    },
    /// Print all flavors as JSON, newest first
    List {
        #[command(flatten)]
        db: DbArgs,
    },
}

/// Environment first, then command-line flags on top.
fn resolve_config(db: DbArgs, port: Option<u16>, host: Option<String>) -> ServerConfig {
    let mut config = ServerConfig::from_env();
    if let Some(url) = db.database_url {
        config.database_url = url;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, in_memory, db } => {
            commands::serve::run(resolve_config(db, port, host), in_memory).await?;
        },
        Commands::Seed { db } => {
            commands::seed::run_seed(&resolve_config(db, None, None)).await?;
        },
        Commands::List { db } => {
            commands::seed::run_list(&resolve_config(db, None, None)).await?;
        },
    }

    Ok(())
}
