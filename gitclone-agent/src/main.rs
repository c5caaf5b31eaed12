//! Gitclone Agent - clones GitHub repositories and checks out the
//! branch for a specific pull request on request.

mod commands;
mod listener;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gitclone_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::CheckoutArgs;

/// Gitclone: PR checkout agent
#[derive(Parser, Debug)]
#[command(name = "gitclone-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Root directory for local clones (overrides config and env)
    #[arg(long, global = true, env = "GITCLONE_WORKDIR")]
    workdir: Option<PathBuf>,

    /// Agent identity announced to the bus (overrides config and env)
    #[arg(long, global = true, env = "GITCLONE_AGENT_ID")]
    agent_id: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Run the agent worker loop over stdin/stdout
    Run,

    /// Check out a single pull request and print its path
    #[command(visible_alias = "co")]
    Checkout(CheckoutArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.workdir.clone(), cli.agent_id.clone())?;

    if cli.verbose {
        tracing::info!(
            agent_id = %config.agent.agent_id,
            remote_base = %config.agent.remote_base,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("gitclone-agent {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Run) => {
            commands::run::execute(&config).await?;
        }
        Some(Commands::Checkout(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("Gitclone Configuration");
            println!("======================");
            println!();
            println!("Agent Settings:");
            println!("  agent_id: {}", config.agent.agent_id);
            println!("  workdir: {}", config.resolve_workdir()?.display());
            println!("  remote_base: {}", config.agent.remote_base);
            println!();
            println!("Worker Settings:");
            println!("  poll_timeout: {:?}", config.worker.poll_timeout);
            println!("  idle_delay: {:?}", config.worker.idle_delay);
            println!("  restart_delay: {:?}", config.worker.restart_delay);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Gitclone - PR checkout agent");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
