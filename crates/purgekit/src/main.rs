mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "purgekit")]
#[command(about = "Cloudflare cache management for the configured zone", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Purge the Cloudflare cache
    Purge {
        /// Purge all cached files (default when no scope is given)
        #[arg(long)]
        everything: bool,
        /// URL to purge (repeatable)
        #[arg(short = 'f', long = "file", value_name = "URL")]
        files: Vec<String>,
        /// Cache tag to purge (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Hostname to purge (repeatable)
        #[arg(long = "host", value_name = "HOST")]
        hosts: Vec<String>,
    },
    /// Show information about the configured zone
    Zone,
    /// Show or toggle development mode (cache bypass)
    DevMode {
        /// on | off; omit to show the current setting
        state: Option<commands::devmode::DevModeState>,
    },
    /// List the cache-management abilities and their annotations
    Abilities,
    /// Run the MCP server (stdio transport)
    Mcp,
    /// Print version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries JSON-RPC for the MCP command, so logs go to a file
    if matches!(cli.command, Commands::Mcp) {
        use std::fs::OpenOptions;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/purgekit-mcp.log")
            .ok();

        if let Some(file) = log_file {
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::DEBUG.into()),
                )
                .with_ansi(false)
                .init();
        }

        return purgekit_mcp::run_server().await;
    }

    tracing_subscriber::fmt::init();

    if matches!(cli.command, Commands::Version) {
        println!("purgekit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match cli.command {
        Commands::Purge {
            everything,
            files,
            tags,
            hosts,
        } => commands::purge::handle(everything, files, tags, hosts).await,
        Commands::Zone => commands::zone::handle().await,
        Commands::DevMode { state } => commands::devmode::handle(state).await,
        Commands::Abilities => commands::abilities::handle(),
        Commands::Mcp | Commands::Version => unreachable!(),
    }
}
