//! polyglot-admin server binary

#![allow(missing_docs)]

use clap::Parser;
use polyglot_admin::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Multi-lingual user administration server
#[derive(Debug, Parser)]
#[command(name = "admin-server", version, about)]
struct Args {
    /// Configuration file; environment variables are used when it is missing
    #[arg(short, long, env = "ADMIN_CONFIG", default_value = "config/admin.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match server::run_server(&args.config, args.host, args.port).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
