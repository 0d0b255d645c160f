use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lw")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the log ingestion and viewer server.
    Serve,
    /// Print the OpenAPI document to stdout.
    Openapi,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => {
            lw_serve::openapi::ensure_initialized();
            let db_path =
                std::env::var("LOGWELL_DB_PATH").unwrap_or_else(|_| ".logwell/logs.db".to_string());
            if let Some(parent) = Path::new(&db_path).parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let port = std::env::var("LOGWELL_PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(4877);
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
            let state = lw_serve::AppState::new(db_path);
            tracing::info!(%addr, "listening");
            if let Err(err) = lw_serve::serve(state, addr).await {
                tracing::error!(error = %err, "serve failed");
            }
        }
        Command::Openapi => {
            println!("{}", lw_serve::openapi::generate_spec());
        }
    }
}
