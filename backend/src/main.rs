//! Backend entry-point: wires REST endpoints and OpenAPI docs.

mod server;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use server::ServerConfig;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "catalog-api", about = "Catalogue REST API server")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,
    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = ServerConfig::new(SocketAddr::new(cli.host, cli.port));
    server::run(&config)?.await
}
