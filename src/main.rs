//! Contacts GraphQL Server
//!
//! Serves an in-memory contact list over GraphQL.

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contacts_server::config::{Args, Config};
use contacts_server::error::Result;
use contacts_server::service::ContactService;
use contacts_server::VERSION;

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Args::parse().into();

    // Initialize logging; RUST_LOG wins over --debug
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Contacts GraphQL Server v{}", VERSION);

    let service = if config.seed {
        ContactService::seeded()
    } else {
        ContactService::empty()
    };
    info!("Contact list ready: {} persons", service.count().await);

    contacts_server::http::start_server(&config, Arc::new(service)).await
}
