use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Arc::new(Args::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("krishiseer={}", args.log_level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = application::http::server::http_server::state(args.clone()).await?;
    let router = application::http::server::http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server starting on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
