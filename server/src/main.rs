use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{logging, Config};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    logging::init_tracing(config.log_filter.as_deref());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    todo_server::run_until(listener, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for ctrl-c, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down gracefully");
}
