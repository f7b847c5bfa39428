//! Command-line and environment configuration.

use clap::Parser;

/// Runtime settings for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", version, about = "HTTP API for named to-do lists")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter directives, e.g. "todo_server=debug" (falls back to RUST_LOG)
    #[arg(long, env = "TODO_LOG")]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
