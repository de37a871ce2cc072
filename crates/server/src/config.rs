//! Server configuration from command-line flags and environment variables.

use std::path::PathBuf;

use clap::Parser;

/// Golden Raspberry Awards REST API
#[derive(Debug, Clone, Parser)]
#[command(name = "razzies-server")]
#[command(about = "REST API over Golden Raspberry Awards nominees and winners", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to the `;`-delimited award list loaded at startup
    #[arg(short, long, env = "DATA_PATH", default_value = "data/movielist.csv")]
    pub data: PathBuf,
}

impl ServerConfig {
    /// `host:port`, resolved when the listener binds
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
