//! CLI module for upmon
//!
//! Provides the command-line interface. The listen port is mandatory; clap
//! prints usage and exits when it is missing.

use clap::Parser;

/// upmon - minimal uptime monitor for HTTP(S) endpoints
#[derive(Parser, Debug, Clone)]
#[command(name = "upmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    UPMON_PORT                Listen port (same as --port)
    UPMON_HOST                Bind address (default: 0.0.0.0)
    UPMON_DATA_DIR            Directory holding services.json
    UPMON_CHECK_TIMEOUT_SECS  Health check timeout in seconds (default: 10)
    UPMON_LOG_LEVEL           Log filter (default: info, falls back to RUST_LOG)
"#)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, env = "UPMON_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "UPMON_HOST")]
    pub host: String,
}

impl Cli {
    /// `host:port`形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
