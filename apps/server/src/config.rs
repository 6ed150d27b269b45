use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Invalid BD_LOG_FORMAT '{}', expected text or json", other),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub log_format: LogFormat,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("BD_LISTEN_ADDR", "0.0.0.0:3000")
            .parse()
            .context("Invalid BD_LISTEN_ADDR")?;
        let db_path = env_or("BD_DB_PATH", "./db/dashboard.db");
        let cors_allow = env_or("BD_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("BD_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid BD_REQUEST_TIMEOUT_MS")?;
        let static_dir = env_or("BD_STATIC_DIR", "public");
        let log_format = env_or("BD_LOG_FORMAT", "text").parse()?;
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            log_format,
        })
    }
}
