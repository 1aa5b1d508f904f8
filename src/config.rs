use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub store_host: String,
    pub store_port: u16,
    pub store_db: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "80".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let store_host = env::var("STORE_HOST")
            .context("STORE_HOST environment variable is required")?;

        let store_port = env::var("STORE_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("STORE_PORT must be a valid port number (0-65535)")?;

        let store_db = env::var("STORE_DB")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<i64>()
            .context("STORE_DB must be an integer database index")?;

        Ok(Config {
            service_port,
            service_host,
            store_host,
            store_port,
            store_db,
        })
    }

    /// Connection URL for the backing Redis instance
    pub fn store_url(&self) -> String {
        format!("redis://{}:{}/{}", self.store_host, self.store_port, self.store_db)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store: {}:{} (db {})", self.store_host, self.store_port, self.store_db);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
