use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::board::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite URL for saved jobs and alerts. Unset means an in-memory store.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub items_per_page: usize,
    pub share_base_url: String,
    /// Optional JSON file replacing the built-in listings.
    pub jobs_seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let items_per_page = match std::env::var("ITEMS_PER_PAGE") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("ITEMS_PER_PAGE must be a positive integer")?,
            Err(_) => DEFAULT_ITEMS_PER_PAGE,
        };
        if items_per_page == 0 {
            bail!("ITEMS_PER_PAGE must be at least 1");
        }

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            items_per_page,
            share_base_url: std::env::var("SHARE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/jobs".to_string()),
            jobs_seed_path: std::env::var("JOBS_SEED_PATH").ok().map(PathBuf::from),
        })
    }
}
