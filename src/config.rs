use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_DB_NAME: &str = "100days";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongo_uri =
            env::var("MONGO_URI").context("MONGO_URI must be set (or provided via .env)")?;
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        Ok(Self { mongo_uri, db_name })
    }
}
