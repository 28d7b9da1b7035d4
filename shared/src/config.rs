use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: required_var("DATABASE_HOST")?,
            port: required_var("DATABASE_PORT")?
                .parse::<u16>()
                .context("DATABASE_PORT must be a port number")?,
            username: required_var("DATABASE_USERNAME")?,
            password: required_var("DATABASE_PASSWORD")?,
            database: required_var("DATABASE_NAME")?,
        };
        Ok(Self { database })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

fn required_var(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("environment variable {key} is not set"))
}
