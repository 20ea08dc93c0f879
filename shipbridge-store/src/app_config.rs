use serde::Deserialize;
use std::env;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub carriers: CarriersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Full connection string. When empty the URL is assembled from the parts below.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                self.user, self.password, self.host, self.port, self.name, self.sslmode
            ),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CarriersConfig {
    /// Per-request timeout enforced by each carrier adapter
    pub timeout_seconds: u64,
    pub a: CarrierEndpoint,
    pub b: CarrierEndpoint,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CarrierEndpoint {
    pub endpoint: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::with_defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SHIPBRIDGE__SERVER__PORT=9090`
            .add_source(
                config::Environment::with_prefix("SHIPBRIDGE")
                    .separator("__")
                    .try_parsing(true),
            );
        let s = with_plain_env(builder, non_empty_env)?.build()?;

        s.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.port", 8080)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "postgres")?
            .set_default("database.name", "shipping")?
            .set_default("database.sslmode", "disable")?
            .set_default("database.max_connections", 5)?
            .set_default("carriers.timeout_seconds", 15)?
            .set_default("carriers.a.endpoint", "https://a.local/createShipping")?
            .set_default("carriers.b.endpoint", "https://b.local/createShipping")
    }
}

/// Plain variables used by the container setup, applied over every other source.
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("server.port", "PORT"),
    ("database.url", "DATABASE_URL"),
    ("database.host", "DB_HOST"),
    ("database.port", "DB_PORT"),
    ("database.user", "DB_USER"),
    ("database.password", "DB_PASSWORD"),
    ("database.name", "DB_NAME"),
    ("database.sslmode", "DB_SSLMODE"),
    ("carriers.a.endpoint", "PROVIDER_A_URL"),
    ("carriers.b.endpoint", "PROVIDER_B_URL"),
];

fn with_plain_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (key, var) in PLAIN_ENV_OVERRIDES {
        builder = builder.set_override_option(*key, lookup(*var))?;
    }
    Ok(builder)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
