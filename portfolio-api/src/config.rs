use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use strum::{Display, EnumString};

use crate::domain::search::SearchConfig;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

/// Tunables for global search. Every field falls back to the built-in default.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SearchSettings {
    pub per_kind_limit: u32,
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub cache_max_age_secs: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        let defaults = SearchConfig::default();
        Self {
            per_kind_limit: defaults.per_kind_limit,
            default_page_size: defaults.default_page_size,
            max_page_size: defaults.max_page_size,
            cache_max_age_secs: 30,
        }
    }
}

impl SearchSettings {
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            per_kind_limit: self.per_kind_limit,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            ..SearchConfig::default()
        }
    }
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
    #[error("Failed to parse APP_ENVIRONMENT: {0}")]
    Environment(#[from] strum::ParseError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub fn read_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
