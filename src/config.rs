use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEVELOPMENT: &str = "development";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub email_user: String,
    pub email_pass: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
    #[serde(default)]
    pub smtp_username: Option<String>,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

const fn default_port() -> u16 {
    3000
}

fn default_app_env() -> String {
    "production".to_string()
}

fn default_smtp_relay() -> String {
    "smtp.gmail.com".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

impl Config {
    /// Raw error detail is only exposed to clients in development mode.
    pub fn exposes_error_detail(&self) -> bool {
        self.app_env == DEVELOPMENT
    }

    /// Username used to authenticate with the relay, the sender address unless overridden.
    pub fn smtp_username(&self) -> &str {
        self.smtp_username.as_deref().unwrap_or(&self.email_user)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error(
        "Config file not found and environment variables are incomplete. \
         Tried: '{tried}' and environment variables. Error: {source}"
    )]
    Env { tried: String, source: envy::Error },
}

fn load_from_file(path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    from_yaml(path, &contents)
}

fn from_yaml(path: &str, contents: &str) -> Result<Config, ConfigError> {
    serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn load_config() -> Result<Config, ConfigError> {
    // Pick up a local .env file if there is one
    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded environment from '{}'", path.display());
    }

    // Retrieve env variable
    let config_path =
        env::var("MAIL_SERVICE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try config file
    if Path::new(&config_path).exists() {
        tracing::info!("Loading configuration from '{}'", config_path);
        return load_from_file(&config_path);
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    from_env_vars(config_path, env::vars())
}

fn from_env_vars<I>(tried: String, vars: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::from_iter(vars).map_err(|source| ConfigError::Env { tried, source })
}
