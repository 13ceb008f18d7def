use std::env;

use dotenv::dotenv;
use healthadvisor_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_URL_VAR: &str = "GEMINI_API_URL";
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set in the environment variables. Please add it to your .env file.")]
    MissingApiKey,
    #[error("Invalid port \"{0}\"")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty =
            |name: &str| lookup(name).filter(|value: &String| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let port = match non_empty(PORT_VAR) {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            client: ClientConfig {
                api_key,
                model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
                base_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            },
            bind_address: non_empty(BIND_ADDRESS_VAR)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned()),
            port,
        })
    }
}
