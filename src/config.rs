use std::env;
use std::fmt;

use anyhow::anyhow;

use crate::gemini::DEFAULT_MODEL;

/// Application configuration, read from the environment once at startup
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| anyhow!("GEMINI_API_KEY not set"))?;
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| anyhow!("PORT must be a valid number"))?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

// The configuration gets logged at startup, so Debug must not print the key.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("gemini_api_key", &"[REDACTED]")
            .field("gemini_model", &self.gemini_model)
            .finish()
    }
}
