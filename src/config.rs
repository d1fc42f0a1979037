use secrecy::SecretString;
use std::{env, time::Duration};

use crate::errors::PlanError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE: &str = "Planago";
const PLACES_BASE_URL: &str = "https://places.googleapis.com";
const PLACES_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: SecretString,
    pub database: String,
    /// Shared secret used to verify tokens issued by the auth provider.
    pub jwt_secret: SecretString,
    pub places: PlacesConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PlanError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// optional settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| PlanError::Config(format!("{} must be set", key)))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{}', using {}", raw, PORT);
                PORT
            }),
            None => PORT,
        };

        let timeout_secs = lookup("PLACES_TIMEOUT_SECS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(PLACES_TIMEOUT_SECS);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            mongo_uri: required("MONGODB_URI")?.into(),
            database: lookup("MONGODB_DATABASE").unwrap_or_else(|| DATABASE.to_string()),
            jwt_secret: required("JWT_SECRET")?.into(),
            places: PlacesConfig {
                api_key: required("GOOGLE_PLACES_API_KEY")?.into(),
                base_url: lookup("GOOGLE_PLACES_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| PLACES_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
