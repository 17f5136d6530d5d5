//! Application Configuration
//!
//! Backend settings in the shape of an Amplify `aws-exports` object, read
//! from `window.__NOTES_CONFIG__` or baked in at build time.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the host page assigns the config object to
pub const CONFIG_GLOBAL: &str = "__NOTES_CONFIG__";

const SUPPORTED_AUTH: &str = "API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing config value: {0}")]
    Missing(&'static str),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub api_key: String,
    pub region: Option<String>,
    pub log_level: LevelFilter,
}

/// Unvalidated config as written by deployment tooling
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    endpoint: Option<String>,
    #[serde(rename = "aws_appsync_apiKey")]
    api_key: Option<String>,
    #[serde(rename = "aws_appsync_region")]
    region: Option<String>,
    #[serde(rename = "aws_appsync_authenticationType")]
    auth_type: Option<String>,
    #[serde(rename = "logLevel")]
    log_level: Option<String>,
}

impl RawConfig {
    fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("NOTES_GRAPHQL_ENDPOINT").map(str::to_string),
            api_key: option_env!("NOTES_API_KEY").map(str::to_string),
            region: option_env!("NOTES_REGION").map(str::to_string),
            auth_type: None,
            log_level: option_env!("NOTES_LOG_LEVEL").map(str::to_string),
        }
    }

    fn validate(self) -> Result<AppConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::Missing("aws_appsync_graphqlEndpoint"))?;
        if !endpoint.starts_with("http") {
            return Err(ConfigError::Invalid(format!("endpoint is not an http(s) URL: {}", endpoint)));
        }

        if let Some(auth) = self.auth_type.as_deref() {
            if auth != SUPPORTED_AUTH {
                return Err(ConfigError::Invalid(format!("unsupported authentication type: {}", auth)));
            }
        }

        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("aws_appsync_apiKey"))?;

        let log_level = match self.log_level.as_deref() {
            Some(level) => level
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("unknown log level: {}", level)))?,
            None => LevelFilter::Info,
        };

        Ok(AppConfig {
            endpoint,
            api_key,
            region: self.region,
            log_level,
        })
    }
}

impl AppConfig {
    /// Page global first, build-time env vars otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::from_window()? {
            Some(config) => Ok(config),
            None => RawConfig::from_build_env().validate(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        raw.validate()
    }

    fn from_window() -> Result<Option<Self>, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        let raw: RawConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        raw.validate().map(Some)
    }
}
