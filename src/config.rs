// src/config.rs
use crate::infrastructure::content::SanityConfig;
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    app_env: String,
    sanity_project_id: String,
    sanity_dataset: String,
    sanity_api_version: String,
    sanity_use_cdn: bool,
    sanity_api_token: Option<String>,
    sanity_api_host: Option<Url>,
    regenerate_after: Duration,
    prerender_on_start: bool,
    content_timeout: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2021-03-25";
const DEFAULT_REGENERATE_AFTER_SECS: u64 = 3600;
const DEFAULT_CONTENT_TIMEOUT_SECS: u64 = 10;

impl AppConfig {
    /// Build configuration from environment variables. Optional values fall
    /// back to defaults; malformed values are rejected rather than ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let app_env = get("APP_ENV").unwrap_or_else(|| "development".into());

        let sanity_project_id =
            get("SANITY_PROJECT_ID").ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?;
        if !sanity_project_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Invalid(
                "SANITY_PROJECT_ID may only contain letters, digits and '-'".into(),
            ));
        }

        let sanity_dataset = get("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.into());
        let sanity_api_version =
            get("SANITY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.into());
        let sanity_use_cdn = match get("SANITY_USE_CDN") {
            Some(raw) => parse_bool("SANITY_USE_CDN", &raw)?,
            None => app_env == "production",
        };
        let sanity_api_token = get("SANITY_API_TOKEN");
        let sanity_api_host = get("SANITY_API_HOST")
            .map(|raw| {
                Url::parse(&raw)
                    .map_err(|err| ConfigError::Invalid(format!("SANITY_API_HOST: {err}")))
            })
            .transpose()?;

        let regenerate_after_secs =
            parse_secs(&get, "REGENERATE_AFTER_SECS", DEFAULT_REGENERATE_AFTER_SECS)?;
        let prerender_on_start = get("PRERENDER_ON_START")
            .map(|raw| parse_bool("PRERENDER_ON_START", &raw))
            .transpose()?
            .unwrap_or(true);
        let content_timeout_secs =
            parse_secs(&get, "CONTENT_TIMEOUT_SECS", DEFAULT_CONTENT_TIMEOUT_SECS)?;

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            app_env,
            sanity_project_id,
            sanity_dataset,
            sanity_api_version,
            sanity_use_cdn,
            sanity_api_token,
            sanity_api_host,
            regenerate_after: Duration::from_secs(regenerate_after_secs),
            prerender_on_start,
            content_timeout: Duration::from_secs(content_timeout_secs),
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn app_env(&self) -> &str {
        &self.app_env
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    pub fn sanity_project_id(&self) -> &str {
        &self.sanity_project_id
    }

    pub fn sanity_dataset(&self) -> &str {
        &self.sanity_dataset
    }

    pub const fn sanity_use_cdn(&self) -> bool {
        self.sanity_use_cdn
    }

    pub const fn has_write_token(&self) -> bool {
        self.sanity_api_token.is_some()
    }

    /// Staleness window for cached article pages.
    pub const fn regenerate_after(&self) -> Duration {
        self.regenerate_after
    }

    pub const fn prerender_on_start(&self) -> bool {
        self.prerender_on_start
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Client settings for the content store.
    pub fn sanity_config(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.sanity_project_id.clone(),
            dataset: self.sanity_dataset.clone(),
            api_version: self.sanity_api_version.clone(),
            use_cdn: self.sanity_use_cdn,
            token: self.sanity_api_token.clone(),
            timeout: self.content_timeout,
            api_host: self.sanity_api_host.clone(),
        }
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}

fn parse_secs<G>(get: &G, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let Some(raw) = get(key) else {
        return Ok(default);
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid(format!("{key} must be greater than zero"))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(ConfigError::Invalid(format!(
            "{key} must be a whole number of seconds, got '{raw}'"
        ))),
    }
}
