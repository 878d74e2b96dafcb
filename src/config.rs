// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    content_dir: PathBuf,
    service_catalog_path: PathBuf,
    allowed_origins: Vec<String>,
    rate_limit: Option<RateLimitSettings>,
}

/// Per-client token bucket applied to the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst_size: 20,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_service_catalog_path() -> PathBuf {
    PathBuf::from("config/services.yaml")
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let content_dir = env::var("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_content_dir());
        let service_catalog_path = env::var("SERVICE_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_service_catalog_path());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let rate_limit = if rate_limit_enabled {
            let defaults = RateLimitSettings::default();
            let per_second = parse_optional("RATE_LIMIT_PER_SECOND")?
                .unwrap_or(defaults.per_second);
            let burst_size =
                parse_optional("RATE_LIMIT_BURST")?.unwrap_or(defaults.burst_size);
            if per_second == 0 || burst_size == 0 {
                return Err(ConfigError::Invalid(
                    "rate limit values must be positive".into(),
                ));
            }
            Some(RateLimitSettings {
                per_second,
                burst_size,
            })
        } else {
            None
        };

        Ok(Self {
            listen_addr,
            content_dir,
            service_catalog_path,
            allowed_origins,
            rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn content_dir(&self) -> &PathBuf {
        &self.content_dir
    }

    pub fn service_catalog_path(&self) -> &PathBuf {
        &self.service_catalog_path
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn rate_limit(&self) -> Option<RateLimitSettings> {
        self.rate_limit
    }
}

fn parse_optional<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Invalid(format!("{key} is not valid unicode")))
        }
    }
}
