// config.rs
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.odcloud.kr/api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Settings for the announcement API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Checked on every fetch, so a missing key shows up on the board
    /// instead of preventing startup.
    pub service_key: Option<String>,
    /// `perPage` sent upstream.
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Cards per rendered page.
    pub items_per_page: usize,
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", "127.0.0.1:3000".parse::<SocketAddr>().ok())?;
        let max_workers = non_zero(parse_or(&lookup, "MAX_WORKERS", Some(8usize))?, "MAX_WORKERS")?;
        let items_per_page = non_zero(
            parse_or(&lookup, "BOARD_ITEMS_PER_PAGE", Some(10usize))?,
            "BOARD_ITEMS_PER_PAGE",
        )?;
        let per_page = non_zero(
            parse_or(&lookup, "APPLYHOME_PER_PAGE", Some(1000u32))?,
            "APPLYHOME_PER_PAGE",
        )?;

        let base_url = lookup("APPLYHOME_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let service_key = lookup("APPLYHOME_SERVICE_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            bind_addr,
            max_workers,
            items_per_page,
            api: ApiConfig {
                base_url,
                service_key,
                per_page,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        _ => default.ok_or(ConfigError::Invalid {
            var,
            value: String::new(),
        }),
    }
}

fn non_zero<T: Default + PartialEq>(value: T, var: &'static str) -> Result<T, ConfigError> {
    if value == T::default() {
        Err(ConfigError::Zero(var))
    } else {
        Ok(value)
    }
}
