use std::env;
use std::str::FromStr;

use anyhow::Context;

/// List endpoint page-size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_per_page: 20, max_per_page: 100 }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the object storage service, e.g. `https://xyz.supabase.co`.
    pub storage_url: Option<String>,
    pub pagination: PaginationConfig,
}

impl Config {
    /// Reads `.env` (if present) and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which returns the raw value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PaginationConfig::default();
        let default_per_page = parse_var(&lookup, "DEFAULT_PER_PAGE", defaults.default_per_page)?;
        let max_per_page = parse_var(&lookup, "MAX_PER_PAGE", defaults.max_per_page)?;
        if default_per_page == 0 || max_per_page == 0 {
            anyhow::bail!("DEFAULT_PER_PAGE and MAX_PER_PAGE must be positive");
        }

        Ok(Self {
            port: parse_var(&lookup, "PORT", 3000)?,
            storage_url: lookup("STORAGE_URL").filter(|s| !s.trim().is_empty()),
            pagination: PaginationConfig {
                default_per_page: default_per_page.min(max_per_page),
                max_per_page,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().with_context(|| format!("{} must be a valid number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
