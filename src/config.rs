//! Configuration management for the front end

use log::LevelFilter;

use crate::error::{FrontendError, Result};

/// Origin the optimizer API listens on when nothing else is configured
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:5000";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Front end configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Origin of the optimizer API, without trailing slash
    pub api_origin: String,

    /// Prefix for the leftover cash amount
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Load configuration through a key lookup.
    ///
    /// In the browser the lookup reads `window` globals set by the host page;
    /// missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            environment: lookup("PORTFOLIO_ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: lookup("PORTFOLIO_LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.log_level),

            api_origin: lookup("PORTFOLIO_API_ORIGIN")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_origin),

            currency_symbol: lookup("PORTFOLIO_CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let origin = reqwest::Url::parse(&self.api_origin).map_err(|e| {
            FrontendError::Config(format!("api_origin {:?} is not a URL: {e}", self.api_origin))
        })?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(FrontendError::Config(format!(
                "api_origin must use http or https, got {}",
                origin.scheme()
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(FrontendError::Config(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(FrontendError::Config("currency_symbol must not be empty".into()));
        }
        Ok(())
    }

    /// Log filter for the configured level
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_filter(), LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORTFOLIO_API_ORIGIN", " https://optimizer.example.com/ "),
            ("PORTFOLIO_LOG_LEVEL", "DEBUG"),
            ("PORTFOLIO_CURRENCY_SYMBOL", "€"),
        ]))
        .unwrap();

        assert_eq!(config.api_origin, "https://optimizer.example.com");
        assert_eq!(config.log_filter(), LevelFilter::Debug);
        assert_eq!(config.currency_symbol, "€");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_origin() {
        let config = Config::from_lookup(lookup_from(&[("PORTFOLIO_API_ORIGIN", "ftp://host")]))
            .unwrap();
        assert!(matches!(config.validate(), Err(FrontendError::Config(_))));

        let config = Config::from_lookup(lookup_from(&[("PORTFOLIO_API_ORIGIN", "not a url")]))
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let config =
            Config::from_lookup(lookup_from(&[("PORTFOLIO_LOG_LEVEL", "verbose")])).unwrap();
        assert!(config.validate().is_err());
    }
}
