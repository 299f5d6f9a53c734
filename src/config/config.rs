use crate::core::engine::DEFAULT_EPSILON;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub settlement_epsilon: Decimal,
    pub summary_cache_ttl_secs: u64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Unset or unparsable values fall back to defaults.
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            settlement_epsilon: lookup("SETTLEMENT_EPSILON")
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .map(|eps| eps.abs())
                .unwrap_or(DEFAULT_EPSILON),
            summary_cache_ttl_secs: lookup("SUMMARY_CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.settlement_epsilon, dec!(0.01));
        assert_eq!(config.summary_cache_ttl_secs, 300);
    }

    #[test]
    fn reads_values_and_ignores_garbage() {
        let vars = HashMap::from([
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("SETTLEMENT_EPSILON", " 0.5 "),
            ("SUMMARY_CACHE_TTL_SECS", "soon"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.settlement_epsilon, dec!(0.5));
        assert_eq!(config.summary_cache_ttl_secs, 300);
    }
}
