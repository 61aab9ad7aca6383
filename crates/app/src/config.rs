//! Environment-driven configuration.

use core::fmt;
use core::str::FromStr;

use storefront_cart::QuantityPolicy;
use storefront_observability::LogFormat;
use storefront_observability::tracing::LOG_FORMAT_ENV;

pub const QUANTITY_POLICY_ENV: &str = "STOREFRONT_QUANTITY_POLICY";

/// A variable that was set to something unusable and replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFallback {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
    pub using: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub quantity_policy: QuantityPolicy,
    pub log_format: LogFormat,
    /// Reported by [`StorefrontConfig::log_fallbacks`]; config is read before
    /// a subscriber exists, so nothing is logged while parsing.
    pub fallbacks: Vec<ConfigFallback>,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unknown values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut fallbacks = Vec::new();
        let quantity_policy = parse_or_default(&lookup, QUANTITY_POLICY_ENV, &mut fallbacks);
        let log_format = parse_or_default(&lookup, LOG_FORMAT_ENV, &mut fallbacks);

        Self {
            quantity_policy,
            log_format,
            fallbacks,
        }
    }

    /// Warn about every value that was ignored. Call after tracing is up.
    pub fn log_fallbacks(&self) {
        for fallback in &self.fallbacks {
            tracing::warn!(
                value = %fallback.value,
                error = %fallback.reason,
                "{} not understood; using {}",
                fallback.key,
                fallback.using
            );
        }
    }
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    fallbacks: &mut Vec<ConfigFallback>,
) -> T
where
    T: FromStr + Default + fmt::Display,
    T::Err: fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return T::default();
    };

    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            let value = T::default();
            fallbacks.push(ConfigFallback {
                key,
                reason: err.to_string(),
                using: value.to_string(),
                value: raw,
            });
            value
        }
    }
}
