//! Order form configuration with fail-closed defaults.
//!
//! Every parameter has a documented default that applies when the value is
//! missing. A value that is present but unusable (non-finite, negative, out
//! of range) is rejected rather than silently replaced.

use std::path::Path;
use std::str::FromStr;

use order_entry_core::form::FormConfig;
use order_entry_core::numeric::Precision;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Largest display precision accepted for either asset.
pub const MAX_DECIMALS: f64 = 18.0;

/// Tunable order-form parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    FeeRate,
    QuoteDecimals,
    BaseDecimals,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config fail-closed: '{param_name}' is missing and has no default ({reason})")]
    Missing {
        param_name: &'static str,
        reason: &'static str,
    },
    #[error("config fail-closed: '{param_name}' is invalid ({reason})")]
    Invalid {
        param_name: &'static str,
        reason: &'static str,
    },
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Default for a parameter, or `None` when it must be supplied.
pub fn param_default(param: ConfigParam) -> Option<f64> {
    match param {
        ConfigParam::FeeRate => Some(0.001),
        ConfigParam::QuoteDecimals => Some(2.0),
        ConfigParam::BaseDecimals => Some(8.0),
    }
}

pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::FeeRate => "fee_rate",
        ConfigParam::QuoteDecimals => "quote_decimals",
        ConfigParam::BaseDecimals => "base_decimals",
    }
}

/// Expected number of `ConfigParam` variants; bump alongside `ALL_PARAMS`.
pub const EXPECTED_PARAM_COUNT: usize = 3;

pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::FeeRate,
    ConfigParam::QuoteDecimals,
    ConfigParam::BaseDecimals,
];

/// Resolve a parameter value.
///
/// - `Some(v)` wins when it passes the parameter's range check.
/// - `None` falls back to the default.
/// - `None` without a default is `Err(Missing)`.
pub fn resolve_config_value(param: ConfigParam, value: Option<f64>) -> Result<f64, ConfigError> {
    let name = param_name(param);
    let Some(v) = value else {
        return param_default(param).ok_or(ConfigError::Missing {
            param_name: name,
            reason: "no default; caller must fail-closed",
        });
    };
    if !v.is_finite() {
        return Err(ConfigError::Invalid {
            param_name: name,
            reason: "value is non-finite (NaN or Infinity)",
        });
    }
    if v < 0.0 {
        return Err(ConfigError::Invalid {
            param_name: name,
            reason: "value is negative",
        });
    }
    match param {
        ConfigParam::FeeRate if v >= 1.0 => Err(ConfigError::Invalid {
            param_name: name,
            reason: "fee rate must be below 1.0",
        }),
        ConfigParam::QuoteDecimals | ConfigParam::BaseDecimals
            if v.fract() != 0.0 || v > MAX_DECIMALS =>
        {
            Err(ConfigError::Invalid {
                param_name: name,
                reason: "decimals must be a whole number no greater than 18",
            })
        }
        _ => Ok(v),
    }
}

// ─── Settings file ──────────────────────────────────────────────────────

/// Order form settings as loaded from JSON. Every field is optional.
///
/// ```json
/// { "fee_rate": 0.001, "quote_decimals": 2, "base_decimals": 8,
///   "place_order_base_url": "https://api.example.com" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormSettings {
    #[serde(default)]
    pub fee_rate: Option<f64>,
    #[serde(default)]
    pub quote_decimals: Option<f64>,
    #[serde(default)]
    pub base_decimals: Option<f64>,
    #[serde(default)]
    pub place_order_base_url: Option<String>,
}

impl FormSettings {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Resolve into the core form configuration.
    pub fn form_config(&self) -> Result<FormConfig, ConfigError> {
        let fee_rate = resolve_config_value(ConfigParam::FeeRate, self.fee_rate)?;
        let quote_dp = resolve_config_value(ConfigParam::QuoteDecimals, self.quote_decimals)?;
        let base_dp = resolve_config_value(ConfigParam::BaseDecimals, self.base_decimals)?;

        // f64 Display is the shortest round-trip form, so 0.001 stays exact.
        let fee_rate = Decimal::from_str(&fee_rate.to_string()).map_err(|_| {
            ConfigError::Invalid {
                param_name: param_name(ConfigParam::FeeRate),
                reason: "not representable as a decimal",
            }
        })?;

        let config = FormConfig {
            fee_rate,
            precision: Precision {
                quote_dp: quote_dp as u32,
                base_dp: base_dp as u32,
            },
        };
        tracing::debug!(
            fee_rate = %config.fee_rate,
            quote_dp = config.precision.quote_dp,
            base_dp = config.precision.base_dp,
            "resolved order form config"
        );
        Ok(config)
    }

    /// Base URL of the order-placement service. No default: missing is an error.
    pub fn place_order_base_url(&self) -> Result<&str, ConfigError> {
        match self.place_order_base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(ConfigError::Missing {
                param_name: "place_order_base_url",
                reason: "placement endpoint has no default",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_params_have_defaults() {
        for &param in ALL_PARAMS {
            assert!(
                param_default(param).is_some(),
                "ConfigParam::{:?} ({}) missing from param_default()",
                param,
                param_name(param),
            );
        }
    }

    #[test]
    fn all_params_listed_in_constant() {
        assert_eq!(ALL_PARAMS.len(), EXPECTED_PARAM_COUNT);
        let mut names: Vec<&str> = ALL_PARAMS.iter().map(|&p| param_name(p)).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL_PARAMS.len(), "ALL_PARAMS has duplicates");
    }
}
