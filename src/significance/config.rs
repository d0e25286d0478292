use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_CONFIDENCE_THRESHOLD_PCT: f64 = 95.0;
pub const CONFIDENCE_THRESHOLD_ENV: &str = "SIGNIFICANCE_CONFIDENCE_THRESHOLD";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignificanceConfig {
    /// A report is significant when its confidence is at or above this percent.
    pub confidence_threshold_pct: f64,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        SignificanceConfig {
            confidence_threshold_pct: DEFAULT_CONFIDENCE_THRESHOLD_PCT,
        }
    }
}

impl SignificanceConfig {
    pub fn new(confidence_threshold_pct: f64) -> Result<Self, ConfigError> {
        let config = SignificanceConfig {
            confidence_threshold_pct,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads the threshold from the environment, falling back to the default
    /// when the variable is unset, unparsable, or out of range.
    pub fn from_env() -> Self {
        env::var(CONFIDENCE_THRESHOLD_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .and_then(|threshold| match Self::new(threshold) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("{}: ignoring {}, using default", e, CONFIDENCE_THRESHOLD_ENV);
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.confidence_threshold_pct;
        if !(t > 0.0 && t <= 100.0) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }
}
