use serde::{Deserialize, Serialize};

use super::config::SignificanceConfig;
use super::input::parse_count;
use super::stats;
use crate::error::{Result, SignificanceError};

/// One arm of a test: how many visitors saw it and how many converted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SampleGroup {
    pub visitors: u64,
    pub conversions: u64,
}

impl SampleGroup {
    pub fn new(visitors: u64, conversions: u64) -> Self {
        Self {
            visitors,
            conversions,
        }
    }

    /// Builds a group from raw form text, clamping anything non-numeric or
    /// negative to zero.
    pub fn from_raw(visitors: &str, conversions: &str) -> Self {
        Self::new(parse_count(visitors), parse_count(conversions))
    }

    pub fn rate(&self) -> f64 {
        stats::proportion(self.conversions, self.visitors)
    }
}

/// Full-precision outcome of a control-vs-variant comparison.
///
/// `relative_improvement_pct` is infinite or NaN when the control rate is
/// zero, and `z_score`/`confidence_pct` are NaN when both arms have zero
/// variance at the same rate. These pass through unchanged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignificanceReport {
    pub control_rate: f64,
    pub variant_rate: f64,
    pub relative_improvement_pct: f64,
    pub z_score: f64,
    pub confidence_pct: f64,
    pub is_significant: bool,
}

pub type SignificanceResult = Result<SignificanceReport>;

#[derive(Clone, Copy, Debug, Default)]
pub struct SignificanceEngine {
    config: SignificanceConfig,
}

impl SignificanceEngine {
    pub fn new(config: SignificanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignificanceConfig {
        &self.config
    }

    pub fn evaluate(&self, control: SampleGroup, variant: SampleGroup) -> SignificanceResult {
        if let Err(e) = validate(&control, &variant) {
            tracing::debug!(
                kind = e.kind(),
                control_visitors = control.visitors,
                control_conversions = control.conversions,
                variant_visitors = variant.visitors,
                variant_conversions = variant.conversions,
                "rejected significance input"
            );
            return Err(e);
        }

        let control_rate = control.rate();
        let variant_rate = variant.rate();
        let relative_improvement_pct = (variant_rate - control_rate) / control_rate * 100.0;

        let control_se = stats::standard_error(control_rate, control.visitors);
        let variant_se = stats::standard_error(variant_rate, variant.visitors);
        let z_score = stats::z_score(control_rate, control_se, variant_rate, variant_se);

        let confidence_pct = stats::two_tailed_confidence_pct(z_score);
        let is_significant = confidence_pct >= self.config.confidence_threshold_pct;

        tracing::debug!(
            control_rate,
            variant_rate,
            z_score,
            confidence_pct,
            is_significant,
            "evaluated significance"
        );

        Ok(SignificanceReport {
            control_rate,
            variant_rate,
            relative_improvement_pct,
            z_score,
            confidence_pct,
            is_significant,
        })
    }
}

/// Evaluates with the default 95% threshold.
pub fn evaluate(control: SampleGroup, variant: SampleGroup) -> SignificanceResult {
    SignificanceEngine::default().evaluate(control, variant)
}

fn validate(control: &SampleGroup, variant: &SampleGroup) -> Result<()> {
    if control.visitors == 0 || variant.visitors == 0 {
        return Err(SignificanceError::ZeroVisitors);
    }
    if control.conversions > control.visitors || variant.conversions > variant.visitors {
        return Err(SignificanceError::ConversionsExceedVisitors);
    }
    Ok(())
}
