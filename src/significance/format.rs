use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::SignificanceConfig;
use super::engine::SignificanceReport;

/// Two-decimal rendering. Non-finite values print as `Infinity`,
/// `-Infinity` and `NaN`.
///
/// Exact ties round away from zero (`0.125` is `0.13`), unlike `{:.2}`
/// which rounds them to even.
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, round_half_up_2(value.abs()))
    }
}

/// Rounds a finite non-negative value to two decimals on its exact decimal
/// expansion. Every f64 at or above 0.005 expands in at most 60 fractional
/// digits, so the third digit and everything after it are exact.
fn round_half_up_2(value: f64) -> String {
    let exact = format!("{:.60}", value);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac.as_bytes();
    let frac_digit = |i: usize| frac.get(i).copied().unwrap_or(b'0');

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.push(frac_digit(0));
    digits.push(frac_digit(1));

    if frac_digit(2) >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let int_digits = String::from_utf8_lossy(&digits[..split]);
    let cents = String::from_utf8_lossy(&digits[split..]);
    format!("{}.{}", int_digits, cents)
}

pub fn format_percent(value_pct: f64) -> String {
    format!("{}%", format_fixed2(value_pct))
}

pub fn verdict(significant: bool, threshold_pct: f64) -> String {
    if significant {
        format!(
            "✓ Result is statistically significant ({}%+ confidence)",
            threshold_pct
        )
    } else {
        "⚠ Result is not statistically significant yet".to_string()
    }
}

/// Display-ready view of a [`SignificanceReport`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedReport {
    pub control_rate: String,
    pub variant_rate: String,
    pub improvement: String,
    pub confidence: String,
    pub z_score: String,
    pub significant: bool,
    pub verdict: String,
}

impl FormattedReport {
    pub fn new(report: &SignificanceReport, config: &SignificanceConfig) -> Self {
        Self {
            control_rate: format_percent(report.control_rate * 100.0),
            variant_rate: format_percent(report.variant_rate * 100.0),
            improvement: format_percent(report.relative_improvement_pct),
            confidence: format_percent(report.confidence_pct),
            z_score: format_fixed2(report.z_score),
            significant: report.is_significant,
            verdict: verdict(report.is_significant, config.confidence_threshold_pct),
        }
    }
}

impl fmt::Display for FormattedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control Rate:  {}", self.control_rate)?;
        writeln!(f, "Variant Rate:  {}", self.variant_rate)?;
        writeln!(f, "Improvement:   {}", self.improvement)?;
        writeln!(f, "Confidence:    {}", self.confidence)?;
        writeln!(f, "Z-Score:       {}", self.z_score)?;
        write!(f, "{}", self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::significance::engine::{evaluate, SampleGroup};

    fn formatted(cv: u64, cc: u64, vv: u64, vc: u64) -> FormattedReport {
        let report = evaluate(SampleGroup::new(cv, cc), SampleGroup::new(vv, vc)).unwrap();
        FormattedReport::new(&report, &SignificanceConfig::default())
    }

    // ── fixed-point rendering ───────────────────────────────────────────

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(format_fixed2(50.0), "50.00");
        assert_eq!(format_fixed2(1.0721125), "1.07");
        assert_eq!(format_fixed2(-3.14159), "-3.14");
        assert_eq!(format_fixed2(0.0), "0.00");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(0.625), "0.63");
        assert_eq!(format_fixed2(2.675), "2.67");
    }

    #[test]
    fn fixed2_exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed2(12.125), "12.13");
        assert_eq!(format_fixed2(-0.125), "-0.13");
    }

    #[test]
    fn fixed2_near_ties_follow_exact_value() {
        // 2.675 and 0.995 are stored just below the tie.
        assert_eq!(format_fixed2(2.675), "2.67");
        assert_eq!(format_fixed2(0.995), "0.99");
    }

    #[test]
    fn fixed2_carries_into_integer_part() {
        assert_eq!(format_fixed2(0.999), "1.00");
        assert_eq!(format_fixed2(99.999), "100.00");
        assert_eq!(format_fixed2(-9.996), "-10.00");
    }

    #[test]
    fn fixed2_keeps_sign_of_small_negatives() {
        assert_eq!(format_fixed2(-0.001), "-0.00");
        assert_eq!(format_fixed2(-0.0), "0.00");
    }

    #[test]
    fn tie_in_control_rate_rounds_up() {
        let f = formatted(800, 1, 100, 10);
        assert_eq!(f.control_rate, "0.13%");
    }

    #[test]
    fn equal_rates_show_non_negative_confidence() {
        let report = evaluate(SampleGroup::new(100, 10), SampleGroup::new(200, 20)).unwrap();
        assert_eq!(report.z_score, 0.0);
        assert!(
            report.confidence_pct > 0.0 && report.confidence_pct < 1e-4,
            "confidence={}",
            report.confidence_pct
        );
        let f = FormattedReport::new(&report, &SignificanceConfig::default());
        assert_eq!(f.confidence, "0.00%");
    }

    #[test]
    fn fixed2_non_finite() {
        assert_eq!(format_fixed2(f64::INFINITY), "Infinity");
        assert_eq!(format_fixed2(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_fixed2(f64::NAN), "NaN");
    }

    #[test]
    fn percent_appends_sign() {
        assert_eq!(format_percent(10.0), "10.00%");
        assert_eq!(format_percent(f64::INFINITY), "Infinity%");
    }

    // ── reports ─────────────────────────────────────────────────────────

    #[test]
    fn formats_ten_vs_fifteen_percent() {
        let f = formatted(100, 10, 100, 15);
        assert_eq!(f.control_rate, "10.00%");
        assert_eq!(f.variant_rate, "15.00%");
        assert_eq!(f.improvement, "50.00%");
        assert_eq!(f.confidence, "71.63%");
        assert_eq!(f.z_score, "1.07");
        assert!(!f.significant);
        assert_eq!(f.verdict, "⚠ Result is not statistically significant yet");
    }

    #[test]
    fn significant_verdict_names_threshold() {
        let f = formatted(1000, 100, 1000, 150);
        assert!(f.significant);
        assert_eq!(
            f.verdict,
            "✓ Result is statistically significant (95%+ confidence)"
        );
    }

    #[test]
    fn zero_control_rate_shows_infinity() {
        let f = formatted(50, 0, 50, 5);
        assert_eq!(f.control_rate, "0.00%");
        assert_eq!(f.improvement, "Infinity%");
    }

    #[test]
    fn display_lists_every_field() {
        let text = formatted(100, 10, 100, 15).to_string();
        assert!(text.contains("Control Rate:  10.00%"), "{}", text);
        assert!(text.contains("Variant Rate:  15.00%"), "{}", text);
        assert!(text.contains("Improvement:   50.00%"), "{}", text);
        assert!(text.contains("Confidence:    71.63%"), "{}", text);
        assert!(text.ends_with("not statistically significant yet"), "{}", text);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(formatted(100, 10, 100, 15)).unwrap();
        assert_eq!(json["controlRate"], "10.00%");
        assert_eq!(json["zScore"], "1.07");
        assert_eq!(json["significant"], false);
    }
}
