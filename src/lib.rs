//! Two-proportion significance testing for A/B conversion experiments.
//!
//! [`evaluate`] compares a control and a variant [`SampleGroup`] and returns
//! either a [`SignificanceReport`] or a [`SignificanceError`] describing why
//! the counts cannot be compared.

pub mod error;
pub mod significance;

pub use error::{ConfigError, Result, SignificanceError};
pub use significance::config::SignificanceConfig;
pub use significance::engine::{
    evaluate, SampleGroup, SignificanceEngine, SignificanceReport, SignificanceResult,
};
pub use significance::format::FormattedReport;
pub use significance::input::parse_count;
pub use significance::stats::normal_cdf;
