//! Core classification engine for AirGuard
//!
//! Maps raw environmental readings to qualitative bands and assembles the
//! fixed-order feature vector consumed by the aggregate air quality model.
//! Designed to run anywhere the readings are collected, including targets
//! without an allocator.
//!
//! Key constraints:
//! - No heap allocation
//! - Threshold tables are immutable data, one per metric
//! - Per-metric bands are advisory and never feed the aggregate model
//!
//! ```
//! use airguard_core::{classify_metric, AirReadings, Band, FeatureVector, Metric};
//!
//! assert_eq!(classify_metric(Metric::Pm25, 12.0), Ok(Band::Good));
//!
//! let readings = AirReadings::default();
//! let features = FeatureVector::assemble(&readings)?;
//! assert_eq!(features.get(Metric::Temperature), 25.0);
//! # Ok::<(), airguard_core::AssemblyError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod bands;
pub mod category;
pub mod constants;
pub mod errors;
pub mod features;
pub mod limits;
pub mod metrics;
pub mod readings;
pub mod thresholds;

// Public API
pub use bands::{Band, Polarity};
pub use category::{Advice, Category, Guidance, Notice};
pub use errors::{
    AssemblyError, AssemblyResult, BandError, BandResult, UnknownMetric, ValidationError,
    ValidationResult,
};
pub use features::{FeatureVector, FEATURE_COUNT};
pub use limits::{ReadingLimits, ValidRange};
pub use metrics::Metric;
pub use readings::{AirReadings, BandReport, MetricBand};
pub use thresholds::{classify_metric, classify_metric_name, ThresholdTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
