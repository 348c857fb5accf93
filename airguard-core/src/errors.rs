//! Error Types for Classification and Feature Assembly
//!
//! ## Design Philosophy
//!
//! Core errors follow the same rules as the rest of the engine:
//!
//! 1. **Small Size**: Payloads are a metric tag and a couple of numbers, so
//!    errors can be returned by value from hot paths.
//!
//! 2. **No Heap Allocation**: Nothing here owns a `String`.
//!
//! 3. **Copy Semantics**: Every error is `Copy`.
//!
//! ## Error Categories
//!
//! ### Band lookup
//! - `BandError::InvalidValue`: NaN or infinite reading
//! - `BandError::Unclassified`: the metric has no threshold table
//!
//! ### Feature assembly
//! - `AssemblyError`: wrong number of readings, missing or repeated
//!   metric, non-finite or impossible value. Raised before the model is
//!   ever consulted.
//!
//! ### Range validation
//! - `ValidationError`: reading outside its declared range. Only raised
//!   when a caller asks for range checks.

use thiserror_no_std::Error;

use crate::metrics::Metric;

/// Result type for band lookups
pub type BandResult<T> = Result<T, BandError>;

/// Result type for feature assembly
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Result type for range validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Metric name not recognized
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown metric name")]
pub struct UnknownMetric;

/// Per-metric band lookup failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandError {
    /// Reading is NaN or infinite
    #[error("Invalid {metric} reading: not a finite number")]
    InvalidValue {
        /// Metric being classified
        metric: Metric,
    },

    /// Metric has no threshold table
    #[error("No threshold table for {metric}")]
    Unclassified {
        /// Metric being classified
        metric: Metric,
    },

    /// Metric name could not be parsed
    #[error("Unknown metric name")]
    UnknownMetric,
}

impl From<UnknownMetric> for BandError {
    fn from(_: UnknownMetric) -> Self {
        BandError::UnknownMetric
    }
}

/// Feature vector assembly failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AssemblyError {
    /// Fewer readings than feature slots
    #[error("Insufficient readings: need {required}, have {available}")]
    InsufficientReadings {
        /// Number of feature slots
        required: usize,
        /// Number of readings supplied
        available: usize,
    },

    /// More readings than feature slots
    #[error("Too many readings: expected {expected}, have {available}")]
    ExcessReadings {
        /// Number of feature slots
        expected: usize,
        /// Number of readings supplied
        available: usize,
    },

    /// No value supplied for a metric
    #[error("Missing reading for {metric}")]
    MissingReading {
        /// Metric without a value
        metric: Metric,
    },

    /// Same metric supplied twice
    #[error("Duplicate reading for {metric}")]
    DuplicateReading {
        /// Metric supplied more than once
        metric: Metric,
    },

    /// Reading is NaN or infinite
    #[error("Invalid {metric} reading: not a finite number")]
    NonFinite {
        /// Offending metric
        metric: Metric,
    },

    /// Negative reading for a quantity that cannot be negative
    #[error("Negative {metric} reading: {value}")]
    Negative {
        /// Offending metric
        metric: Metric,
        /// The reading
        value: f32,
    },
}

/// Range validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the declared range
    #[error("{metric} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Metric being checked
        metric: Metric,
        /// The actual reading
        value: f32,
        /// Minimum accepted value
        min: f32,
        /// Maximum accepted value
        max: f32,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid {metric} value: not a valid number")]
    InvalidValue {
        /// Metric being checked
        metric: Metric,
    },

    /// Declared range is empty or unbounded
    #[error("Invalid range [{min}, {max}]")]
    InvalidRange {
        /// Declared minimum
        min: f32,
        /// Declared maximum
        max: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for BandError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { metric } =>
                defmt::write!(fmt, "Invalid {} reading", metric),
            Self::Unclassified { metric } =>
                defmt::write!(fmt, "No table for {}", metric),
            Self::UnknownMetric =>
                defmt::write!(fmt, "Unknown metric"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AssemblyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientReadings { required, available } =>
                defmt::write!(fmt, "Need {} readings, have {}", required, available),
            Self::ExcessReadings { expected, available } =>
                defmt::write!(fmt, "Expected {} readings, have {}", expected, available),
            Self::MissingReading { metric } =>
                defmt::write!(fmt, "Missing {}", metric),
            Self::DuplicateReading { metric } =>
                defmt::write!(fmt, "Duplicate {}", metric),
            Self::NonFinite { metric } =>
                defmt::write!(fmt, "Non-finite {}", metric),
            Self::Negative { metric, value } =>
                defmt::write!(fmt, "Negative {}: {}", metric, value),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { metric, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", metric, value, min, max),
            Self::InvalidValue { metric } =>
                defmt::write!(fmt, "Invalid {}", metric),
            Self::InvalidRange { min, max } =>
                defmt::write!(fmt, "Invalid range [{}, {}]", min, max),
        }
    }
}
