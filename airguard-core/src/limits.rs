//! Declared Valid Ranges
//!
//! The collecting boundary is expected to keep every reading inside its
//! declared range. These limits let a caller enforce that explicitly, for
//! example when readings arrive from a file or a sensor instead of a form.
//!
//! Two presets exist because the deployed forms disagree on the gas
//! ranges:
//!
//! ```text
//!                 standard     extended
//! SO₂ (ppb)       0..50        0..200
//! CO  (ppm)       0..100       0..410
//! ```
//!
//! Neither is authoritative, so both are plain data and every range can be
//! overridden.
//!
//! ```
//! use airguard_core::{Metric, ReadingLimits, ValidRange};
//!
//! let limits = ReadingLimits::default()
//!     .with_range(Metric::Co, ValidRange::new(0.0, 200.0));
//!
//! assert!(limits.check(Metric::Co, 150.0).is_ok());
//! assert!(limits.check(Metric::So2, 60.0).is_err());
//! ```

use crate::{
    constants::ranges::*,
    errors::{ValidationError, ValidationResult},
    metrics::Metric,
    readings::AirReadings,
};

/// Closed interval `[min, max]`
///
/// Deserialized ranges go through [`ValidRange::try_new`], so an inverted
/// or non-finite interval in a configuration file fails to load.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeBounds"))]
pub struct ValidRange {
    /// Smallest accepted value
    pub min: f32,
    /// Largest accepted value
    pub max: f32,
}

impl ValidRange {
    /// Create a range
    ///
    /// Bounds are taken as given; use [`ValidRange::try_new`] for values
    /// that come from outside the crate.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create a range, rejecting non-finite bounds and `min > max`
    pub fn try_new(min: f32, max: f32) -> ValidationResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ValidationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Whether `value` lies inside the range
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Unchecked wire form of [`ValidRange`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeBounds {
    min: f32,
    max: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for ValidRange {
    type Error = ValidationError;

    fn try_from(bounds: RangeBounds) -> ValidationResult<Self> {
        Self::try_new(bounds.min, bounds.max)
    }
}

/// Valid range for every metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadingLimits {
    /// Air temperature (°C)
    pub temperature: ValidRange,
    /// Relative humidity (%)
    pub humidity: ValidRange,
    /// PM2.5 (μg/m³)
    pub pm25: ValidRange,
    /// PM10 (μg/m³)
    pub pm10: ValidRange,
    /// NO₂ (ppb)
    pub no2: ValidRange,
    /// SO₂ (ppb)
    pub so2: ValidRange,
    /// CO (ppm)
    pub co: ValidRange,
    /// Distance to industry (km)
    pub industrial_proximity: ValidRange,
    /// Population density (people/km²)
    pub population_density: ValidRange,
}

impl Default for ReadingLimits {
    fn default() -> Self {
        Self {
            temperature: ValidRange::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            humidity: ValidRange::new(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
            pm25: ValidRange::new(0.0, PM25_MAX_UG_M3),
            pm10: ValidRange::new(0.0, PM10_MAX_UG_M3),
            no2: ValidRange::new(0.0, NO2_MAX_PPB),
            so2: ValidRange::new(0.0, SO2_MAX_PPB),
            co: ValidRange::new(0.0, CO_MAX_PPM),
            industrial_proximity: ValidRange::new(0.0, PROXIMITY_MAX_KM),
            population_density: ValidRange::new(0.0, POPULATION_DENSITY_MAX),
        }
    }
}

impl ReadingLimits {
    /// Wider gas ranges used by the region-based form
    pub fn extended() -> Self {
        Self {
            so2: ValidRange::new(0.0, SO2_EXTENDED_MAX_PPB),
            co: ValidRange::new(0.0, CO_EXTENDED_MAX_PPM),
            ..Self::default()
        }
    }

    /// Range declared for a metric
    pub fn range(&self, metric: Metric) -> ValidRange {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Pm25 => self.pm25,
            Metric::Pm10 => self.pm10,
            Metric::No2 => self.no2,
            Metric::So2 => self.so2,
            Metric::Co => self.co,
            Metric::IndustrialProximity => self.industrial_proximity,
            Metric::PopulationDensity => self.population_density,
        }
    }

    /// Override one metric's range
    pub fn with_range(mut self, metric: Metric, range: ValidRange) -> Self {
        let slot = match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
            Metric::Pm25 => &mut self.pm25,
            Metric::Pm10 => &mut self.pm10,
            Metric::No2 => &mut self.no2,
            Metric::So2 => &mut self.so2,
            Metric::Co => &mut self.co,
            Metric::IndustrialProximity => &mut self.industrial_proximity,
            Metric::PopulationDensity => &mut self.population_density,
        };
        *slot = range;
        self
    }

    /// Check one reading against its range
    pub fn check(&self, metric: Metric, value: f32) -> ValidationResult<()> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue { metric });
        }

        let range = self.range(metric);
        if range.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                metric,
                value,
                min: range.min,
                max: range.max,
            })
        }
    }

    /// Check every reading, stopping at the first failure
    pub fn check_all(&self, readings: &AirReadings) -> ValidationResult<()> {
        Metric::ALL
            .iter()
            .try_for_each(|&metric| self.check(metric, readings.get(metric)))
    }
}
