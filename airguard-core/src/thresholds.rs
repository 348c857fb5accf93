//! Per-Metric Threshold Tables
//!
//! ## Table Model
//!
//! Every classified metric owns one immutable table: an ascending list of
//! `(upper bound, band)` steps plus a catch-all band for anything above the
//! last bound.
//!
//! ```text
//! PM2.5:  ≤12 → Good   ≤35.4 → Normal   ≤55.4 → Poor   else → Severe
//!
//! value = 35.4  → Normal (bounds are inclusive)
//! value = 35.5  → Poor
//! value = 900   → Severe (catch-all, no range check)
//! ```
//!
//! The first bound the value does not exceed wins. One routine,
//! [`ThresholdTable::classify`], evaluates every table, so a breakpoint
//! change is a one-line edit in [`crate::constants::thresholds`].
//!
//! ## Polarity
//!
//! Industrial proximity is inverted: a small distance means heavy exposure,
//! so its table starts at Severe and ends at Good. Humidity is a comfort
//! scale, bad at both ends. All pollutant tables get worse as the value
//! rises.

use crate::{
    bands::{Band, Polarity},
    constants::thresholds::*,
    errors::{BandError, BandResult},
    metrics::Metric,
};

/// Ordered breakpoint table for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    /// Metric this table classifies
    pub metric: Metric,
    /// Direction in which readings get worse
    pub polarity: Polarity,
    /// Inclusive upper bounds in ascending order
    pub steps: &'static [(f32, Band)],
    /// Band for values above every bound
    pub above: Band,
}

/// Industrial proximity (km)
pub static INDUSTRIAL_PROXIMITY: ThresholdTable = ThresholdTable {
    metric: Metric::IndustrialProximity,
    polarity: Polarity::LowerIsWorse,
    steps: &[
        (PROXIMITY_SEVERE_MAX_KM, Band::Severe),
        (PROXIMITY_POOR_MAX_KM, Band::Poor),
        (PROXIMITY_NORMAL_MAX_KM, Band::Normal),
    ],
    above: Band::Good,
};

/// Relative humidity (%)
pub static HUMIDITY: ThresholdTable = ThresholdTable {
    metric: Metric::Humidity,
    polarity: Polarity::Comfort,
    steps: &[
        (HUMIDITY_DRY_MAX_PCT, Band::Dry),
        (HUMIDITY_IDEAL_MAX_PCT, Band::Ideal),
    ],
    above: Band::Humid,
};

/// PM10 (μg/m³)
pub static PM10: ThresholdTable = ThresholdTable {
    metric: Metric::Pm10,
    polarity: Polarity::HigherIsWorse,
    steps: &[
        (PM10_GOOD_MAX_UG_M3, Band::Good),
        (PM10_NORMAL_MAX_UG_M3, Band::Normal),
        (PM10_POOR_MAX_UG_M3, Band::Poor),
    ],
    above: Band::Severe,
};

/// PM2.5 (μg/m³)
pub static PM25: ThresholdTable = ThresholdTable {
    metric: Metric::Pm25,
    polarity: Polarity::HigherIsWorse,
    steps: &[
        (PM25_GOOD_MAX_UG_M3, Band::Good),
        (PM25_NORMAL_MAX_UG_M3, Band::Normal),
        (PM25_POOR_MAX_UG_M3, Band::Poor),
    ],
    above: Band::Severe,
};

/// NO₂ (ppb)
pub static NO2: ThresholdTable = ThresholdTable {
    metric: Metric::No2,
    polarity: Polarity::HigherIsWorse,
    steps: &[
        (NO2_GOOD_MAX_PPB, Band::Good),
        (NO2_NORMAL_MAX_PPB, Band::Normal),
        (NO2_POOR_MAX_PPB, Band::Poor),
    ],
    above: Band::Severe,
};

/// SO₂ (ppb)
pub static SO2: ThresholdTable = ThresholdTable {
    metric: Metric::So2,
    polarity: Polarity::HigherIsWorse,
    steps: &[
        (SO2_GOOD_MAX_PPB, Band::Good),
        (SO2_NORMAL_MAX_PPB, Band::Normal),
        (SO2_POOR_MAX_PPB, Band::Poor),
    ],
    above: Band::Severe,
};

/// CO (ppm)
pub static CO: ThresholdTable = ThresholdTable {
    metric: Metric::Co,
    polarity: Polarity::HigherIsWorse,
    steps: &[
        (CO_GOOD_MAX_PPM, Band::Good),
        (CO_NORMAL_MAX_PPM, Band::Normal),
        (CO_POOR_MAX_PPM, Band::Poor),
        (CO_VERY_POOR_MAX_PPM, Band::VeryPoor),
    ],
    above: Band::Severe,
};

impl ThresholdTable {
    /// Table for a metric, if it has one
    pub fn for_metric(metric: Metric) -> Option<&'static ThresholdTable> {
        match metric {
            Metric::IndustrialProximity => Some(&INDUSTRIAL_PROXIMITY),
            Metric::Humidity => Some(&HUMIDITY),
            Metric::Pm10 => Some(&PM10),
            Metric::Pm25 => Some(&PM25),
            Metric::No2 => Some(&NO2),
            Metric::So2 => Some(&SO2),
            Metric::Co => Some(&CO),
            Metric::Temperature | Metric::PopulationDensity => None,
        }
    }

    /// Ascending-bound lookup
    ///
    /// Caller guarantees `value` is not NaN. Infinite values fall through
    /// to the ends of the table.
    pub fn classify(&self, value: f32) -> Band {
        self.steps
            .iter()
            .find(|&&(bound, _)| value <= bound)
            .map(|&(_, band)| band)
            .unwrap_or(self.above)
    }

    /// Every band this table can produce, best-to-worst in value order
    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        self.steps
            .iter()
            .map(|&(_, band)| band)
            .chain(core::iter::once(self.above))
    }
}

/// Classify one reading into its qualitative band
///
/// Any finite value yields a band, including values outside the metric's
/// declared range.
pub fn classify_metric(metric: Metric, value: f32) -> BandResult<Band> {
    if !value.is_finite() {
        log_warn!("Rejecting non-finite {} reading", metric);
        return Err(BandError::InvalidValue { metric });
    }

    let table = ThresholdTable::for_metric(metric).ok_or(BandError::Unclassified { metric })?;
    Ok(table.classify(value))
}

/// Classify a reading addressed by metric name (`"pm2.5"`, `"co"`, ...)
pub fn classify_metric_name(name: &str, value: f32) -> BandResult<Band> {
    let metric: Metric = name.parse()?;
    classify_metric(metric, value)
}
