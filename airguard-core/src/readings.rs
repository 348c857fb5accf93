//! Raw Readings and Per-Metric Annotation
//!
//! [`AirReadings`] is the bundle of nine already-collected numbers the
//! caller hands to the core. It feeds two independent paths:
//!
//! ```text
//!               ┌─► annotate()          → BandReport (advisory)
//! AirReadings ──┤
//!               └─► FeatureVector       → aggregate model
//! ```
//!
//! The band report never influences the aggregate prediction.

use heapless::Vec;

use crate::{
    bands::Band,
    metrics::Metric,
    thresholds::ThresholdTable,
};

/// Number of metrics with a threshold table
pub const CLASSIFIED_COUNT: usize = Metric::CLASSIFIED.len();

/// One annotated reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricBand {
    /// Metric that was classified
    pub metric: Metric,
    /// The reading
    pub value: f32,
    /// Band the reading falls into
    pub band: Band,
}

/// Bands for every classified metric, in display order
pub type BandReport = Vec<MetricBand, CLASSIFIED_COUNT>;

/// The nine readings behind one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirReadings {
    /// Air temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// PM2.5 (μg/m³)
    pub pm25: f32,
    /// PM10 (μg/m³)
    pub pm10: f32,
    /// NO₂ (ppb)
    pub no2: f32,
    /// SO₂ (ppb)
    pub so2: f32,
    /// CO (ppm)
    pub co: f32,
    /// Distance to the nearest industrial area (km)
    pub industrial_proximity: f32,
    /// Population density (people/km²)
    pub population_density: f32,
}

impl Default for AirReadings {
    /// Starting values of the collection form
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 50.0,
            pm25: 25.0,
            pm10: 50.0,
            no2: 50.0,
            so2: 30.0,
            co: 5.0,
            industrial_proximity: 0.0,
            population_density: 0.0,
        }
    }
}

impl AirReadings {
    /// Value of one metric
    pub fn get(&self, metric: Metric) -> f32 {
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

    /// Overwrite one metric
    pub fn set(&mut self, metric: Metric, value: f32) {
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
        *slot = value;
    }

    /// Builder-style [`AirReadings::set`]
    pub fn with(mut self, metric: Metric, value: f32) -> Self {
        self.set(metric, value);
        self
    }

    /// Replace the two site slots, as a region profile does
    pub fn with_site(mut self, industrial_proximity: f32, population_density: f32) -> Self {
        self.industrial_proximity = industrial_proximity;
        self.population_density = population_density;
        self
    }

    /// Classify every metric that has a threshold table
    ///
    /// Non-finite readings have no band and are left out of the report.
    pub fn annotate(&self) -> BandReport {
        let mut report = BandReport::new();

        for metric in Metric::CLASSIFIED {
            let value = self.get(metric);
            if !value.is_finite() {
                log_warn!("Skipping non-finite {} reading", metric);
                continue;
            }

            // CLASSIFIED only lists metrics with a table
            if let Some(table) = ThresholdTable::for_metric(metric) {
                let entry = MetricBand { metric, value, band: table.classify(value) };
                // Capacity equals CLASSIFIED_COUNT
                let _ = report.push(entry);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_metric() {
        let mut readings = AirReadings::default();
        for (i, metric) in Metric::ALL.iter().enumerate() {
            readings.set(*metric, i as f32 * 10.0);
        }
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(readings.get(*metric), i as f32 * 10.0);
        }
    }

    #[test]
    fn annotate_default_readings() {
        let report = AirReadings::default().annotate();
        let bands: [(Metric, Band); 7] = [
            (Metric::IndustrialProximity, Band::Severe),
            (Metric::Humidity, Band::Ideal),
            (Metric::Pm10, Band::Good),
            (Metric::Pm25, Band::Normal),
            (Metric::No2, Band::Normal),
            (Metric::So2, Band::Normal),
            (Metric::Co, Band::Normal),
        ];

        assert_eq!(report.len(), bands.len());
        for (entry, (metric, band)) in report.iter().zip(bands) {
            assert_eq!(entry.metric, metric);
            assert_eq!(entry.band, band);
        }
    }

    #[test]
    fn annotate_skips_non_finite() {
        let readings = AirReadings::default().with(Metric::Co, f32::NAN);
        let report = readings.annotate();
        assert_eq!(report.len(), CLASSIFIED_COUNT - 1);
        assert!(report.iter().all(|entry| entry.metric != Metric::Co));
    }

    #[test]
    fn with_site_replaces_only_site_slots() {
        let base = AirReadings::default();
        let sited = base.with_site(8.0, 15_000.0);
        assert_eq!(sited.industrial_proximity, 8.0);
        assert_eq!(sited.population_density, 15_000.0);
        assert_eq!(sited.pm25, base.pm25);
        assert_eq!(sited.temperature, base.temperature);
    }
}
