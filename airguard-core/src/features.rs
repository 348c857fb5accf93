//! Feature Vector Assembly
//!
//! The aggregate model consumes exactly nine numbers in the order it was
//! trained on:
//!
//! ```text
//! [temperature, humidity, pm25, pm10, no2, so2, co, proximity, population]
//! ```
//!
//! A reordering produces no error downstream, only wrong predictions, so
//! every constructor here writes slots through [`Metric::feature_index`]
//! and never by caller-supplied position alone.

use crate::{
    errors::{AssemblyError, AssemblyResult},
    metrics::Metric,
    readings::AirReadings,
};

/// Number of slots in the feature vector
pub const FEATURE_COUNT: usize = Metric::ALL.len();

/// Fixed-order model input
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    /// Assemble from named readings
    pub fn assemble(readings: &AirReadings) -> AssemblyResult<Self> {
        let mut values = [0.0; FEATURE_COUNT];
        for metric in Metric::ALL {
            values[metric.feature_index()] = check(metric, readings.get(metric))?;
        }
        log_debug!("Assembled feature vector {:?}", values);
        Ok(Self(values))
    }

    /// Assemble from values already in feature order
    pub fn from_slice(values: &[f32]) -> AssemblyResult<Self> {
        if values.len() < FEATURE_COUNT {
            return Err(AssemblyError::InsufficientReadings {
                required: FEATURE_COUNT,
                available: values.len(),
            });
        }
        if values.len() > FEATURE_COUNT {
            return Err(AssemblyError::ExcessReadings {
                expected: FEATURE_COUNT,
                available: values.len(),
            });
        }

        let mut slots = [0.0; FEATURE_COUNT];
        for metric in Metric::ALL {
            let index = metric.feature_index();
            slots[index] = check(metric, values[index])?;
        }
        Ok(Self(slots))
    }

    /// Assemble from `(metric, value)` pairs in any order
    pub fn from_pairs<I>(pairs: I) -> AssemblyResult<Self>
    where
        I: IntoIterator<Item = (Metric, f32)>,
    {
        let mut slots: [Option<f32>; FEATURE_COUNT] = [None; FEATURE_COUNT];

        for (metric, value) in pairs {
            let slot = &mut slots[metric.feature_index()];
            if slot.is_some() {
                return Err(AssemblyError::DuplicateReading { metric });
            }
            *slot = Some(check(metric, value)?);
        }

        let mut values = [0.0; FEATURE_COUNT];
        for metric in Metric::ALL {
            let index = metric.feature_index();
            values[index] = slots[index].ok_or(AssemblyError::MissingReading { metric })?;
        }
        Ok(Self(values))
    }

    /// Value in one metric's slot
    pub fn get(&self, metric: Metric) -> f32 {
        self.0[metric.feature_index()]
    }

    /// Slots in feature order
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Copy out the raw array
    pub fn to_array(self) -> [f32; FEATURE_COUNT] {
        self.0
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

fn check(metric: Metric, value: f32) -> AssemblyResult<f32> {
    if !value.is_finite() {
        return Err(AssemblyError::NonFinite { metric });
    }
    if value < 0.0 && !metric.allows_negative() {
        return Err(AssemblyError::Negative { metric, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_readings() -> AirReadings {
        AirReadings {
            temperature: 25.0,
            humidity: 50.0,
            pm25: 25.0,
            pm10: 50.0,
            no2: 50.0,
            so2: 30.0,
            co: 5.0,
            industrial_proximity: 8.0,
            population_density: 15_000.0,
        }
    }

    #[test]
    fn assemble_uses_training_order() {
        let features = FeatureVector::assemble(&reference_readings()).unwrap();
        assert_eq!(
            features.to_array(),
            [25.0, 50.0, 25.0, 50.0, 50.0, 30.0, 5.0, 8.0, 15_000.0]
        );
    }

    #[test]
    fn from_slice_rejects_short_input() {
        let result = FeatureVector::from_slice(&[1.0; 8]);
        assert_eq!(
            result,
            Err(AssemblyError::InsufficientReadings { required: 9, available: 8 })
        );
    }

    #[test]
    fn from_slice_rejects_long_input() {
        let result = FeatureVector::from_slice(&[1.0; 10]);
        assert_eq!(
            result,
            Err(AssemblyError::ExcessReadings { expected: 9, available: 10 })
        );
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let readings = reference_readings().with(Metric::So2, f32::INFINITY);
        assert_eq!(
            FeatureVector::assemble(&readings),
            Err(AssemblyError::NonFinite { metric: Metric::So2 })
        );
    }

    #[test]
    fn negative_temperature_is_allowed() {
        let readings = reference_readings().with(Metric::Temperature, -4.5);
        assert!(FeatureVector::assemble(&readings).is_ok());
    }

    #[test]
    fn negative_concentration_is_rejected() {
        let readings = reference_readings().with(Metric::Pm10, -1.0);
        assert_eq!(
            FeatureVector::assemble(&readings),
            Err(AssemblyError::Negative { metric: Metric::Pm10, value: -1.0 })
        );
    }

    #[test]
    fn from_pairs_reports_missing_metric() {
        let pairs = Metric::ALL
            .iter()
            .filter(|m| **m != Metric::Co)
            .map(|m| (*m, 1.0));
        assert_eq!(
            FeatureVector::from_pairs(pairs),
            Err(AssemblyError::MissingReading { metric: Metric::Co })
        );
    }

    #[test]
    fn from_pairs_reports_duplicate_metric() {
        let pairs = [(Metric::Pm25, 1.0), (Metric::Pm25, 2.0)];
        assert_eq!(
            FeatureVector::from_pairs(pairs),
            Err(AssemblyError::DuplicateReading { metric: Metric::Pm25 })
        );
    }
}
