//! Aggregate prediction chain
//!
//! ```text
//! AirReadings ─► assemble ─► classify ─► decode ─► present ─► Presentation
//!                  │            │           │          │
//!             AssemblyError  Classif.   DecodeError  (never fails)
//!             ValidationErr  Error
//! ```
//!
//! A [`Predictor`] is the immutable context built once at start-up from
//! the classifier and decoder artifacts. It holds no mutable state, so a
//! shared reference serves any number of callers.

use airguard_core::{
    AirReadings, BandReport, Category, FeatureVector, Guidance, Metric, ReadingLimits,
    FEATURE_COUNT,
};
use serde::Serialize;

use crate::{
    ArtifactError, ArtifactResult, ClassIndex, ClassLabels, Classifier, ForestClassifier,
    LabelDecoder, PredictResult, PredictorConfig, RegionTable,
};

/// Displayable result of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// Label as decoded
    pub label: String,
    /// Decorated label, or the decoded label unchanged if unknown
    pub display_label: String,
    /// Recognized category, if any
    pub category: Option<Category>,
    /// Guidance block, absent for unknown labels
    pub guidance: Option<&'static Guidance>,
}

impl Presentation {
    /// Guidance block rendered as text
    pub fn guidance_text(&self) -> Option<String> {
        self.guidance.map(|g| g.to_string())
    }
}

/// Map a decoded label to its display form
///
/// Labels outside the known categories pass through undecorated with no
/// guidance.
pub fn present(label: &str) -> Presentation {
    match Category::from_label(label) {
        Some(category) => Presentation {
            label: label.to_string(),
            display_label: category.display_label().to_string(),
            category: Some(category),
            guidance: Some(category.guidance()),
        },
        None => Presentation {
            label: label.to_string(),
            display_label: label.to_string(),
            category: None,
            guidance: None,
        },
    }
}

/// Predictor backed by the bundled tree-ensemble artifacts
pub type ForestPredictor = Predictor<ForestClassifier, ClassLabels>;

/// Immutable prediction context
#[derive(Debug, Clone)]
pub struct Predictor<C, D> {
    classifier: C,
    decoder: D,
    regions: RegionTable,
    limits: ReadingLimits,
    enforce_limits: bool,
}

impl<C: Classifier, D: LabelDecoder> Predictor<C, D> {
    /// Pair a classifier with its decoder
    ///
    /// Fails if the classifier was not trained on the nine-slot feature
    /// vector, or recorded a different column order. A class count that
    /// differs from the label count is only logged: affected indices
    /// surface as decode errors.
    pub fn new(classifier: C, decoder: D) -> ArtifactResult<Self> {
        if classifier.feature_count() != FEATURE_COUNT {
            return Err(ArtifactError::invalid(format!(
                "classifier expects {} features, readings provide {FEATURE_COUNT}",
                classifier.feature_count()
            )));
        }

        if let Some(names) = classifier.feature_names() {
            if names.len() != FEATURE_COUNT {
                return Err(ArtifactError::invalid(format!(
                    "classifier records {} column names, readings provide {FEATURE_COUNT}",
                    names.len()
                )));
            }
            for (name, expected) in names.iter().zip(Metric::ALL) {
                if name.parse::<Metric>().ok() != Some(expected) {
                    return Err(ArtifactError::invalid(format!(
                        "classifier column {} is {name:?}, expected {expected}",
                        expected.feature_index()
                    )));
                }
            }
        }

        let labels = decoder.labels().len();
        if classifier.class_count() != labels {
            log::warn!(
                "Classifier emits {} classes but decoder knows {} labels",
                classifier.class_count(),
                labels
            );
        }

        Ok(Self {
            classifier,
            decoder,
            regions: RegionTable::default(),
            limits: ReadingLimits::default(),
            enforce_limits: false,
        })
    }

    /// Attach a region profile table
    pub fn with_regions(mut self, regions: RegionTable) -> Self {
        self.regions = regions;
        self
    }

    /// Set valid ranges and whether to enforce them
    pub fn with_limits(mut self, limits: ReadingLimits, enforce: bool) -> Self {
        self.limits = limits;
        self.enforce_limits = enforce;
        self
    }

    /// Region profile table
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Valid ranges in use
    pub fn limits(&self) -> &ReadingLimits {
        &self.limits
    }

    /// Build the feature vector, checking ranges if enforcement is on
    pub fn assemble(&self, readings: &AirReadings) -> PredictResult<FeatureVector> {
        let features = FeatureVector::assemble(readings)?;
        if self.enforce_limits {
            self.limits.check_all(readings)?;
        }
        Ok(features)
    }

    /// Run the classifier
    pub fn classify(&self, features: &FeatureVector) -> PredictResult<ClassIndex> {
        let index = self.classifier.predict(features.as_slice())?;
        log::debug!("Classifier returned class {index}");
        Ok(index)
    }

    /// Decode a class index to its label
    pub fn decode(&self, index: ClassIndex) -> PredictResult<&str> {
        Ok(self.decoder.decode(index)?)
    }

    /// Map a decoded label to its display form
    pub fn present(&self, label: &str) -> Presentation {
        present(label)
    }

    /// Assemble, classify, decode and present
    pub fn predict_and_present(&self, readings: &AirReadings) -> PredictResult<Presentation> {
        let features = self.assemble(readings)?;
        let index = self.classify(&features)?;
        let label = self.decode(index).map_err(|e| {
            log::error!("Classifier and decoder disagree: {e}");
            e
        })?;

        let presentation = self.present(label);
        if presentation.category.is_none() {
            log::warn!("Decoded label {label:?} has no display mapping");
        }
        Ok(presentation)
    }

    /// Fill the site readings from a region profile, then predict
    pub fn predict_for_region(&self, region: &str, readings: &AirReadings) -> PredictResult<Presentation> {
        let readings = self.regions.apply(region, *readings)?;
        self.predict_and_present(&readings)
    }

    /// Per-metric bands for the same readings
    ///
    /// Independent of the prediction; provided so callers hold one handle.
    pub fn annotate(&self, readings: &AirReadings) -> BandReport {
        readings.annotate()
    }
}

impl ForestPredictor {
    /// Load every artifact named by the configuration
    pub fn from_config(config: &PredictorConfig) -> ArtifactResult<Self> {
        let classifier = ForestClassifier::from_path(&config.classifier)?;
        let decoder = ClassLabels::from_path(&config.decoder)?;
        let regions = match &config.regions {
            Some(path) => RegionTable::from_path(path)?,
            None => RegionTable::default(),
        };

        Ok(Self::new(classifier, decoder)?
            .with_regions(regions)
            .with_limits(config.limits, config.enforce_limits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassificationError, DecodeError, PredictError};
    use airguard_core::{AssemblyError, ValidationError};

    /// Always answers the same class
    struct Fixed(ClassIndex);

    impl Classifier for Fixed {
        fn feature_count(&self) -> usize {
            FEATURE_COUNT
        }

        fn class_count(&self) -> usize {
            4
        }

        fn predict(&self, features: &[f32]) -> Result<ClassIndex, ClassificationError> {
            if features.len() != FEATURE_COUNT {
                return Err(ClassificationError::ShapeMismatch {
                    expected: FEATURE_COUNT,
                    actual: features.len(),
                });
            }
            Ok(self.0)
        }
    }

    /// Reports nine inputs but records only some column names
    struct Truncated(Vec<String>);

    impl Classifier for Truncated {
        fn feature_count(&self) -> usize {
            FEATURE_COUNT
        }

        fn class_count(&self) -> usize {
            4
        }

        fn feature_names(&self) -> Option<&[String]> {
            Some(&self.0)
        }

        fn predict(&self, _features: &[f32]) -> Result<ClassIndex, ClassificationError> {
            Ok(0)
        }
    }

    fn labels() -> ClassLabels {
        ClassLabels::new(["Good", "Hazardous", "Moderate", "Poor"]).unwrap()
    }

    #[test]
    fn moderate_is_decorated_with_guidance() {
        let predictor = Predictor::new(Fixed(2), labels()).unwrap();
        let shown = predictor.predict_and_present(&AirReadings::default()).unwrap();

        assert_eq!(shown.label, "Moderate");
        assert_eq!(shown.display_label, "Moderate 🟡");
        assert_eq!(shown.category, Some(Category::Moderate));
        assert_eq!(shown.guidance, Some(Category::Moderate.guidance()));
    }

    #[test]
    fn unknown_label_passes_through() {
        let decoder = ClassLabels::new(["Good", "Unknown"]).unwrap();
        let predictor = Predictor::new(Fixed(1), decoder).unwrap();
        let shown = predictor.predict_and_present(&AirReadings::default()).unwrap();

        assert_eq!(shown.display_label, "Unknown");
        assert_eq!(shown.category, None);
        assert_eq!(shown.guidance_text(), None);
    }

    #[test]
    fn stale_index_is_a_decode_error() {
        let predictor = Predictor::new(Fixed(7), labels()).unwrap();
        assert_eq!(
            predictor.predict_and_present(&AirReadings::default()),
            Err(PredictError::Decode(DecodeError::UnknownClass { index: 7, known: 4 }))
        );
    }

    #[test]
    fn assembly_fails_before_classification() {
        let predictor = Predictor::new(Fixed(0), labels()).unwrap();
        let readings = AirReadings::default().with(Metric::Pm25, f32::NAN);
        assert_eq!(
            predictor.predict_and_present(&readings),
            Err(PredictError::Assembly(AssemblyError::NonFinite { metric: Metric::Pm25 }))
        );
    }

    #[test]
    fn limits_only_apply_when_enforced() {
        let readings = AirReadings::default().with(Metric::So2, 150.0);

        let lenient = Predictor::new(Fixed(0), labels()).unwrap();
        assert!(lenient.predict_and_present(&readings).is_ok());

        let strict = Predictor::new(Fixed(0), labels())
            .unwrap()
            .with_limits(ReadingLimits::default(), true);
        assert!(matches!(
            strict.predict_and_present(&readings),
            Err(PredictError::Validation(ValidationError::OutOfRange { metric: Metric::So2, .. }))
        ));

        let extended = Predictor::new(Fixed(0), labels())
            .unwrap()
            .with_limits(ReadingLimits::extended(), true);
        assert!(extended.predict_and_present(&readings).is_ok());
    }

    #[test]
    fn partial_column_names_are_rejected() {
        let names = Metric::ALL[..5].iter().map(|m| m.name().to_string()).collect();
        assert!(matches!(
            Predictor::new(Truncated(names), labels()),
            Err(ArtifactError::Invalid(_))
        ));

        let names = Metric::ALL.iter().map(|m| m.name().to_string()).collect();
        assert!(Predictor::new(Truncated(names), labels()).is_ok());
    }

    #[test]
    fn present_every_category() {
        for category in Category::ALL {
            let shown = present(category.label());
            assert_eq!(shown.display_label, category.display_label());
            assert!(shown.guidance_text().unwrap().starts_with(category.guidance().heading));
        }
    }
}
