//! Tree-ensemble classifier
//!
//! Each tree votes with the normalized class distribution of the leaf the
//! sample lands in; the forest averages those distributions and returns
//! the most probable class. Ties go to the lowest class index, matching
//! argmax over the averaged probabilities.
//!
//! ## Artifact format
//!
//! ```json
//! {
//!   "feature_count": 9,
//!   "class_count": 4,
//!   "feature_names": ["temperature", "humidity", "pm25", ...],
//!   "trees": [ { "nodes": [ ... ] } ]
//! }
//! ```
//!
//! `feature_names` is optional. When present it records the column order
//! used at training time so the predictor can check it against its own.

use std::{io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    loader::read_json, tree::RawTree, ArtifactError, ArtifactResult, ClassIndex,
    ClassificationError, Classifier, DecisionTree,
};

/// Unchecked wire form of an ensemble
#[derive(Debug, Deserialize)]
struct RawForest {
    feature_count: usize,
    class_count: usize,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    trees: Vec<RawTree>,
}

/// Trained tree ensemble
///
/// Every way of obtaining one, including plain serde deserialization,
/// validates the trees against the declared shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForest")]
pub struct ForestClassifier {
    feature_count: usize,
    class_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    trees: Vec<DecisionTree>,
}

impl TryFrom<RawForest> for ForestClassifier {
    type Error = ArtifactError;

    fn try_from(raw: RawForest) -> ArtifactResult<Self> {
        let RawForest { feature_count, class_count, feature_names, trees } = raw;
        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(index, tree)| {
                DecisionTree::new(tree.nodes, feature_count, class_count)
                    .map_err(|e| ArtifactError::invalid(format!("tree {index}: {e}")))
            })
            .collect::<ArtifactResult<Vec<_>>>()?;

        let forest = Self { feature_count, class_count, feature_names, trees };
        forest.validate()?;
        Ok(forest)
    }
}

impl ForestClassifier {
    /// Build an ensemble, validating every tree against the declared shape
    pub fn new(feature_count: usize, class_count: usize, trees: Vec<DecisionTree>) -> ArtifactResult<Self> {
        let forest = Self { feature_count, class_count, feature_names: None, trees };
        forest.validate()?;
        Ok(forest)
    }

    /// Attach the training column order
    pub fn with_feature_names(mut self, names: Vec<String>) -> ArtifactResult<Self> {
        self.feature_names = Some(names);
        self.validate()?;
        Ok(self)
    }

    /// Parse and validate a JSON artifact
    pub fn from_json_str(json: &str) -> ArtifactResult<Self> {
        let raw: RawForest = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Parse and validate a JSON artifact from a reader
    pub fn from_reader<R: Read>(reader: R) -> ArtifactResult<Self> {
        let raw: RawForest = serde_json::from_reader(reader)?;
        Self::try_from(raw)
    }

    /// Load and validate a JSON artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> ArtifactResult<Self> {
        let path = path.as_ref();
        let forest = Self::try_from(read_json::<RawForest>(path)?)?;
        log::info!(
            "Loaded classifier from {}: {} trees (max depth {}), {} features, {} classes",
            path.display(),
            forest.trees.len(),
            forest.max_depth(),
            forest.feature_count,
            forest.class_count
        );
        Ok(forest)
    }

    fn validate(&self) -> ArtifactResult<()> {
        if self.feature_count == 0 {
            return Err(ArtifactError::invalid("feature_count must be positive"));
        }
        if self.class_count == 0 {
            return Err(ArtifactError::invalid("class_count must be positive"));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid("ensemble has no trees"));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.feature_count {
                return Err(ArtifactError::invalid(format!(
                    "{} feature names for {} features",
                    names.len(),
                    self.feature_count
                )));
            }
        }

        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_count, self.class_count)
                .map_err(|e| ArtifactError::invalid(format!("tree {index}: {e}")))?;
        }
        Ok(())
    }

    /// Averaged class distribution
    pub fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>, ClassificationError> {
        self.check_shape(features)?;

        let mut total = vec![0.0f32; self.class_count];
        let mut scratch = vec![0.0f32; self.class_count];
        for tree in &self.trees {
            tree.predict_proba(features, &mut scratch);
            for (sum, p) in total.iter_mut().zip(&scratch) {
                *sum += p;
            }
        }

        let n = self.trees.len() as f32;
        for p in &mut total {
            *p /= n;
        }
        Ok(total)
    }

    /// Training column order, if the artifact recorded it
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Deepest tree in the ensemble
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }

    fn check_shape(&self, features: &[f32]) -> Result<(), ClassificationError> {
        if features.len() != self.feature_count {
            return Err(ClassificationError::ShapeMismatch {
                expected: self.feature_count,
                actual: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ClassificationError::NonFinite { index });
        }
        Ok(())
    }
}

impl Classifier for ForestClassifier {
    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn class_count(&self) -> usize {
        self.class_count
    }

    fn feature_names(&self) -> Option<&[String]> {
        ForestClassifier::feature_names(self)
    }

    fn predict(&self, features: &[f32]) -> Result<ClassIndex, ClassificationError> {
        let proba = self.predict_proba(features)?;

        // Strict comparison keeps the lowest index on ties
        let mut best = 0;
        for (index, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = index;
            }
        }
        Ok(best)
    }
}
