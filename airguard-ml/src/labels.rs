//! Class label decoding
//!
//! The label artifact is the fitted label encoder's class list:
//!
//! ```json
//! { "classes": ["Good", "Hazardous", "Moderate", "Poor"] }
//! ```
//!
//! Index `i` of the classifier's output decodes to `classes[i]`. The list
//! is usually alphabetical, not ordered by severity, so never infer a
//! category from an index alone.

use std::{collections::HashSet, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{loader::read_json, ArtifactError, ArtifactResult, LabelDecoder};

/// Ordered class labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLabels {
    classes: Vec<String>,
}

impl ClassLabels {
    /// Build from labels in class-index order
    pub fn new<I, S>(classes: I) -> ArtifactResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = Self { classes: classes.into_iter().map(Into::into).collect() };
        labels.validate()?;
        Ok(labels)
    }

    /// Parse and validate a JSON artifact
    pub fn from_json_str(json: &str) -> ArtifactResult<Self> {
        let labels: Self = serde_json::from_str(json)?;
        labels.validate()?;
        Ok(labels)
    }

    /// Parse and validate a JSON artifact from a reader
    pub fn from_reader<R: Read>(reader: R) -> ArtifactResult<Self> {
        let labels: Self = serde_json::from_reader(reader)?;
        labels.validate()?;
        Ok(labels)
    }

    /// Load and validate a JSON artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> ArtifactResult<Self> {
        let path = path.as_ref();
        let labels: Self = read_json(path)?;
        labels.validate()?;
        log::info!("Loaded {} class labels from {}", labels.len(), path.display());
        Ok(labels)
    }

    fn validate(&self) -> ArtifactResult<()> {
        if self.classes.is_empty() {
            return Err(ArtifactError::invalid("label set is empty"));
        }

        let mut seen = HashSet::new();
        for label in &self.classes {
            if label.trim().is_empty() {
                return Err(ArtifactError::invalid("label set contains a blank label"));
            }
            if !seen.insert(label.as_str()) {
                return Err(ArtifactError::invalid(format!("duplicate label {label:?}")));
            }
        }
        Ok(())
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false once validated
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class index of a label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }
}

impl LabelDecoder for ClassLabels {
    fn labels(&self) -> &[String] {
        &self.classes
    }
}
