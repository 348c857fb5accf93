//! Error types for artifact loading and prediction
//!
//! Every failure is local to one call. Nothing is retried: a classifier
//! that rejects a vector once will reject it again, and a class index the
//! decoder does not know means the two artifacts were built from different
//! training runs.

use std::io;

use airguard_core::{AssemblyError, ValidationError};
use thiserror_no_std::Error;

use crate::ClassIndex;

/// Result type for artifact loading
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Result type for the prediction chain
pub type PredictResult<T> = Result<T, PredictError>;

/// Classifier rejected its input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationError {
    /// Vector length differs from the trained feature count
    #[error("Feature vector has {actual} values, classifier expects {expected}")]
    ShapeMismatch {
        /// Feature count the classifier was trained on
        expected: usize,
        /// Length of the vector supplied
        actual: usize,
    },

    /// A feature is NaN or infinite
    #[error("Feature {index} is not a finite number")]
    NonFinite {
        /// Slot of the offending feature
        index: usize,
    },
}

/// Decoder does not know the class index
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Index outside the decoder's label set
    #[error("Class index {index} unknown to decoder with {known} labels")]
    UnknownClass {
        /// Index produced by the classifier
        index: ClassIndex,
        /// Number of labels the decoder holds
        known: usize,
    },
}

/// Failure loading a classifier, decoder, region table or configuration
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// File is not valid JSON for the expected shape
    #[error("Malformed artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// Artifact parsed but is internally inconsistent
    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ArtifactError::Invalid(reason.into())
    }
}

/// Failure anywhere in assemble → classify → decode
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Readings could not form a feature vector
    #[error("Assembly failed: {0}")]
    Assembly(#[from] AssemblyError),

    /// A reading is outside its declared range
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Classifier rejected the feature vector
    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    /// Class index does not match the decoder
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Region name not in the region table
    #[error("Unknown region: {name}")]
    UnknownRegion {
        /// Name that was looked up
        name: String,
    },
}
