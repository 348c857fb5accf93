//! Seams to the trained artifacts
//!
//! The predictor only ever talks to a classifier and a label decoder
//! through these two traits. Both are read-only after loading, so one
//! instance can be shared across threads for the process lifetime.

use crate::{ClassIndex, ClassificationError, DecodeError};

/// Trained model mapping a feature vector to a class index
pub trait Classifier {
    /// Number of features the model was trained on
    fn feature_count(&self) -> usize;

    /// Number of classes the model can emit
    fn class_count(&self) -> usize;

    /// Column order recorded at training time, if known
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Predict the class of one feature vector
    fn predict(&self, features: &[f32]) -> Result<ClassIndex, ClassificationError>;
}

/// Inverse of the label encoding used at training time
pub trait LabelDecoder {
    /// Known labels, indexed by class
    fn labels(&self) -> &[String];

    /// Label for a class index
    fn decode(&self, index: ClassIndex) -> Result<&str, DecodeError> {
        let labels = self.labels();
        labels
            .get(index)
            .map(String::as_str)
            .ok_or(DecodeError::UnknownClass { index, known: labels.len() })
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn feature_count(&self) -> usize {
        (**self).feature_count()
    }

    fn class_count(&self) -> usize {
        (**self).class_count()
    }

    fn feature_names(&self) -> Option<&[String]> {
        (**self).feature_names()
    }

    fn predict(&self, features: &[f32]) -> Result<ClassIndex, ClassificationError> {
        (**self).predict(features)
    }
}

impl<D: LabelDecoder + ?Sized> LabelDecoder for &D {
    fn labels(&self) -> &[String] {
        (**self).labels()
    }

    fn decode(&self, index: ClassIndex) -> Result<&str, DecodeError> {
        (**self).decode(index)
    }
}
