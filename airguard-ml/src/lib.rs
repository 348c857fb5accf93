//! Aggregate Air Quality Prediction
//!
//! ## Overview
//!
//! This crate bridges raw readings to a trained classifier and back to a
//! human-facing result. The classifier and its label decoder are opaque
//! artifacts produced by an offline training run; here they are loaded
//! once, checked against each other, and wrapped in an immutable
//! [`Predictor`].
//!
//! ## Prediction Chain
//!
//! ```text
//! 1. assemble   AirReadings → FeatureVector        (AssemblyError)
//! 2. classify   FeatureVector → class index        (ClassificationError)
//! 3. decode     class index → label                (DecodeError)
//! 4. present    label → display label + guidance   (infallible)
//! ```
//!
//! Failures are never retried. A decode failure means the classifier and
//! decoder come from different training runs, and showing any label at
//! that point would be wrong.
//!
//! ## Artifacts
//!
//! The bundled [`ForestClassifier`] reads a tree ensemble exported as
//! JSON: flat node arrays per tree, `x <= threshold` going left, soft
//! voting across trees. [`ClassLabels`] reads the label encoder's class
//! list. Any other model can plug in through the [`Classifier`] and
//! [`LabelDecoder`] traits.
//!
//! ## Usage
//!
//! ```no_run
//! use airguard_core::AirReadings;
//! use airguard_ml::{ForestPredictor, PredictorConfig};
//!
//! let config = PredictorConfig::from_path("airguard.json")?;
//! let predictor = ForestPredictor::from_config(&config)?;
//!
//! let shown = predictor.predict_and_present(&AirReadings::default())?;
//! println!("Predicted Air Quality: {}", shown.display_label);
//! if let Some(text) = shown.guidance_text() {
//!     println!("{text}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Per-Metric Bands
//!
//! Bands for individual readings come from `airguard-core` and are purely
//! advisory. They never feed the classifier.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod errors;
pub mod forest;
mod loader;
pub mod labels;
pub mod node;
pub mod predictor;
pub mod regions;
pub mod traits;
pub mod tree;

/// Index of a class in the classifier's output
pub type ClassIndex = usize;

pub use config::PredictorConfig;
pub use errors::{
    ArtifactError, ArtifactResult, ClassificationError, DecodeError, PredictError, PredictResult,
};
pub use forest::ForestClassifier;
pub use labels::ClassLabels;
pub use node::TreeNode;
pub use predictor::{present, ForestPredictor, Predictor, Presentation};
pub use regions::{RegionProfile, RegionTable};
pub use traits::{Classifier, LabelDecoder};
pub use tree::DecisionTree;
