//! Skin lesion photo triage built on an external image classifier
//!
//! Classifier scores are labelled with a fixed lesion taxonomy, ranked, and
//! interpreted into a category, an optional stage and a recommendation
//! through ordered rule tables. The interpretation step is a pure function
//! and carries no state between calls.

#![forbid(unsafe_code)]

/// Input preprocessing, the classifier seam and model session lifecycle
pub mod inference;
/// Ranking and interpretation of classifier predictions
pub mod interpretation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Lesion categories and label lookup
pub mod taxonomy;

pub use interpretation::{AnalysisResult, Prediction, interpret};
pub use io::error::{AnalysisError, Result};
