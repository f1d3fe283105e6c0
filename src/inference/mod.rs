//! Classifier plumbing: input preprocessing and model session lifecycle

/// Classifier trait and scoped model session
pub mod classifier;
/// Image decoding and tensor preparation
pub mod preprocessing;
/// Classifier backed by precomputed score files
pub mod score_table;

pub use classifier::{Classifier, ClassifierInput, ModelSession};
pub use score_table::ScoreTable;
