//! Post-processing of classifier output into a lesion analysis

/// Prediction interpretation into categories, stages and recommendations
pub mod interpreter;
/// Labelled predictions and score ranking
pub mod prediction;
/// Staging bands and urgency rules
pub mod rules;

pub use interpreter::{AnalysisResult, interpret, interpret_with};
pub use prediction::{Prediction, rank_scores};
pub use rules::Urgency;
