//! Turns ranked predictions into a lesion analysis

use crate::interpretation::prediction::Prediction;
use crate::interpretation::rules::{Urgency, classify_urgency, stage_index};
use crate::io::error::{AnalysisError, Result};
use crate::taxonomy::{LesionCategory, Severity, Taxonomy};

/// Structured outcome of interpreting one classification
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Category resolved from the top prediction
    pub category: &'static LesionCategory,
    /// Probability of the top prediction, unmodified
    pub confidence: f64,
    /// Potential stage, `None` for unstaged categories
    pub stage: Option<&'static str>,
    /// Recommendation sentence for the derived urgency
    pub recommendation: &'static str,
    urgency: Urgency,
}

impl AnalysisResult {
    /// Whether the resolved category is a malignant one
    pub fn is_malignant(&self) -> bool {
        self.category.severity == Severity::Malignant
    }

    /// Urgency level the recommendation was chosen from
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Confidence expressed as a percentage
    pub fn confidence_percentage(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Interpret ranked predictions against the built-in taxonomy
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPredictions`] if `predictions` is empty
pub fn interpret(predictions: &[Prediction]) -> Result<AnalysisResult> {
    interpret_with(&Taxonomy::builtin(), predictions)
}

/// Interpret ranked predictions against a specific taxonomy
///
/// The first prediction is taken as the top one; the list is not re-sorted.
/// Its label selects the category (unknown labels fall back to the taxonomy
/// default) and its probability drives staging and urgency.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPredictions`] if `predictions` is empty
pub fn interpret_with(taxonomy: &Taxonomy, predictions: &[Prediction]) -> Result<AnalysisResult> {
    let top = predictions.first().ok_or(AnalysisError::EmptyPredictions)?;

    let category = taxonomy.resolve(&top.label);
    let confidence = top.probability;

    let stage = stage_index(confidence, category.common_stages.len())
        .and_then(|index| category.common_stages.get(index).copied());

    let urgency = classify_urgency(category.severity, confidence);

    Ok(AnalysisResult {
        category,
        confidence,
        stage,
        recommendation: urgency.recommendation(),
        urgency,
    })
}
