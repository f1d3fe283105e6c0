//! Labelled classifier scores and their ranking

use crate::io::configuration::MAX_RANKED_PREDICTIONS;
use crate::taxonomy::Taxonomy;

/// One labelled classifier score
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Category display name
    pub label: String,
    /// Score reported by the classifier, normally in `0.0..=1.0`
    pub probability: f64,
}

impl Prediction {
    /// Create a prediction from a label and a probability
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Probability expressed as a percentage
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Label raw classifier scores with taxonomy names and rank them
///
/// Score `i` belongs to the `i`-th category. Categories without a score, or
/// with a NaN score, get `0.0` and scores past the end of the taxonomy are
/// dropped. The result is sorted by descending probability, ties keep
/// taxonomy order, and at most [`MAX_RANKED_PREDICTIONS`] entries are kept.
pub fn rank_scores(taxonomy: &Taxonomy, scores: &[f64]) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = taxonomy
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let score = scores
                .get(index)
                .copied()
                .filter(|score| !score.is_nan())
                .unwrap_or(0.0);
            Prediction::new(category.name, score)
        })
        .collect();

    predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    predictions.truncate(MAX_RANKED_PREDICTIONS);
    predictions
}
