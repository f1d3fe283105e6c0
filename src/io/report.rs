//! Plain-text rendering of an analysis for the end user

use crate::interpretation::{AnalysisResult, Prediction};
use crate::io::configuration::MAX_ALTERNATIVES;
use std::fmt::Write;

/// Disclaimer that accompanies every rendered analysis
pub const DISCLAIMER: &str = "Important: This is an AI-assisted analysis for educational purposes only. \
It should not be used as a substitute for professional medical diagnosis. \
Always consult qualified healthcare professionals for proper evaluation and diagnosis.";

/// Format a probability as a percentage with one decimal
pub fn format_percentage(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Runner-up predictions shown beside the main result
///
/// Skips the top prediction and keeps at most [`MAX_ALTERNATIVES`].
pub fn alternatives(predictions: &[Prediction]) -> &[Prediction] {
    let end = predictions.len().min(MAX_ALTERNATIVES + 1);
    predictions.get(1..end).unwrap_or(&[])
}

/// Render an analysis together with the ranked predictions it came from
pub fn render_report(result: &AnalysisResult, predictions: &[Prediction]) -> String {
    let category = result.category;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Analysis Results");
    let _ = writeln!(out, "================");
    let _ = writeln!(out, "Identified as:   {}", category.name);
    let _ = writeln!(out, "  {}", category.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Type:            {}", category.severity);
    let _ = writeln!(out, "Risk Level:      {}", category.risk_level);
    let _ = writeln!(
        out,
        "Confidence:      {}",
        format_percentage(result.confidence)
    );
    if let Some(stage) = result.stage {
        let _ = writeln!(out, "Potential Stage: {stage}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Alternative Possibilities:");
    for prediction in alternatives(predictions) {
        let _ = writeln!(
            out,
            "  {:<26}{:>7}",
            prediction.label,
            format_percentage(prediction.probability)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendation:");
    let _ = writeln!(out, "  {}", result.recommendation);
    let _ = writeln!(out);
    let _ = writeln!(out, "{DISCLAIMER}");
    out
}
