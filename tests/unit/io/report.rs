//! Tests for plain-text report rendering

#[cfg(test)]
mod tests {
    use lesionlens::interpretation::{Prediction, interpret};
    use lesionlens::io::report::{DISCLAIMER, alternatives, format_percentage, render_report};

    fn ranked() -> Vec<Prediction> {
        vec![
            Prediction::new("Melanoma", 0.934),
            Prediction::new("Melanocytic Nevus", 0.03),
            Prediction::new("Basal Cell Carcinoma", 0.02),
            Prediction::new("Actinic Keratosis", 0.01),
            Prediction::new("Seborrheic Keratosis", 0.006),
        ]
    }

    // Tests one-decimal percentages
    // Verified by printing raw probabilities
    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.934), "93.4%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    // Tests at most three runner-ups are shown
    // Verified by including the top prediction
    #[test]
    fn test_alternatives() {
        let predictions = ranked();
        let shown: Vec<&str> = alternatives(&predictions)
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(
            shown,
            vec![
                "Melanocytic Nevus",
                "Basal Cell Carcinoma",
                "Actinic Keratosis",
            ]
        );

        assert!(alternatives(&predictions[..1]).is_empty());
        assert!(alternatives(&[]).is_empty());
        assert_eq!(alternatives(&predictions[..2]).len(), 1);
    }

    // Tests every section of a staged report
    // Verified by omitting the stage line
    #[test]
    fn test_render_staged_report() {
        let predictions = ranked();
        let result = interpret(&predictions).unwrap();
        let report = render_report(&result, &predictions);

        assert!(report.contains("Identified as:   Melanoma"));
        assert!(report.contains("Type:            Malignant"));
        assert!(report.contains("Risk Level:      High"));
        assert!(report.contains("Confidence:      93.4%"));
        assert!(report.contains("Potential Stage: Stage III"));
        assert!(report.contains("Basal Cell Carcinoma"));
        assert!(!report.contains("Seborrheic Keratosis"));
        assert!(report.contains(result.recommendation));
        assert!(report.ends_with(&format!("{DISCLAIMER}\n")));
    }

    // Tests unstaged reports omit the stage line but keep every heading
    // Verified by printing an empty stage
    #[test]
    fn test_render_unstaged_report() {
        let predictions = vec![Prediction::new("Seborrheic Keratosis", 0.6)];
        let result = interpret(&predictions).unwrap();
        let report = render_report(&result, &predictions);

        assert!(!report.contains("Potential Stage"));
        assert!(report.contains("Alternative Possibilities:\n\nRecommendation:"));
        assert!(report.contains("Continue regular skin checks"));
        assert!(report.contains(DISCLAIMER));
    }
}
