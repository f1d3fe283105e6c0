//! Tests for staging bands and urgency rules

#[cfg(test)]
mod tests {
    use lesionlens::interpretation::Urgency;
    use lesionlens::interpretation::rules::{
        FALLBACK_URGENCY, STAGE_BANDS, URGENCY_RULES, classify_urgency, stage_index,
    };
    use lesionlens::taxonomy::Severity;

    // Tests each band on a five-stage list
    // Verified by reordering the bands
    #[test]
    fn test_stage_bands_five_stages() {
        assert_eq!(stage_index(0.95, 5), Some(3));
        assert_eq!(stage_index(0.8, 5), Some(2));
        assert_eq!(stage_index(0.5, 5), Some(1));
        assert_eq!(stage_index(0.05, 5), Some(0));
    }

    // Tests band thresholds are strict
    // Verified by using greater-or-equal comparisons
    #[test]
    fn test_stage_band_boundaries() {
        assert_eq!(stage_index(0.9, 5), Some(2));
        assert_eq!(stage_index(0.7, 5), Some(1));
        assert_eq!(stage_index(0.1, 5), Some(0));
        assert_eq!(stage_index(0.0, 5), Some(0));
    }

    // Tests indices are clamped to the last stage
    // Verified by removing the clamp
    #[test]
    fn test_stage_clamping() {
        assert_eq!(stage_index(0.95, 3), Some(2));
        assert_eq!(stage_index(0.95, 2), Some(1));
        assert_eq!(stage_index(0.5, 1), Some(0));
        assert_eq!(stage_index(0.95, 4), Some(3));
    }

    // Tests unstaged categories get no stage
    // Verified by returning index zero for empty lists
    #[test]
    fn test_stage_unstaged() {
        assert_eq!(stage_index(0.99, 0), None);
        assert_eq!(stage_index(0.0, 0), None);
    }

    // Tests odd confidences pass through the bands without failing
    // Verified by clamping confidence into 0..=1
    #[test]
    fn test_stage_unusual_confidence() {
        assert_eq!(stage_index(f64::NAN, 5), Some(0));
        assert_eq!(stage_index(-3.0, 5), Some(0));
        assert_eq!(stage_index(7.5, 5), Some(3));
    }

    // Tests the band table itself
    // Verified by changing a threshold
    #[test]
    fn test_stage_band_table() {
        let thresholds: Vec<(f64, usize)> =
            STAGE_BANDS.iter().map(|b| (b.above, b.stage_index)).collect();
        assert_eq!(thresholds, vec![(0.9, 3), (0.7, 2), (0.1, 1)]);
    }

    // Tests the concrete urgency cases
    // Verified by swapping the first two rules
    #[test]
    fn test_urgency_cases() {
        assert_eq!(classify_urgency(Severity::Malignant, 0.85), Urgency::Immediate);
        assert_eq!(classify_urgency(Severity::Malignant, 0.5), Urgency::Urgent);
        assert_eq!(classify_urgency(Severity::Suspicious, 0.85), Urgency::Urgent);
        assert_eq!(classify_urgency(Severity::Suspicious, 0.5), Urgency::Monitor);
        assert_eq!(classify_urgency(Severity::Benign, 0.95), Urgency::Monitor);
        assert_eq!(classify_urgency(Severity::Benign, 0.5), Urgency::Routine);
    }

    // Tests urgency thresholds are strict
    // Verified by using greater-or-equal comparisons
    #[test]
    fn test_urgency_boundaries() {
        assert_eq!(classify_urgency(Severity::Malignant, 0.7), Urgency::Urgent);
        assert_eq!(classify_urgency(Severity::Suspicious, 0.8), Urgency::Monitor);
        assert_eq!(classify_urgency(Severity::Benign, 0.9), Urgency::Routine);
        assert_eq!(classify_urgency(Severity::Malignant, 0.95), Urgency::Immediate);
    }

    // Tests the rule table order and fallback
    // Verified by reordering the rule table
    #[test]
    fn test_urgency_rule_order() {
        let order: Vec<Urgency> = URGENCY_RULES.iter().map(|r| r.urgency).collect();
        assert_eq!(
            order,
            vec![Urgency::Immediate, Urgency::Urgent, Urgency::Monitor]
        );
        assert_eq!(FALLBACK_URGENCY, Urgency::Routine);
    }

    // Tests recommendation text for each urgency
    // Verified by swapping two sentences
    #[test]
    fn test_recommendation_text() {
        assert_eq!(
            Urgency::Immediate.recommendation(),
            "Seek immediate medical attention. This analysis suggests a high probability of malignant cancer."
        );
        assert_eq!(
            Urgency::Urgent.recommendation(),
            "Schedule an appointment with a dermatologist as soon as possible for proper evaluation."
        );
        assert_eq!(
            Urgency::Monitor.recommendation(),
            "Monitor for changes and schedule a routine check-up with a healthcare provider."
        );
        assert_eq!(
            Urgency::Routine.recommendation(),
            "Continue regular skin checks and practice sun protection."
        );
    }

    // Tests urgency names
    // Verified by capitalizing the names
    #[test]
    fn test_urgency_display() {
        assert_eq!(Urgency::Immediate.to_string(), "immediate");
        assert_eq!(Urgency::Routine.as_str(), "routine");
    }
}
