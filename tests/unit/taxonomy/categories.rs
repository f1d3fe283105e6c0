//! Tests for the built-in category table and severity labels

#[cfg(test)]
mod tests {
    use lesionlens::taxonomy::Severity;
    use lesionlens::taxonomy::categories::{
        DEFAULT_CATEGORY_INDEX, LESION_CATEGORIES, STAGE_0, STAGE_4,
    };

    // Tests the table holds six categories in classifier output order
    // Verified by swapping two table entries
    #[test]
    fn test_category_order() {
        let names: Vec<&str> = LESION_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Melanoma",
                "Basal Cell Carcinoma",
                "Squamous Cell Carcinoma",
                "Actinic Keratosis",
                "Melanocytic Nevus",
                "Seborrheic Keratosis",
            ]
        );
    }

    // Tests the default entry is the common mole
    // Verified by pointing the default at melanoma
    #[test]
    fn test_default_is_common_mole() {
        let default = &LESION_CATEGORIES[DEFAULT_CATEGORY_INDEX];
        assert_eq!(default.name, "Melanocytic Nevus");
        assert_eq!(default.severity, Severity::Benign);
        assert!(!default.is_staged());
    }

    // Tests stage lists of the staged categories
    // Verified by dropping a stage from squamous cell carcinoma
    #[test]
    fn test_stage_lists() {
        let counts: Vec<usize> = LESION_CATEGORIES
            .iter()
            .map(|c| c.common_stages.len())
            .collect();
        assert_eq!(counts, vec![5, 3, 4, 0, 0, 0]);

        let melanoma = &LESION_CATEGORIES[0];
        assert_eq!(melanoma.common_stages.first(), Some(&STAGE_0));
        assert_eq!(melanoma.common_stages.last(), Some(&STAGE_4));
        assert_eq!(STAGE_0, "Stage 0 (in situ)");
    }

    // Tests only carcinomas and melanoma are malignant
    // Verified by marking actinic keratosis malignant
    #[test]
    fn test_severity_assignment() {
        let severities: Vec<Severity> = LESION_CATEGORIES.iter().map(|c| c.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Malignant,
                Severity::Malignant,
                Severity::Malignant,
                Severity::Suspicious,
                Severity::Benign,
                Severity::Benign,
            ]
        );
    }

    // Tests severity display text
    // Verified by lowercasing the labels
    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Benign.to_string(), "Benign");
        assert_eq!(Severity::Suspicious.to_string(), "Suspicious");
        assert_eq!(Severity::Malignant.label(), "Malignant");
    }

    // Tests risk labels are carried verbatim
    // Verified by editing a risk label
    #[test]
    fn test_risk_levels() {
        let risks: Vec<&str> = LESION_CATEGORIES.iter().map(|c| c.risk_level).collect();
        assert_eq!(
            risks,
            vec![
                "High",
                "Moderate",
                "Moderate to High",
                "Low to Moderate",
                "Very Low",
                "Very Low",
            ]
        );
    }
}
