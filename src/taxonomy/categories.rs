//! Built-in skin lesion categories with severity, risk and staging metadata

use std::fmt;

/// How dangerous a lesion category is considered to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Harmless growths
    Benign,
    /// Precancerous or otherwise worth watching
    Suspicious,
    /// Cancerous
    Malignant,
}

impl Severity {
    /// Display label for this severity
    pub const fn label(self) -> &'static str {
        match self {
            Self::Benign => "Benign",
            Self::Suspicious => "Suspicious",
            Self::Malignant => "Malignant",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Carcinoma in situ
pub const STAGE_0: &str = "Stage 0 (in situ)";
/// Stage I cancer
pub const STAGE_1: &str = "Stage I";
/// Stage II cancer
pub const STAGE_2: &str = "Stage II";
/// Stage III cancer
pub const STAGE_3: &str = "Stage III";
/// Stage IV cancer
pub const STAGE_4: &str = "Stage IV";

/// Static description of one lesion category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LesionCategory {
    /// Display name, also the label the classifier reports
    pub name: &'static str,
    /// Severity class
    pub severity: Severity,
    /// One-sentence description
    pub description: &'static str,
    /// Human-readable risk label
    pub risk_level: &'static str,
    /// Ordered stage labels, empty for categories that are not staged
    pub common_stages: &'static [&'static str],
}

impl LesionCategory {
    /// Whether this category carries any stage labels
    pub const fn is_staged(&self) -> bool {
        !self.common_stages.is_empty()
    }
}

/// Index of the default category in [`LESION_CATEGORIES`]
pub const DEFAULT_CATEGORY_INDEX: usize = 4;

/// The built-in taxonomy, in classifier output order
pub static LESION_CATEGORIES: [LesionCategory; 6] = [
    LesionCategory {
        name: "Melanoma",
        severity: Severity::Malignant,
        description: "The most serious type of skin cancer that begins in melanocytes.",
        risk_level: "High",
        common_stages: &[STAGE_0, STAGE_1, STAGE_2, STAGE_3, STAGE_4],
    },
    LesionCategory {
        name: "Basal Cell Carcinoma",
        severity: Severity::Malignant,
        description: "The most common type of skin cancer, usually highly treatable.",
        risk_level: "Moderate",
        common_stages: &[STAGE_0, STAGE_1, STAGE_2],
    },
    LesionCategory {
        name: "Squamous Cell Carcinoma",
        severity: Severity::Malignant,
        description: "The second most common type of skin cancer.",
        risk_level: "Moderate to High",
        common_stages: &[STAGE_0, STAGE_1, STAGE_2, STAGE_3],
    },
    LesionCategory {
        name: "Actinic Keratosis",
        severity: Severity::Suspicious,
        description: "Precancerous growths that may develop into squamous cell carcinoma.",
        risk_level: "Low to Moderate",
        common_stages: &[],
    },
    LesionCategory {
        name: "Melanocytic Nevus",
        severity: Severity::Benign,
        description: "Common moles that are usually harmless but should be monitored for changes.",
        risk_level: "Very Low",
        common_stages: &[],
    },
    LesionCategory {
        name: "Seborrheic Keratosis",
        severity: Severity::Benign,
        description: "Benign skin growths that commonly appear with age.",
        risk_level: "Very Low",
        common_stages: &[],
    },
];
