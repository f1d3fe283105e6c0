//! Ordered first-match-wins rule tables for staging and urgency
//!
//! Both tables are evaluated top to bottom. The rules overlap on purpose, so
//! their order is part of their meaning.

use crate::taxonomy::Severity;
use std::fmt;

/// Confidence band mapping to a preferred stage index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBand {
    /// The band applies when confidence is strictly above this value
    pub above: f64,
    /// Preferred stage index, clamped to the last available stage
    pub stage_index: usize,
}

/// Stage bands, most restrictive first
pub const STAGE_BANDS: [StageBand; 3] = [
    StageBand {
        above: 0.9,
        stage_index: 3,
    },
    StageBand {
        above: 0.7,
        stage_index: 2,
    },
    StageBand {
        above: 0.1,
        stage_index: 1,
    },
];

/// Stage index used when no band matches
pub const FALLBACK_STAGE_INDEX: usize = 0;

/// Pick a stage index for a category with `stage_count` stages
///
/// Returns `None` for unstaged categories. NaN confidence matches no band.
pub fn stage_index(confidence: f64, stage_count: usize) -> Option<usize> {
    let last_index = stage_count.checked_sub(1)?;
    let preferred = STAGE_BANDS
        .iter()
        .find(|band| confidence > band.above)
        .map_or(FALLBACK_STAGE_INDEX, |band| band.stage_index);
    Some(preferred.min(last_index))
}

/// How soon the user should seek care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Seek medical attention now
    Immediate,
    /// See a dermatologist as soon as possible
    Urgent,
    /// Watch for changes and book a routine check-up
    Monitor,
    /// Ordinary skin care
    Routine,
}

impl Urgency {
    /// Canned recommendation sentence for this urgency level
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Immediate => {
                "Seek immediate medical attention. This analysis suggests a high probability of malignant cancer."
            }
            Self::Urgent => {
                "Schedule an appointment with a dermatologist as soon as possible for proper evaluation."
            }
            Self::Monitor => {
                "Monitor for changes and schedule a routine check-up with a healthcare provider."
            }
            Self::Routine => "Continue regular skin checks and practice sun protection.",
        }
    }

    /// Lowercase name of the level
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Urgent => "urgent",
            Self::Monitor => "monitor",
            Self::Routine => "routine",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One urgency rule: a predicate over severity and confidence
#[derive(Clone, Copy)]
pub struct UrgencyRule {
    /// Whether the rule matches
    pub applies: fn(Severity, f64) -> bool,
    /// Urgency assigned when it does
    pub urgency: Urgency,
}

impl fmt::Debug for UrgencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrgencyRule")
            .field("urgency", &self.urgency)
            .finish_non_exhaustive()
    }
}

fn confident_malignant(severity: Severity, confidence: f64) -> bool {
    severity == Severity::Malignant && confidence > 0.7
}

fn malignant_or_confident_suspicious(severity: Severity, confidence: f64) -> bool {
    severity == Severity::Malignant || (severity == Severity::Suspicious && confidence > 0.8)
}

fn suspicious_or_very_confident(severity: Severity, confidence: f64) -> bool {
    severity == Severity::Suspicious || confidence > 0.9
}

/// Urgency rules in evaluation order
pub const URGENCY_RULES: [UrgencyRule; 3] = [
    UrgencyRule {
        applies: confident_malignant,
        urgency: Urgency::Immediate,
    },
    UrgencyRule {
        applies: malignant_or_confident_suspicious,
        urgency: Urgency::Urgent,
    },
    UrgencyRule {
        applies: suspicious_or_very_confident,
        urgency: Urgency::Monitor,
    },
];

/// Urgency used when no rule matches
pub const FALLBACK_URGENCY: Urgency = Urgency::Routine;

/// Classify urgency from a category severity and the top confidence
pub fn classify_urgency(severity: Severity, confidence: f64) -> Urgency {
    URGENCY_RULES
        .iter()
        .find(|rule| (rule.applies)(severity, confidence))
        .map_or(FALLBACK_URGENCY, |rule| rule.urgency)
}
