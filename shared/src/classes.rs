use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::ClassificationResult;

/// Clinical severity grade of diabetic retinopathy, ordered by urgency.
/// Every severity drives its own visual treatment; matches over this enum
/// are exhaustive on purpose so an unmapped grade cannot slip through.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
    Proliferative,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Proliferative => "proliferative",
        }
    }

    /// Upper-cased token used in the downloadable report.
    pub fn report_token(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// CSS class that styles the primary result card.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::None => "severity-none",
            Severity::Mild => "severity-mild",
            Severity::Moderate => "severity-moderate",
            Severity::Severe => "severity-severe",
            Severity::Proliferative => "severity-proliferative",
        }
    }

    /// CSS class for the marker dot on the severity scale.
    pub fn dot_class(&self) -> &'static str {
        match self {
            Severity::None => "dot-none",
            Severity::Mild => "dot-mild",
            Severity::Moderate => "dot-moderate",
            Severity::Severe => "dot-severe",
            Severity::Proliferative => "dot-proliferative",
        }
    }

    /// Font Awesome icon shown next to the classification.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::None => "fa-solid fa-circle-check",
            Severity::Mild => "fa-solid fa-eye",
            Severity::Moderate => "fa-solid fa-triangle-exclamation",
            Severity::Severe => "fa-solid fa-triangle-exclamation",
            Severity::Proliferative => "fa-solid fa-circle-xmark",
        }
    }

    /// Short label on the severity scale in the results sidebar.
    pub fn scale_label(&self) -> &'static str {
        match self {
            Severity::None => "No DR",
            Severity::Mild => "Mild DR",
            Severity::Moderate => "Moderate DR",
            Severity::Severe => "Severe DR",
            Severity::Proliferative => "Proliferative DR",
        }
    }
}

/// How soon follow-up care is needed for a given classification. Part of
/// the inference service's wire contract.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Moderate,
    Urgent,
    Emergency,
}

/// One row of the fixed demo classification table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceEntry {
    pub class_name: &'static str,
    pub confidence: f32,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub urgency: Urgency,
}

impl ReferenceEntry {
    pub fn to_result(&self) -> ClassificationResult {
        ClassificationResult {
            class_name: self.class_name.to_string(),
            confidence: self.confidence,
            severity: self.severity,
            description: self.description.to_string(),
            recommendation: self.recommendation.to_string(),
        }
    }
}

/// The demo path's classification table: exactly one entry per severity
/// grade, values fixed.
pub const REFERENCE_RESULTS: [ReferenceEntry; 5] = [
    ReferenceEntry {
        class_name: "No Diabetic Retinopathy",
        confidence: 94.2,
        severity: Severity::None,
        description: "No signs of diabetic retinopathy detected in the retinal image.",
        recommendation: "Continue regular eye examinations as recommended by your healthcare provider.",
        urgency: Urgency::Routine,
    },
    ReferenceEntry {
        class_name: "Mild Diabetic Retinopathy",
        confidence: 87.5,
        severity: Severity::Mild,
        description: "Early signs of diabetic retinopathy detected with minimal retinal changes.",
        recommendation: "Schedule follow-up examination in 6-12 months. Continue diabetes management.",
        urgency: Urgency::Routine,
    },
    ReferenceEntry {
        class_name: "Moderate Diabetic Retinopathy",
        confidence: 91.8,
        severity: Severity::Moderate,
        description: "Moderate diabetic changes present. Closer monitoring recommended.",
        recommendation: "Schedule follow-up examination in 3-6 months. Optimize diabetes control.",
        urgency: Urgency::Moderate,
    },
    ReferenceEntry {
        class_name: "Severe Diabetic Retinopathy",
        confidence: 89.3,
        severity: Severity::Severe,
        description: "Severe diabetic retinopathy detected. Immediate medical attention required.",
        recommendation: "Urgent referral to retinal specialist within 1-2 weeks.",
        urgency: Urgency::Urgent,
    },
    ReferenceEntry {
        class_name: "Proliferative Diabetic Retinopathy",
        confidence: 93.7,
        severity: Severity::Proliferative,
        description: "Advanced diabetic retinopathy with new blood vessel formation detected.",
        recommendation: "URGENT: Immediate referral to retinal specialist for treatment.",
        urgency: Urgency::Emergency,
    },
];

/// Maps a draw from the unit interval onto a table entry. The clamp keeps
/// a draw of exactly 1.0 in range.
pub fn pick_reference(unit: f64) -> &'static ReferenceEntry {
    let len = REFERENCE_RESULTS.len();
    let index = ((unit * len as f64) as usize).min(len - 1);
    &REFERENCE_RESULTS[index]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn severity_grades_are_ordered_by_urgency() {
        assert!(Severity::None < Severity::Mild);
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert!(Severity::Severe < Severity::Proliferative);
    }

    #[test]
    fn every_severity_has_a_distinct_card_treatment() {
        let classes: HashSet<_> = Severity::iter().map(|s| s.css_class()).collect();
        assert_eq!(classes.len(), 5);
        let dots: HashSet<_> = Severity::iter().map(|s| s.dot_class()).collect();
        assert_eq!(dots.len(), 5);
        let labels: HashSet<_> = Severity::iter().map(|s| s.scale_label()).collect();
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn severity_round_trips_through_wire_format() {
        for severity in Severity::iter() {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
            let back: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, severity);
        }
    }

    #[test]
    fn reference_table_covers_each_severity_exactly_once() {
        let severities: HashSet<_> = REFERENCE_RESULTS.iter().map(|e| e.severity).collect();
        assert_eq!(severities.len(), REFERENCE_RESULTS.len());
        for severity in Severity::iter() {
            assert!(severities.contains(&severity), "missing {severity:?}");
        }
    }

    #[test]
    fn reference_confidences_match_the_fixed_table() {
        let confidences: Vec<f32> = REFERENCE_RESULTS.iter().map(|e| e.confidence).collect();
        assert_eq!(confidences, vec![94.2, 87.5, 91.8, 89.3, 93.7]);
    }

    #[test]
    fn pick_reference_reaches_every_entry_and_stays_in_range() {
        assert_eq!(pick_reference(0.0).severity, Severity::None);
        assert_eq!(pick_reference(0.21).severity, Severity::Mild);
        assert_eq!(pick_reference(0.5).severity, Severity::Moderate);
        assert_eq!(pick_reference(0.65).severity, Severity::Severe);
        assert_eq!(pick_reference(0.99).severity, Severity::Proliferative);
        // a draw of exactly 1.0 must not index past the table
        assert_eq!(pick_reference(1.0).severity, Severity::Proliferative);
    }

    #[test]
    fn to_result_carries_every_field() {
        let entry = &REFERENCE_RESULTS[1];
        let result = entry.to_result();
        assert_eq!(result.class_name, "Mild Diabetic Retinopathy");
        assert_eq!(result.confidence, 87.5);
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.description, entry.description);
        assert_eq!(result.recommendation, entry.recommendation);
    }
}
