use rust_decimal::Decimal;

use crate::models::{DiagnosisCode, RiskAssessment, RiskTier};

/// Denial risk scorer for claim drafts
///
/// Applies the historical denial rules as an ordered sequence of overrides:
/// every rule whose predicate holds overwrites the running result, so the
/// last matching rule in declaration order determines the outcome. The
/// amount-over-5000 rule is declared last and therefore wins whenever it
/// matches, including against the bronchitis rule's Medium result.
pub struct RiskScorer;

impl RiskScorer {
    /// Create a new risk scorer
    pub fn new() -> Self {
        Self
    }

    /// Assess the denial risk for a parsed claim amount and diagnosis.
    pub fn assess(&self, amount: Decimal, diagnosis: DiagnosisCode) -> RiskAssessment {
        let mut risk = RiskTier::Low;
        let mut explanation = "This claim has a low risk of denial based on historical data.";
        let mut recommendations: &[&str] = &[
            "Ensure all documentation is accurate and complete.",
            "Submit the claim promptly.",
        ];

        if amount > Decimal::from(1000) && diagnosis == DiagnosisCode::AcuteBronchitis {
            risk = RiskTier::Medium;
            explanation =
                "The claim amount is somewhat high for this diagnosis, which could raise flags.";
            recommendations = &[
                "Verify the diagnosis code and procedure code for accuracy.",
                "Review the claim amount and ensure it aligns with standard pricing.",
                "Consider adding additional supporting documentation if available.",
            ];
        }
        if amount > Decimal::from(2000) && diagnosis == DiagnosisCode::EssentialHypertension {
            risk = RiskTier::High;
            explanation = "This claim has a high risk of denial due to a combination of high claim amount and a diagnosis code that frequently leads to denials for this service type.";
            recommendations = &[
                "Verify the diagnosis code and procedure code for accuracy.",
                "Review the claim amount and ensure it aligns with standard pricing.",
                "Consider contacting the provider to clarify any discrepancies.",
                "Prepare for potential appeals or requests for additional information.",
            ];
        }
        if amount > Decimal::from(5000) {
            risk = RiskTier::High;
            explanation = "The claim amount is significantly higher than average, which is a common flag for denials.";
            recommendations = &[
                "Thoroughly review all aspects of the claim for accuracy.",
                "Gather all supporting medical records and documentation.",
                "Consider pre-authorization if not already obtained.",
            ];
        }

        RiskAssessment {
            risk,
            explanation: explanation.to_string(),
            recommendations: recommendations.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
