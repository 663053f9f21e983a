use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ClaimsResult;
use crate::models::{ClaimDraft, RiskAssessment};
use crate::payer_rules::PayerRuleTable;
use crate::responsibility::ResponsibilityEstimator;
use crate::risk::RiskScorer;
use crate::scrubbing::ClaimScrubber;

/// Claim insights service
///
/// Draft-level facade the presentation shell calls. Holds the payer rule
/// table and the stateless decision components; every method takes the draft
/// by reference and returns a fresh result, so calls are independent and
/// safe from any thread.
pub struct ClaimInsightsService {
    rules: PayerRuleTable,
    scorer: RiskScorer,
    scrubber: ClaimScrubber,
    estimator: ResponsibilityEstimator,
}

impl ClaimInsightsService {
    /// Create a service backed by the built-in payer rule table
    pub fn new() -> Self {
        Self::with_rules(PayerRuleTable::default())
    }

    /// Create a service backed by an explicit payer rule table
    pub fn with_rules(rules: PayerRuleTable) -> Self {
        Self {
            rules,
            scorer: RiskScorer::new(),
            scrubber: ClaimScrubber::new(),
            estimator: ResponsibilityEstimator::new(),
        }
    }

    /// The payer rule table backing guidance lookups
    pub fn rules(&self) -> &PayerRuleTable {
        &self.rules
    }

    /// Predict the denial risk for a claim draft.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError::InvalidAmount` when the draft's amount field
    /// does not parse; risk rules are never evaluated against an undefined
    /// amount.
    pub fn predict_denial_risk(&self, draft: &ClaimDraft) -> ClaimsResult<RiskAssessment> {
        let amount = draft.amount()?;
        let assessment = self.scorer.assess(amount, draft.diagnosis_code);
        debug!(
            claim_id = %draft.claim_id,
            risk = ?assessment.risk,
            "assessed denial risk"
        );
        Ok(assessment)
    }

    /// Scrub a claim draft for likely rejection triggers.
    pub fn scrub_claim(&self, draft: &ClaimDraft) -> Vec<String> {
        let warnings = self.scrubber.scrub(draft);
        debug!(
            claim_id = %draft.claim_id,
            warning_count = warnings.len(),
            "scrubbed claim draft"
        );
        warnings
    }

    /// Payer guidance for the draft's plan and diagnosis selection.
    pub fn payer_guidance(&self, draft: &ClaimDraft) -> &str {
        self.rules
            .guidance(draft.insurance_plan.label(), draft.diagnosis_code.label())
    }

    /// Estimate the patient's financial responsibility for the draft.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError::InvalidAmount` when the draft's amount field is
    /// missing, does not parse, or is not positive.
    pub fn estimate_responsibility(&self, draft: &ClaimDraft) -> ClaimsResult<Decimal> {
        let amount = draft.positive_amount()?;
        let owed = self.estimator.estimate(amount, draft.insurance_plan)?;
        debug!(claim_id = %draft.claim_id, owed = %owed, "estimated patient responsibility");
        Ok(owed)
    }
}

impl Default for ClaimInsightsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClaimsError;
    use crate::models::{DiagnosisCode, InsurancePlan, RiskTier, ServiceType};

    fn draft() -> ClaimDraft {
        ClaimDraft {
            claim_id: "CLM-1001".to_string(),
            patient_id: "PAT-2002".to_string(),
            provider_id: "PROV456".to_string(),
            service_type: ServiceType::Procedure,
            diagnosis_code: DiagnosisCode::EssentialHypertension,
            claim_amount: "2500".to_string(),
            insurance_plan: InsurancePlan::Medicare,
        }
    }

    #[test]
    fn test_predict_rejects_unparsable_amount() {
        let service = ClaimInsightsService::new();
        let mut d = draft();
        d.claim_amount = "abc".to_string();
        assert!(matches!(
            service.predict_denial_risk(&d),
            Err(ClaimsError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_predict_uses_parsed_amount() {
        let service = ClaimInsightsService::new();
        let assessment = service.predict_denial_risk(&draft()).unwrap();
        assert_eq!(assessment.risk, RiskTier::High);
    }

    #[test]
    fn test_guidance_keys_off_draft_labels() {
        let service = ClaimInsightsService::new();
        let guidance = service.payer_guidance(&draft());
        assert!(guidance.contains("chronic conditions like hypertension"));
    }

    #[test]
    fn test_custom_rule_table_is_used() {
        let table = PayerRuleTable {
            plans: std::collections::HashMap::new(),
            default: "Custom default.".to_string(),
        };
        let service = ClaimInsightsService::with_rules(table);
        assert_eq!(service.payer_guidance(&draft()), "Custom default.");
    }

    #[test]
    fn test_estimate_responsibility_for_draft() {
        let service = ClaimInsightsService::new();
        let owed = service.estimate_responsibility(&draft()).unwrap();
        assert_eq!(owed, Decimal::from(500));
    }
}
