use rust_decimal::Decimal;

use crate::models::{ClaimDraft, DiagnosisCode, InsurancePlan, ServiceType};

/// Pre-submission claim scrubber
///
/// Runs every check against the draft and collects one fixed warning per
/// matched check, in declaration order. Checks are independent; an invalid
/// amount does not suppress the later amount-based checks, which simply see
/// no parsable amount and stay silent.
pub struct ClaimScrubber;

impl ClaimScrubber {
    /// Create a new claim scrubber
    pub fn new() -> Self {
        Self
    }

    /// Scrub a claim draft, returning all warnings in check order.
    ///
    /// An empty result means the claim passed scrubbing.
    pub fn scrub(&self, draft: &ClaimDraft) -> Vec<String> {
        let mut warnings = Vec::new();
        let amount = draft.amount().ok();

        if draft.claim_id.trim().is_empty() {
            warnings.push("Claim ID is missing.".to_string());
        }
        if draft.patient_id.trim().is_empty() {
            warnings.push("Patient ID is missing.".to_string());
        }
        if amount.filter(|a| *a > Decimal::ZERO).is_none() {
            warnings.push("Claim Amount is invalid.".to_string());
        }
        if draft.service_type == ServiceType::Unselected {
            warnings.push("Service Type not selected.".to_string());
        }
        if draft.diagnosis_code == DiagnosisCode::Unselected {
            warnings.push("Diagnosis Code not selected.".to_string());
        }
        if draft.insurance_plan == InsurancePlan::Unselected {
            warnings.push("Insurance Plan not selected.".to_string());
        }

        if let Some(parsed) = amount {
            if parsed > Decimal::from(2000) && draft.diagnosis_code == DiagnosisCode::AcuteBronchitis
            {
                warnings.push(
                    "High claim amount for Acute Bronchitis. May require additional justification."
                        .to_string(),
                );
            }
            if draft.provider_id == "PROV123" && parsed > Decimal::from(1500) {
                warnings.push(
                    "Provider PROV123 has a history of high claim denials for amounts over $1500."
                        .to_string(),
                );
            }
        }

        warnings
    }
}

impl Default for ClaimScrubber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ClaimDraft {
        ClaimDraft {
            claim_id: "CLM-001".to_string(),
            patient_id: "PAT-001".to_string(),
            provider_id: "PROV456".to_string(),
            service_type: ServiceType::Consultation,
            diagnosis_code: DiagnosisCode::Type2Diabetes,
            claim_amount: "750".to_string(),
            insurance_plan: InsurancePlan::Medicare,
        }
    }

    #[test]
    fn test_valid_draft_passes_scrubbing() {
        let scrubber = ClaimScrubber::new();
        assert!(scrubber.scrub(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_produces_six_warnings_in_order() {
        let scrubber = ClaimScrubber::new();
        let warnings = scrubber.scrub(&ClaimDraft::default());
        assert_eq!(
            warnings,
            vec![
                "Claim ID is missing.",
                "Patient ID is missing.",
                "Claim Amount is invalid.",
                "Service Type not selected.",
                "Diagnosis Code not selected.",
                "Insurance Plan not selected.",
            ]
        );
    }

    #[test]
    fn test_zero_or_negative_amount_is_invalid() {
        let scrubber = ClaimScrubber::new();
        let mut draft = valid_draft();
        draft.claim_amount = "0".to_string();
        assert_eq!(scrubber.scrub(&draft), vec!["Claim Amount is invalid."]);

        draft.claim_amount = "-100".to_string();
        assert_eq!(scrubber.scrub(&draft), vec!["Claim Amount is invalid."]);
    }

    #[test]
    fn test_high_bronchitis_amount_warning() {
        let scrubber = ClaimScrubber::new();
        let mut draft = valid_draft();
        draft.diagnosis_code = DiagnosisCode::AcuteBronchitis;
        draft.claim_amount = "2500".to_string();
        assert_eq!(
            scrubber.scrub(&draft),
            vec!["High claim amount for Acute Bronchitis. May require additional justification."]
        );
    }

    #[test]
    fn test_flagged_provider_warning() {
        let scrubber = ClaimScrubber::new();
        let mut draft = valid_draft();
        draft.provider_id = "PROV123".to_string();
        draft.claim_amount = "1600".to_string();
        assert_eq!(
            scrubber.scrub(&draft),
            vec!["Provider PROV123 has a history of high claim denials for amounts over $1500."]
        );

        // At exactly 1500 the history flag stays quiet.
        draft.claim_amount = "1500".to_string();
        assert!(scrubber.scrub(&draft).is_empty());
    }

    #[test]
    fn test_checks_are_independent_and_ordered() {
        let scrubber = ClaimScrubber::new();
        let mut draft = valid_draft();
        draft.patient_id = String::new();
        draft.provider_id = "PROV123".to_string();
        draft.diagnosis_code = DiagnosisCode::AcuteBronchitis;
        draft.claim_amount = "2500".to_string();
        assert_eq!(
            scrubber.scrub(&draft),
            vec![
                "Patient ID is missing.",
                "High claim amount for Acute Bronchitis. May require additional justification.",
                "Provider PROV123 has a history of high claim denials for amounts over $1500.",
            ]
        );
    }

    #[test]
    fn test_unparsable_amount_skips_amount_rules() {
        let scrubber = ClaimScrubber::new();
        let mut draft = valid_draft();
        draft.provider_id = "PROV123".to_string();
        draft.claim_amount = "lots".to_string();
        assert_eq!(scrubber.scrub(&draft), vec!["Claim Amount is invalid."]);
    }
}
