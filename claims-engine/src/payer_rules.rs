use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Guidance rules for a single payer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRules {
    /// Guidance keyed by diagnosis display label
    #[serde(default)]
    pub by_diagnosis: HashMap<String, String>,
    /// Fallback guidance when the diagnosis has no specific rule
    pub default: String,
}

/// Payer guidance table
///
/// Passed explicitly into the engine rather than read from ambient state, so
/// alternate tables (including ones deserialized from JSON) drive lookups
/// deterministically. `Default` carries the built-in table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayerRuleTable {
    /// Per-payer rules keyed by plan display label
    #[serde(default)]
    pub plans: HashMap<String, PlanRules>,
    /// Fallback guidance when the plan is not recognized
    pub default: String,
}

impl PayerRuleTable {
    /// Look up guidance for a plan and diagnosis.
    ///
    /// Total over arbitrary strings: an unrecognized plan falls back to the
    /// table's global default, and a recognized plan with an unrecognized
    /// diagnosis falls back to that plan's own default.
    pub fn guidance(&self, plan: &str, diagnosis: &str) -> &str {
        match self.plans.get(plan) {
            Some(rules) => rules
                .by_diagnosis
                .get(diagnosis)
                .map_or(rules.default.as_str(), String::as_str),
            None => self.default.as_str(),
        }
    }
}

impl Default for PayerRuleTable {
    fn default() -> Self {
        let mut plans = HashMap::new();

        plans.insert(
            "Medicare".to_string(),
            PlanRules {
                by_diagnosis: HashMap::from([
                    (
                        "J20.9 (Acute Bronchitis)".to_string(),
                        "Medicare often requires detailed documentation for acute conditions to ensure medical necessity. Claims over $1000 for this code may be flagged.".to_string(),
                    ),
                    (
                        "I10 (Essential Hypertension)".to_string(),
                        "For chronic conditions like hypertension, ensure regular follow-up notes are included. High claim amounts without clear justification may lead to denial.".to_string(),
                    ),
                ]),
                default: "Always verify patient eligibility and benefits prior to service for Medicare claims.".to_string(),
            },
        );
        plans.insert(
            "Blue Cross".to_string(),
            PlanRules {
                by_diagnosis: HashMap::from([
                    (
                        "J20.9 (Acute Bronchitis)".to_string(),
                        "Blue Cross may have specific preferred providers or require referrals for certain acute care services.".to_string(),
                    ),
                    (
                        "I10 (Essential Hypertension)".to_string(),
                        "Prior authorization might be required for certain procedures related to hypertension management, especially for new treatments.".to_string(),
                    ),
                ]),
                default: "Check for any specific Blue Cross plan exclusions or limitations for the service type.".to_string(),
            },
        );
        plans.insert(
            "United Healthcare".to_string(),
            PlanRules {
                by_diagnosis: HashMap::from([
                    (
                        "J20.9 (Acute Bronchitis)".to_string(),
                        "United Healthcare often has strict timely filing limits. Ensure claims are submitted promptly.".to_string(),
                    ),
                    (
                        "I10 (Essential Hypertension)".to_string(),
                        "For chronic disease management, United Healthcare emphasizes coordinated care. Missing referral information can lead to denials.".to_string(),
                    ),
                ]),
                default: "Review United Healthcare's specific coding guidelines for the procedure performed.".to_string(),
            },
        );

        Self {
            plans,
            default: "Always check the payer's specific guidelines and documentation requirements for the selected diagnosis and service.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_plan_and_diagnosis() {
        let table = PayerRuleTable::default();
        let guidance = table.guidance("Medicare", "J20.9 (Acute Bronchitis)");
        assert_eq!(
            guidance,
            "Medicare often requires detailed documentation for acute conditions to ensure medical necessity. Claims over $1000 for this code may be flagged."
        );
    }

    #[test]
    fn test_known_plan_unknown_diagnosis_uses_plan_default() {
        let table = PayerRuleTable::default();
        assert_eq!(
            table.guidance("Blue Cross", "E11.9 (Type 2 Diabetes)"),
            "Check for any specific Blue Cross plan exclusions or limitations for the service type."
        );
    }

    #[test]
    fn test_unknown_plan_uses_global_default() {
        let table = PayerRuleTable::default();
        assert_eq!(
            table.guidance("UnknownPlan", "UnknownCode"),
            "Always check the payer's specific guidelines and documentation requirements for the selected diagnosis and service."
        );
    }

    #[test]
    fn test_unselected_labels_fall_through_defaults() {
        let table = PayerRuleTable::default();
        // An unselected plan has an empty label, which no plan entry matches.
        assert_eq!(table.guidance("", ""), table.default.as_str());
        // A selected plan with an unselected diagnosis gets the plan default.
        assert_eq!(
            table.guidance("Medicare", ""),
            "Always verify patient eligibility and benefits prior to service for Medicare claims."
        );
    }

    #[test]
    fn test_table_deserializes_from_json() {
        let json = r#"{
            "plans": {
                "Acme Health": {
                    "by_diagnosis": { "J20.9 (Acute Bronchitis)": "Attach chest X-ray findings." },
                    "default": "Acme requires electronic submission."
                }
            },
            "default": "No payer rules configured."
        }"#;
        let table: PayerRuleTable = serde_json::from_str(json).unwrap();
        assert_eq!(
            table.guidance("Acme Health", "J20.9 (Acute Bronchitis)"),
            "Attach chest X-ray findings."
        );
        assert_eq!(
            table.guidance("Acme Health", "I10 (Essential Hypertension)"),
            "Acme requires electronic submission."
        );
        assert_eq!(table.guidance("Medicare", "anything"), "No payer rules configured.");
    }
}
