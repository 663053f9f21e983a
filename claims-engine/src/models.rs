use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ClaimsError, ClaimsResult};

/// Service type selectable on the claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Unselected", alias = "one")]
    Unselected,
    Consultation,
    Procedure,
    #[serde(rename = "Diagnostic Test")]
    DiagnosticTest,
}

impl ServiceType {
    /// Display label used by the presentation layer's dropdown options
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Unselected => "",
            ServiceType::Consultation => "Consultation",
            ServiceType::Procedure => "Procedure",
            ServiceType::DiagnosticTest => "Diagnostic Test",
        }
    }

    /// Normalize a form value into the closed set.
    ///
    /// The form's placeholder sentinel and the empty string map to
    /// `Unselected`; anything else outside the set is rejected.
    pub fn from_label(value: &str) -> ClaimsResult<Self> {
        match value {
            "one" | "" | "Unselected" => Ok(ServiceType::Unselected),
            "Consultation" => Ok(ServiceType::Consultation),
            "Procedure" => Ok(ServiceType::Procedure),
            "Diagnostic Test" => Ok(ServiceType::DiagnosticTest),
            other => Err(ClaimsError::UnrecognizedValue {
                field: "service_type",
                value: other.to_string(),
            }),
        }
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        ServiceType::Unselected
    }
}

/// Diagnosis code selectable on the claim form (ICD-10 display labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosisCode {
    #[serde(rename = "Unselected", alias = "one")]
    Unselected,
    #[serde(rename = "J20.9 (Acute Bronchitis)")]
    AcuteBronchitis,
    #[serde(rename = "I10 (Essential Hypertension)")]
    EssentialHypertension,
    #[serde(rename = "E11.9 (Type 2 Diabetes)")]
    Type2Diabetes,
}

impl DiagnosisCode {
    /// Display label used by the presentation layer's dropdown options
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosisCode::Unselected => "",
            DiagnosisCode::AcuteBronchitis => "J20.9 (Acute Bronchitis)",
            DiagnosisCode::EssentialHypertension => "I10 (Essential Hypertension)",
            DiagnosisCode::Type2Diabetes => "E11.9 (Type 2 Diabetes)",
        }
    }

    /// Normalize a form value into the closed set.
    pub fn from_label(value: &str) -> ClaimsResult<Self> {
        match value {
            "one" | "" | "Unselected" => Ok(DiagnosisCode::Unselected),
            "J20.9 (Acute Bronchitis)" => Ok(DiagnosisCode::AcuteBronchitis),
            "I10 (Essential Hypertension)" => Ok(DiagnosisCode::EssentialHypertension),
            "E11.9 (Type 2 Diabetes)" => Ok(DiagnosisCode::Type2Diabetes),
            other => Err(ClaimsError::UnrecognizedValue {
                field: "diagnosis_code",
                value: other.to_string(),
            }),
        }
    }
}

impl Default for DiagnosisCode {
    fn default() -> Self {
        DiagnosisCode::Unselected
    }
}

/// Insurance plan selectable on the claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsurancePlan {
    #[serde(rename = "Unselected", alias = "one")]
    Unselected,
    Medicare,
    #[serde(rename = "Blue Cross")]
    BlueCross,
    #[serde(rename = "United Healthcare")]
    UnitedHealthcare,
}

impl InsurancePlan {
    /// Display label used by the presentation layer's dropdown options
    pub fn label(&self) -> &'static str {
        match self {
            InsurancePlan::Unselected => "",
            InsurancePlan::Medicare => "Medicare",
            InsurancePlan::BlueCross => "Blue Cross",
            InsurancePlan::UnitedHealthcare => "United Healthcare",
        }
    }

    /// Normalize a form value into the closed set.
    pub fn from_label(value: &str) -> ClaimsResult<Self> {
        match value {
            "one" | "" | "Unselected" => Ok(InsurancePlan::Unselected),
            "Medicare" => Ok(InsurancePlan::Medicare),
            "Blue Cross" => Ok(InsurancePlan::BlueCross),
            "United Healthcare" => Ok(InsurancePlan::UnitedHealthcare),
            other => Err(ClaimsError::UnrecognizedValue {
                field: "insurance_plan",
                value: other.to_string(),
            }),
        }
    }
}

impl Default for InsurancePlan {
    fn default() -> Self {
        InsurancePlan::Unselected
    }
}

/// Claim draft captured from the prediction form
///
/// Transient per-session value; the amount is kept as the raw form text so
/// parse failures stay visible to every check that needs the amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub claim_id: String,
    pub patient_id: String,
    pub provider_id: String,
    pub service_type: ServiceType,
    pub diagnosis_code: DiagnosisCode,
    pub claim_amount: String,
    pub insurance_plan: InsurancePlan,
}

impl ClaimDraft {
    /// Parse the raw claim amount field.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError::InvalidAmount` when the field is empty or not a
    /// decimal number.
    pub fn amount(&self) -> ClaimsResult<Decimal> {
        self.claim_amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ClaimsError::InvalidAmount(self.claim_amount.clone()))
    }

    /// Parse the raw claim amount field, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError::InvalidAmount` when the field does not parse or
    /// the parsed amount is zero or negative.
    pub fn positive_amount(&self) -> ClaimsResult<Decimal> {
        let amount = self.amount()?;
        if amount <= Decimal::ZERO {
            return Err(ClaimsError::InvalidAmount(self.claim_amount.clone()));
        }
        Ok(amount)
    }
}

/// Denial risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Result of a denial risk assessment
///
/// `explanation` is always non-empty and `recommendations` always carries at
/// least one entry, for every tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk: RiskTier,
    pub explanation: String,
    pub recommendations: Vec<String>,
}
