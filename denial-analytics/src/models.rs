use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claim processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Submitted,
    Pending,
    Approved,
    Denied,
    Appealed,
}

/// Denial reason category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    MissingInfo,
    NonCovered,
    AuthRequired,
    IncorrectCoding,
    Duplicate,
    Other,
}

impl DenialReason {
    /// Short display label used in denial breakdown views
    pub fn label(&self) -> &'static str {
        match self {
            DenialReason::MissingInfo => "Missing Info",
            DenialReason::NonCovered => "Non-Covered",
            DenialReason::AuthRequired => "Auth Req",
            DenialReason::IncorrectCoding => "Incorrect Coding",
            DenialReason::Duplicate => "Duplicate",
            DenialReason::Other => "Other",
        }
    }
}

/// Processed claim record used for denial and revenue analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: Uuid,
    pub claim_id: String,
    pub payer: String,
    pub amount: Decimal,
    pub status: ClaimStatus,
    /// Set when `status` is `Denied`; `None` otherwise
    pub denial_reason: Option<DenialReason>,
    pub service_date: DateTime<Utc>,
}

impl ClaimRecord {
    pub fn new(claim_id: &str, payer: &str, amount: Decimal, status: ClaimStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            claim_id: claim_id.to_string(),
            payer: payer.to_string(),
            amount,
            status,
            denial_reason: None,
            service_date: Utc::now(),
        }
    }

    pub fn with_denial_reason(mut self, reason: DenialReason) -> Self {
        self.denial_reason = Some(reason);
        self
    }

    pub fn with_service_date(mut self, service_date: DateTime<Utc>) -> Self {
        self.service_date = service_date;
        self
    }
}

/// Raw denial count for a reason category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenialReasonCount {
    pub reason: DenialReason,
    pub denials: u64,
}

/// Denial count with its share of all denials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenialReasonBreakdown {
    pub reason: DenialReason,
    pub denials: u64,
    pub share_percent: Decimal,
}

/// One point of the monthly denial-rate series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyDenialRate {
    pub month: String,
    pub rate_percent: Decimal,
}

/// First-to-last movement of a denial-rate series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTrend {
    pub start_percent: Decimal,
    pub end_percent: Decimal,
    pub delta_percent: Decimal,
}

/// Aged accounts-receivable bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArAgingBucket {
    pub label: String,
    pub amount: Decimal,
}

/// Historical denial behavior for one payer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayerDenialPattern {
    pub payer: String,
    pub denial_rate_percent: Decimal,
    pub common_reasons: Vec<DenialReason>,
}
