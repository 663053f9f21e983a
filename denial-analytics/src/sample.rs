//! Built-in demonstration datasets
//!
//! The figures mirror the dashboard's demo mode so analytics output can be
//! checked against known values without a claims feed.

use rust_decimal::Decimal;

use crate::models::{
    ArAgingBucket, DenialReason, DenialReasonCount, MonthlyDenialRate, PayerDenialPattern,
};

/// Monthly denial-rate series for a full calendar year (percent)
pub fn monthly_denial_rates() -> Vec<MonthlyDenialRate> {
    [
        ("Jan", 85),
        ("Feb", 80),
        ("Mar", 78),
        ("Apr", 75),
        ("May", 72),
        ("Jun", 70),
        ("Jul", 68),
        ("Aug", 65),
        ("Sep", 63),
        ("Oct", 60),
        ("Nov", 58),
        ("Dec", 55),
    ]
    .into_iter()
    .map(|(month, tenths)| MonthlyDenialRate {
        month: month.to_string(),
        rate_percent: Decimal::new(tenths, 1),
    })
    .collect()
}

/// Denial counts per reason category
pub fn denial_reason_counts() -> Vec<DenialReasonCount> {
    [
        (DenialReason::MissingInfo, 250),
        (DenialReason::NonCovered, 200),
        (DenialReason::AuthRequired, 150),
        (DenialReason::IncorrectCoding, 100),
        (DenialReason::Duplicate, 50),
        (DenialReason::Other, 90),
    ]
    .into_iter()
    .map(|(reason, denials)| DenialReasonCount { reason, denials })
    .collect()
}

/// Aged accounts-receivable buckets
pub fn ar_aging_buckets() -> Vec<ArAgingBucket> {
    [
        ("0-30 Days", 350_000),
        ("31-60 Days", 150_000),
        ("61-90 Days", 80_000),
        ("90+ Days", 45_000),
    ]
    .into_iter()
    .map(|(label, amount)| ArAgingBucket {
        label: label.to_string(),
        amount: Decimal::from(amount),
    })
    .collect()
}

/// Historical denial patterns per payer
pub fn payer_denial_patterns() -> Vec<PayerDenialPattern> {
    vec![
        PayerDenialPattern {
            payer: "Medicare".to_string(),
            denial_rate_percent: Decimal::from(15),
            common_reasons: vec![DenialReason::MissingInfo, DenialReason::NonCovered],
        },
        PayerDenialPattern {
            payer: "Blue Cross".to_string(),
            denial_rate_percent: Decimal::from(10),
            common_reasons: vec![DenialReason::AuthRequired, DenialReason::IncorrectCoding],
        },
        PayerDenialPattern {
            payer: "United Healthcare".to_string(),
            denial_rate_percent: Decimal::from(8),
            common_reasons: vec![DenialReason::Duplicate, DenialReason::MissingInfo],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_datasets_are_populated() {
        assert_eq!(monthly_denial_rates().len(), 12);
        assert_eq!(denial_reason_counts().len(), 6);
        assert_eq!(ar_aging_buckets().len(), 4);
        assert_eq!(payer_denial_patterns().len(), 3);
    }

    #[test]
    fn test_reason_labels_match_display_copy() {
        let labels: Vec<&str> = denial_reason_counts()
            .iter()
            .map(|c| c.reason.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Missing Info",
                "Non-Covered",
                "Auth Req",
                "Incorrect Coding",
                "Duplicate",
                "Other"
            ]
        );
    }
}
