use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{
    ArAgingBucket, ClaimRecord, ClaimStatus, DenialReason, DenialReasonBreakdown,
    DenialReasonCount, MonthlyDenialRate, PayerDenialPattern, RateTrend,
};

/// Denial and revenue analytics over claim records
///
/// All computations are pure folds over the caller's data; nothing is cached
/// between calls.
pub struct DenialAnalytics;

impl DenialAnalytics {
    /// Create a new analytics instance
    pub fn new() -> Self {
        Self
    }

    /// Share of claims denied, as a percentage rounded to one decimal.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyDataset` when `claims` is empty.
    pub fn denial_rate_percent(&self, claims: &[ClaimRecord]) -> AnalyticsResult<Decimal> {
        if claims.is_empty() {
            return Err(AnalyticsError::EmptyDataset(
                "no claims in period".to_string(),
            ));
        }
        let denied = claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Denied)
            .count();
        let rate = Decimal::from(denied) / Decimal::from(claims.len()) * Decimal::from(100);
        debug!(total = claims.len(), denied, "computed denial rate");
        Ok(rate.round_dp(1))
    }

    /// Total billed amount across denied claims.
    pub fn denied_amount(&self, claims: &[ClaimRecord]) -> Decimal {
        claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Denied)
            .map(|c| c.amount)
            .sum()
    }

    /// Denial counts per reason over the records, descending by count.
    ///
    /// Denied claims without a recorded reason are counted under
    /// `DenialReason::Other`. An input with no denied claims yields an empty
    /// breakdown.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyDataset` when `claims` is empty.
    pub fn reason_breakdown(
        &self,
        claims: &[ClaimRecord],
    ) -> AnalyticsResult<Vec<DenialReasonBreakdown>> {
        if claims.is_empty() {
            return Err(AnalyticsError::EmptyDataset(
                "no claims in period".to_string(),
            ));
        }

        let mut by_reason: HashMap<DenialReason, u64> = HashMap::new();
        for claim in claims.iter().filter(|c| c.status == ClaimStatus::Denied) {
            let reason = claim.denial_reason.unwrap_or(DenialReason::Other);
            *by_reason.entry(reason).or_insert(0) += 1;
        }

        let counts: Vec<DenialReasonCount> = by_reason
            .into_iter()
            .map(|(reason, denials)| DenialReasonCount { reason, denials })
            .collect();
        if counts.is_empty() {
            return Ok(Vec::new());
        }
        self.reason_shares(&counts)
    }

    /// Attach each reason's share of all denials to the raw counts,
    /// descending by count. Shares are percentages rounded to two decimals.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyDataset` when the counts sum to zero.
    pub fn reason_shares(
        &self,
        counts: &[DenialReasonCount],
    ) -> AnalyticsResult<Vec<DenialReasonBreakdown>> {
        let total: u64 = counts.iter().map(|c| c.denials).sum();
        if total == 0 {
            return Err(AnalyticsError::EmptyDataset(
                "no denials recorded".to_string(),
            ));
        }

        let mut breakdown: Vec<DenialReasonBreakdown> = counts
            .iter()
            .map(|c| DenialReasonBreakdown {
                reason: c.reason,
                denials: c.denials,
                share_percent: (Decimal::from(c.denials) / Decimal::from(total)
                    * Decimal::from(100))
                .round_dp(2),
            })
            .collect();
        breakdown.sort_by(|a, b| b.denials.cmp(&a.denials));
        Ok(breakdown)
    }

    /// First-to-last movement of a monthly denial-rate series.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyDataset` when the series is empty.
    pub fn rate_trend(&self, series: &[MonthlyDenialRate]) -> AnalyticsResult<RateTrend> {
        let (first, last) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(AnalyticsError::EmptyDataset(
                    "no denial-rate series".to_string(),
                ))
            }
        };
        Ok(RateTrend {
            start_percent: first.rate_percent,
            end_percent: last.rate_percent,
            delta_percent: last.rate_percent - first.rate_percent,
        })
    }

    /// Total outstanding amount across aged A/R buckets.
    pub fn ar_aging_total(&self, buckets: &[ArAgingBucket]) -> Decimal {
        buckets.iter().map(|b| b.amount).sum()
    }

    /// The payer with the highest historical denial rate, if any.
    pub fn riskiest_payer<'a>(
        &self,
        patterns: &'a [PayerDenialPattern],
    ) -> Option<&'a PayerDenialPattern> {
        patterns.iter().max_by_key(|p| p.denial_rate_percent)
    }
}

impl Default for DenialAnalytics {
    fn default() -> Self {
        Self::new()
    }
}
