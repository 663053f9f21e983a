use rust_decimal::Decimal;

use crate::error::{ClaimsError, ClaimsResult};
use crate::models::InsurancePlan;

/// Patient financial responsibility estimator
///
/// Applies each plan's cost-sharing formula to a claim amount. Amounts are
/// `Decimal` throughout and results are rounded to cents for display.
pub struct ResponsibilityEstimator;

impl ResponsibilityEstimator {
    /// Create a new responsibility estimator
    pub fn new() -> Self {
        Self
    }

    /// Estimate the patient-owed portion of a claim amount.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError::InvalidAmount` when the amount is zero or
    /// negative; a positive amount is required for cost sharing.
    pub fn estimate(&self, amount: Decimal, plan: InsurancePlan) -> ClaimsResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(ClaimsError::InvalidAmount(amount.to_string()));
        }

        let owed = match plan {
            // 20% coinsurance
            InsurancePlan::Medicare => amount * Decimal::new(20, 2),
            // 10% coinsurance capped at $500
            InsurancePlan::BlueCross => (amount * Decimal::new(10, 2)).min(Decimal::from(500)),
            // Flat copay
            InsurancePlan::UnitedHealthcare => Decimal::from(250),
            // No insurance offset
            InsurancePlan::Unselected => amount,
        };

        Ok(owed.round_dp(2))
    }
}

impl Default for ResponsibilityEstimator {
    fn default() -> Self {
        Self::new()
    }
}
