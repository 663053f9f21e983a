//! Denial Analytics for Claim Insights
//!
//! Provides denial and revenue analytics including:
//! - Denial rate and denied-amount computation over claim records
//! - Denial reason breakdowns with share-of-total percentages
//! - Monthly denial-rate trend analysis
//! - Aged accounts-receivable totals
//! - Per-payer denial pattern summaries

pub mod metrics;
pub mod models;
pub mod sample;
pub mod error;

pub use metrics::*;
pub use models::*;
pub use error::*;
