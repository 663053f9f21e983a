//! Claims Engine for Denial Risk Insights
//!
//! Decision core behind the claim insights dashboard:
//! - Denial risk prediction for claim drafts
//! - Pre-submission claim scrubbing
//! - Payer-specific guidance lookup with configurable rule tables
//! - Patient financial responsibility estimation
//!
//! Every operation is synchronous, pure, and side-effect-free; the
//! presentation shell supplies claim drafts and renders the returned
//! assessments, warnings, guidance strings, and estimates.

pub mod service;
pub mod models;
pub mod risk;
pub mod scrubbing;
pub mod payer_rules;
pub mod responsibility;
pub mod error;

pub use service::*;
pub use models::*;
pub use risk::*;
pub use scrubbing::*;
pub use payer_rules::*;
pub use responsibility::*;
pub use error::*;
