//! Price quote model.
//!
//! A [`PriceQuote`] is what the HTTP API returns for a priced request: the
//! breakdown plus identifying metadata and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, PriceBreakdown, RentalRequest};

/// A priced rental request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// ISO 4217 currency code of every amount in the quote.
    pub currency: String,
    /// The request that was priced.
    pub request: RentalRequest,
    /// The itemized price.
    pub breakdown: PriceBreakdown,
    /// The total formatted for display (e.g., "रू 3,955").
    pub formatted_total: String,
    /// Complete audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}
