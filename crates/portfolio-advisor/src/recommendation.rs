//! Recommendation Lookup
//!
//! Static risk-level to allocation table. Not a model or optimizer: six
//! fixed rows, and anything else is an error.

use crate::error::Result;
use crate::model::{Allocation, RiskLevel};

/// Allocation for a risk-level label exactly as collected by the bot
pub fn recommend(risk_level: &str) -> Result<Allocation> {
    let level: RiskLevel = risk_level.parse()?;
    let allocation = level.allocation();
    tracing::debug!(risk_level = %level, %allocation, "Looked up allocation");
    Ok(allocation)
}
