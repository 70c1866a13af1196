//! Entity repositories
//!
//! Repositories sit on top of the store and own validation: input is
//! checked before any write, identifiers cross the boundary as strings, and
//! every failure is returned to the caller as a [`TrackerError`].

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use transaction::TransactionRepository;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ObjectId;

/// Parse an identifier that a mutation targets
fn parse_target_id(entity_type: &str, raw: &str) -> TrackerResult<ObjectId> {
    ObjectId::parse(raw).map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid {} id: {}",
            entity_type.to_lowercase(),
            raw.trim()
        ))
    })
}

/// Parse an identifier for a lookup; malformed ids simply match nothing
fn parse_lookup_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse(raw).ok()
}
