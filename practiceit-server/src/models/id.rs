//! Entity id parsing

use std::num::ParseIntError;

/// Storage-assigned row id.
pub type EntityId = i64;

/// Parse an id taken from a URL path segment.
///
/// Accepts an optional leading sign, like any base-10 integer literal.
pub fn parse_entity_id(raw: &str) -> Result<EntityId, ParseIntError> {
    raw.parse::<EntityId>()
}
