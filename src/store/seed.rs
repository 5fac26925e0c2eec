//! Sample rest points loaded at startup.
//!
//! The records are embedded as JSON so the plugin needs no filesystem access.

use crate::domain::{RestPoint, RestloopError, Result};
use std::collections::HashSet;

const SAMPLE_JSON: &str = include_str!("../../assets/rest_points.json");

/// Parses the embedded sample rest points.
///
/// # Errors
///
/// Returns [`RestloopError::Seed`] if the JSON is malformed or two records share
/// an id.
pub fn sample_rest_points() -> Result<Vec<RestPoint>> {
    parse_rest_points(SAMPLE_JSON)
}

/// Parses a JSON array of rest points, rejecting duplicate ids.
///
/// # Errors
///
/// Returns [`RestloopError::Seed`] on malformed JSON or duplicate ids.
pub fn parse_rest_points(json: &str) -> Result<Vec<RestPoint>> {
    let points: Vec<RestPoint> = serde_json::from_str(json)
        .map_err(|e| RestloopError::Seed(format!("failed to parse JSON: {e}")))?;

    let mut seen = HashSet::with_capacity(points.len());
    if let Some(dup) = points.iter().find(|p| !seen.insert(p.id)) {
        return Err(RestloopError::Seed(format!("duplicate id {}", dup.id)));
    }

    tracing::debug!(count = points.len(), "parsed seed rest points");
    Ok(points)
}
