//! Transport-facing models handed to the parsing layer.

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One structured filter descriptor, as posted in a search request body.
///
/// Body semantics: a request carries a list of these, AND-combined. Example:
///
/// ```json
/// [
///   {"type": "height", "params": {"min": 5.0, "max": 10.0}},
///   {"type": "soil_moisture", "params": {"moistures": ["medium", "high"]}}
/// ]
/// ```
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FilterDescriptor {
    /// Filter kind identifier, e.g. `"height"` or `"tags"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific comparison parameters
    #[schema(value_type = Object)]
    pub params: Map<String, Value>,
}

/// Untyped filter operands in one of the two supported encodings.
///
/// Query-string values encode ranges as `"{min}-{max}"` and lists as
/// comma-separated elements; structured params carry typed `min`/`max` keys
/// and JSON arrays. Every registered parser accepts both.
#[derive(Debug, Clone, Copy)]
pub enum RawParams<'a> {
    /// A single query-string value (URL transport)
    Query(&'a str),
    /// A structured params object (body transport)
    Object(&'a Map<String, Value>),
}
