//! Parsing of untyped external filter input into typed filter values.
//!
//! Two transports feed this layer: URL query strings (a repeated key selects
//! the filter kind, the value carries the operands in compact form) and
//! structured request bodies (a list of `{type, params}` descriptors). Both
//! route through the same per-family parser registry.

mod plant;
mod post;

pub use plant::plant_parsers;
pub use post::post_parsers;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::FilterError;
use crate::filter::{PlantFilter, PostFilter, Search};
use crate::models::{FilterDescriptor, RawParams};
use crate::registry::{ParseFn, Registry};

/// Parse query-string pairs into a search aggregate.
///
/// A key may repeat, producing multiple AND-combined filters. An unknown key
/// is an [`FilterError::UnknownFilterType`], not a silent skip.
///
/// # Errors
///
/// Returns [`FilterError::UnknownFilterType`] for a key absent from the
/// registry and [`FilterError::MalformedValue`] when a value fails parsing.
pub fn parse_query<F>(
    registry: &Registry<ParseFn<F>>,
    pairs: &[(String, String)],
) -> Result<Search<F>, FilterError> {
    let mut search = Search::new();
    for (key, value) in pairs {
        let parse = registry
            .lookup(key)
            .ok_or_else(|| FilterError::unknown(key.clone()))?;
        search.add_filter(parse(&RawParams::Query(value))?);
    }
    Ok(search)
}

/// Parse structured body descriptors into a search aggregate.
///
/// # Errors
///
/// Same error contract as [`parse_query`].
pub fn parse_descriptors<F>(
    registry: &Registry<ParseFn<F>>,
    descriptors: &[FilterDescriptor],
) -> Result<Search<F>, FilterError> {
    let mut search = Search::new();
    for descriptor in descriptors {
        let parse = registry
            .lookup(&descriptor.kind)
            .ok_or_else(|| FilterError::unknown(descriptor.kind.clone()))?;
        search.add_filter(parse(&RawParams::Object(&descriptor.params))?);
    }
    Ok(search)
}

/// Parse a plant search from query-string pairs.
///
/// # Errors
/// See [`parse_query`].
pub fn parse_plant_query(pairs: &[(String, String)]) -> Result<Search<PlantFilter>, FilterError> {
    parse_query(plant_parsers(), pairs)
}

/// Parse a plant search from body descriptors.
///
/// # Errors
/// See [`parse_descriptors`].
pub fn parse_plant_descriptors(
    descriptors: &[FilterDescriptor],
) -> Result<Search<PlantFilter>, FilterError> {
    parse_descriptors(plant_parsers(), descriptors)
}

/// Parse a post search from query-string pairs.
///
/// # Errors
/// See [`parse_query`].
pub fn parse_post_query(pairs: &[(String, String)]) -> Result<Search<PostFilter>, FilterError> {
    parse_query(post_parsers(), pairs)
}

/// Parse a post search from body descriptors.
///
/// # Errors
/// See [`parse_descriptors`].
pub fn parse_post_descriptors(
    descriptors: &[FilterDescriptor],
) -> Result<Search<PostFilter>, FilterError> {
    parse_descriptors(post_parsers(), descriptors)
}

// Shared operand decoding. Every helper reports failures with the filter
// identifier and the raw value so handlers can echo them in 400 responses.

fn raw_display(raw: &RawParams<'_>) -> String {
    match raw {
        RawParams::Query(s) => (*s).to_string(),
        RawParams::Object(map) => Value::Object((*map).clone()).to_string(),
    }
}

fn object_field<'a>(
    filter: &'static str,
    map: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, FilterError> {
    map.get(key).ok_or_else(|| {
        FilterError::malformed(
            filter,
            Value::Object(map.clone()).to_string(),
            format!("missing `{key}`"),
        )
    })
}

pub(crate) fn string_operand(
    filter: &'static str,
    key: &str,
    raw: &RawParams<'_>,
) -> Result<String, FilterError> {
    match raw {
        RawParams::Query(s) => Ok((*s).to_string()),
        RawParams::Object(map) => object_field(filter, map, key)?
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| {
                FilterError::malformed(filter, raw_display(raw), format!("`{key}` is not a string"))
            }),
    }
}

pub(crate) fn f64_range(
    filter: &'static str,
    raw: &RawParams<'_>,
) -> Result<(f64, f64), FilterError> {
    match raw {
        RawParams::Query(s) => {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() != 2 {
                return Err(FilterError::malformed(filter, *s, "expected `{min}-{max}`"));
            }
            let min = parts[0]
                .parse::<f64>()
                .map_err(|_| FilterError::malformed(filter, *s, "min is not a number"))?;
            let max = parts[1]
                .parse::<f64>()
                .map_err(|_| FilterError::malformed(filter, *s, "max is not a number"))?;
            Ok((min, max))
        }
        RawParams::Object(map) => {
            let min = object_field(filter, map, "min")?.as_f64().ok_or_else(|| {
                FilterError::malformed(filter, raw_display(raw), "`min` is not a number")
            })?;
            let max = object_field(filter, map, "max")?.as_f64().ok_or_else(|| {
                FilterError::malformed(filter, raw_display(raw), "`max` is not a number")
            })?;
            Ok((min, max))
        }
    }
}

pub(crate) fn i32_range(
    filter: &'static str,
    raw: &RawParams<'_>,
) -> Result<(i32, i32), FilterError> {
    match raw {
        RawParams::Query(s) => {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() != 2 {
                return Err(FilterError::malformed(filter, *s, "expected `{min}-{max}`"));
            }
            let min = parts[0]
                .parse::<i32>()
                .map_err(|_| FilterError::malformed(filter, *s, "min is not an integer"))?;
            let max = parts[1]
                .parse::<i32>()
                .map_err(|_| FilterError::malformed(filter, *s, "max is not an integer"))?;
            Ok((min, max))
        }
        RawParams::Object(map) => {
            let min = object_i32(filter, map, "min", raw)?;
            let max = object_i32(filter, map, "max", raw)?;
            Ok((min, max))
        }
    }
}

fn object_i32(
    filter: &'static str,
    map: &Map<String, Value>,
    key: &str,
    raw: &RawParams<'_>,
) -> Result<i32, FilterError> {
    let value = object_field(filter, map, key)?.as_i64().ok_or_else(|| {
        FilterError::malformed(filter, raw_display(raw), format!("`{key}` is not an integer"))
    })?;
    i32::try_from(value).map_err(|_| {
        FilterError::malformed(filter, raw_display(raw), format!("`{key}` is out of range"))
    })
}

pub(crate) fn string_list(
    filter: &'static str,
    key: &str,
    raw: &RawParams<'_>,
) -> Result<Vec<String>, FilterError> {
    match raw {
        RawParams::Query(s) => Ok(s.split(',').map(|v| v.trim().to_string()).collect()),
        RawParams::Object(map) => {
            let list = object_field(filter, map, key)?.as_array().ok_or_else(|| {
                FilterError::malformed(filter, raw_display(raw), format!("`{key}` is not a list"))
            })?;
            list.iter()
                .map(|v| {
                    v.as_str().map(ToString::to_string).ok_or_else(|| {
                        FilterError::malformed(
                            filter,
                            raw_display(raw),
                            format!("`{key}` element is not a string"),
                        )
                    })
                })
                .collect()
        }
    }
}

pub(crate) fn uuid_operand(
    filter: &'static str,
    key: &str,
    raw: &RawParams<'_>,
) -> Result<Uuid, FilterError> {
    let value = string_operand(filter, key, raw)?;
    Uuid::parse_str(value.trim())
        .map_err(|_| FilterError::malformed(filter, value, "not a valid UUID"))
}

pub(crate) fn uuid_list(
    filter: &'static str,
    key: &str,
    raw: &RawParams<'_>,
) -> Result<Vec<Uuid>, FilterError> {
    string_list(filter, key, raw)?
        .iter()
        .map(|value| {
            Uuid::parse_str(value.trim())
                .map_err(|_| FilterError::malformed(filter, value.clone(), "not a valid UUID"))
        })
        .collect()
}
