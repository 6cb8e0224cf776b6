//! Typed, extensible query filters for catalog backends built on Axum and Sea-ORM.
//!
//! Untyped filter input (query-string pairs or `{type, params}` descriptors) is
//! parsed into typed filter values, which can then be evaluated in memory
//! against domain entities or compiled into a [`sea_orm::Condition`] for the
//! persistence layer. Both paths are driven by the same per-family registries,
//! so adding a filter kind never touches the dispatch core.

pub mod domain;
pub mod errors;
pub mod filter;
pub mod models;
pub mod parse;
pub mod registry;
pub mod traits;
pub mod translate;

pub use errors::FilterError;
pub use filter::{Filter, PlantFilter, PostFilter, Search};
pub use models::{FilterDescriptor, RawParams};
pub use parse::{
    parse_plant_descriptors, parse_plant_query, parse_post_descriptors, parse_post_query,
};
pub use registry::{ParseFn, Registry, TranslateFn};
pub use traits::Searchable;
pub use translate::{plant_condition, post_condition};
