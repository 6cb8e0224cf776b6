//! Compilation of typed filter values into relational predicates.
//!
//! Each filter kind maps to exactly one `sea_orm::Condition` fragment;
//! fragments compose via `Condition::all()` in aggregate insertion order.
//! The output is one boolean leaf the repository embeds in its own query
//! alongside pagination and ownership predicates.
//!
//! Correctness contract: for any filter value and an entity persisted as its
//! in-memory twin, the compiled predicate and [`Filter::matches`] must agree.
//! A new filter kind ships both halves together.

mod plant;
mod post;

pub use plant::plant_translators;
pub use post::post_translators;

use sea_orm::Condition;

use crate::errors::FilterError;
use crate::filter::{Filter, PlantFilter, PostFilter, Search};
use crate::registry::{Registry, TranslateFn};

/// Compile a search aggregate into one conjunctive condition.
///
/// An empty aggregate compiles to an empty `Condition::all()`, which
/// sea-query renders as no constraint at all.
///
/// # Errors
///
/// Returns [`FilterError::UnknownFilterType`] when a filter's identifier has
/// no translator entry and [`FilterError::TranslationTypeMismatch`] when a
/// value reaches a translator for a different kind.
pub fn condition<F: Filter>(
    registry: &Registry<TranslateFn<F>>,
    search: &Search<F>,
) -> Result<Condition, FilterError> {
    let mut condition = Condition::all();
    for filter in search {
        let translate = registry
            .lookup(filter.identifier())
            .ok_or_else(|| FilterError::unknown(filter.identifier()))?;
        condition = condition.add(translate(filter)?);
    }
    Ok(condition)
}

/// Compile a plant search against the process-wide translator registry.
///
/// # Errors
/// See [`condition`].
pub fn plant_condition(search: &Search<PlantFilter>) -> Result<Condition, FilterError> {
    condition(plant_translators(), search)
}

/// Compile a post search against the process-wide translator registry.
///
/// # Errors
/// See [`condition`].
pub fn post_condition(search: &Search<PostFilter>) -> Result<Condition, FilterError> {
    condition(post_translators(), search)
}
