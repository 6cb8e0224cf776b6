//! The typed filter value model.
//!
//! One enum variant per filter kind, exhaustively matched in the evaluator
//! and the SQL translator so a new kind cannot silently fall through either
//! path. Filter values are immutable once constructed.

pub mod ident;
mod plant;
mod post;
mod search;

pub use plant::PlantFilter;
pub use post::PostFilter;
pub use search::Search;

/// A constructed filter value for one entity family.
pub trait Filter {
    /// The domain entity this filter compares against.
    type Entity;

    /// Stable identifier of this filter kind, shared by the parser and
    /// translator registries. See [`ident`].
    fn identifier(&self) -> &'static str;

    /// In-memory predicate: does `entity` satisfy this filter?
    ///
    /// Pure and infallible; an entity whose relevant attribute is
    /// structurally absent simply does not match.
    fn matches(&self, entity: &Self::Entity) -> bool;
}
