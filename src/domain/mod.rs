//! Read models the in-memory evaluator consumes.
//!
//! These carry exactly the attributes the filter kinds compare against; they
//! are populated by repository code, which is outside this crate.

pub mod plant;
pub mod post;

pub use plant::{
    ConiferousSpecification, DeciduousSpecification, Plant, PlantSpecification,
};
pub use post::Post;
