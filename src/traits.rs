//! Repository-side integration trait.
//!
//! A resource type ties an entity family's filters to its sea-orm entity:
//! implementors name their filter type and translator registry and get
//! predicate compilation and query execution for free. Repositories layer
//! their own concerns (pagination, ordering, access control) on top of the
//! returned condition or override `search` entirely.

use async_trait::async_trait;
use sea_orm::{Condition, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::FilterError;
use crate::filter::{Filter, Search};
use crate::registry::{Registry, TranslateFn};
use crate::translate;

#[async_trait]
pub trait Searchable: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    <Self::EntityType as EntityTrait>::Model: Send + Sync,
{
    type EntityType: EntityTrait + Sync;
    type Filter: Filter + Send + Sync + 'static;

    /// The translator registry for this resource's filter family.
    fn translators() -> &'static Registry<TranslateFn<Self::Filter>>;

    /// Compile a search aggregate into a condition for this resource.
    ///
    /// # Errors
    ///
    /// See [`translate::condition`].
    fn condition(search: &Search<Self::Filter>) -> Result<Condition, FilterError> {
        translate::condition(Self::translators(), search)
    }

    /// Compile the aggregate and fetch every matching row.
    ///
    /// # Errors
    ///
    /// Returns translation errors from [`Searchable::condition`] and
    /// [`FilterError::Database`] when query execution fails.
    async fn search(
        db: &DatabaseConnection,
        search: &Search<Self::Filter>,
    ) -> Result<Vec<<Self::EntityType as EntityTrait>::Model>, FilterError> {
        let condition = Self::condition(search)?;
        Self::EntityType::find()
            .filter(condition)
            .all(db)
            .await
            .map_err(FilterError::database)
    }
}
