use super::Filter;

/// An ordered AND-combination of filter values for one entity family.
///
/// Order has no semantic effect but is preserved so compiled query fragments
/// come out in a stable order. An empty search matches every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Search<F> {
    filters: Vec<F>,
}

impl<F> Default for Search<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Search<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add_filter(&mut self, filter: F) {
        self.filters.push(filter);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.filters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<F: Filter> Search<F> {
    /// AND over all contained filters, short-circuiting on the first
    /// non-match. True when no filters are present.
    pub fn matches(&self, entity: &F::Entity) -> bool {
        self.filters.iter().all(|filter| filter.matches(entity))
    }
}

impl<'a, F> IntoIterator for &'a Search<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
