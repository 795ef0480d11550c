//! Per-instance engine configuration.

use std::time::Duration;

use common::catalog::FacetCatalog;
use common::filter_const::DEFAULT_DEBOUNCE_MS;
use common::selection::Selection;


/// Everything one filter session needs besides the shared data store.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Name of the collection the session queries.
    pub collection: String,
    pub catalog: FacetCatalog,
    /// Seed selection, e.g. when returning from a detail page.
    pub initial_selection: Option<Selection>,
    pub debounce: Duration,
}

impl FilterConfig {
    pub fn new(collection: impl Into<String>, catalog: FacetCatalog) -> Self {
        Self {
            collection: collection.into(),
            catalog,
            initial_selection: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn with_initial_selection(mut self, selection: Selection) -> Self {
        self.initial_selection = Some(selection);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
