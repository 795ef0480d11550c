//! Facet catalog: the filterable attributes declared for one collection.

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetCardinality, FacetDomain, FacetOption};


/// Ordered set of facet declarations with unique keys. Pure data, no I/O;
/// dynamic facets are resolved by the engine against the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetCatalog {
    facets: Vec<Facet>,
}

impl FacetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a facet. Keys are unique: re-declaring an existing key keeps
    /// the first declaration. Pass no options to mark the facet dynamic.
    pub fn declare_facet(
        &mut self,
        key: impl Into<String>,
        domain: FacetDomain,
        cardinality: FacetCardinality,
        options: Vec<FacetOption>,
    ) -> &Facet {
        let key = key.into();
        let index = match self.facets.iter().position(|f| f.key == key) {
            Some(existing) => existing,
            None => {
                self.facets.push(Facet::with_options(key, domain, cardinality, options));
                self.facets.len() - 1
            }
        };
        &self.facets[index]
    }

    pub fn get(&self, key: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Facets in declaration order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}
