//! Filter error taxonomy.
//!
//! Only `FallbackFailed` ever crosses the component boundary; the other
//! variants are recovered internally and logged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// Caller referenced a facet key the catalog does not declare. Recovered
    /// as a no-op so the UI stays usable.
    #[error("facet key not in catalog: {key}")]
    InvalidFacetKey { key: String },

    /// Dynamic option discovery failed; the facet degrades to an empty
    /// option list without affecting other facets.
    #[error("option discovery failed for facet {key}")]
    DiscoveryFailed {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// The primary store query failed; the executor retries locally against
    /// an unfiltered fetch.
    #[error("store query failed")]
    QueryFailed(#[source] anyhow::Error),

    /// Both the primary query and the unfiltered fallback fetch failed. The
    /// last delivered result set is left untouched.
    #[error("store query and unfiltered fallback both failed")]
    FallbackFailed(#[source] anyhow::Error),
}
