//! Data store contract and implementations.

use std::future::Future;

use common::facet::FacetValue;
use common::predicate::FilterCondition;
use serde::de::DeserializeOwned;
use serde_json::Value;

mod memory;
pub use memory::MemoryStore;

mod rest;
pub use rest::RestStore;


/// Minimal contract the filter engine needs from the hosted data store.
/// Construct one instance per process and share it across sessions.
pub trait DataStore: Send + Sync + 'static {
    /// Rows of `collection` matching all conditions (logical AND).
    fn query(
        &self,
        collection: &str,
        conditions: &[FilterCondition],
    ) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send;

    /// Every row of `collection`, unfiltered.
    fn fetch_all(&self, collection: &str) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send;

    /// Distinct non-null values of one column, flattening array columns.
    fn fetch_distinct(
        &self,
        collection: &str,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<FacetValue>>> + Send;
}


/// Decode raw store rows into a typed model.
pub fn decode_rows<T: DeserializeOwned>(rows: &[Value]) -> anyhow::Result<Vec<T>> {
    rows.iter()
        .map(|row| serde_json::from_value(row.clone()).map_err(anyhow::Error::from))
        .collect()
}
