//! Query execution with an in-process fallback.

use common::predicate::FilterPredicate;
use common::result_set::ResultSet;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FilterError;
use crate::filter::local;
use crate::store::DataStore;


pub type RowResultSet = ResultSet<Value>;

/// Run one predicate against the store. On a primary failure the whole
/// collection is fetched once and the same conditions are evaluated locally,
/// so the caller still receives a result set consistent with the predicate.
/// Only when that fetch fails too does an error escape.
pub async fn apply_predicate<S: DataStore>(
    store: &S,
    collection: &str,
    predicate: &FilterPredicate,
) -> Result<RowResultSet, FilterError> {
    debug!(collection, conditions = predicate.conditions.len(), phase = "querying");
    let query_failed = match run_primary(store, collection, predicate).await {
        Ok(rows) => {
            debug!(collection, rows = rows.len(), phase = "delivered");
            return Ok(ResultSet::new(predicate.clone(), rows));
        }
        Err(error) => error,
    };

    warn!(collection, error = %query_failed, phase = "fallback-querying");
    match store.fetch_all(collection).await {
        Ok(rows) => {
            let rows = local::filter_rows(predicate, &rows);
            debug!(collection, rows = rows.len(), phase = "delivered");
            Ok(ResultSet::new(predicate.clone(), rows))
        }
        Err(fallback_error) => {
            warn!(collection, error = %fallback_error, phase = "failed");
            Err(FilterError::FallbackFailed(fallback_error))
        }
    }
}

async fn run_primary<S: DataStore>(
    store: &S,
    collection: &str,
    predicate: &FilterPredicate,
) -> Result<Vec<Value>, FilterError> {
    store
        .query(collection, &predicate.conditions)
        .await
        .map_err(FilterError::QueryFailed)
}
