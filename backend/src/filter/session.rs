//! Per-list-page filter session: selection, debounce, result delivery.
//!
//! A session owns its selection and discovery cache and runs one worker
//! task. Mutations schedule a (sequence, predicate) pair on a watch channel; the
//! worker debounces, queries, and publishes snapshots. Because the channel
//! only ever holds the newest pair, a burst of clicks coalesces into one
//! query, and results are delivered in predicate order: a response that
//! arrives for a superseded sequence number is discarded.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use common::facet::{FacetOption, FacetValue};
use common::filter_const::DISCOVERY_OPTION_LIMIT;
use common::predicate::FilterPredicate;
use common::selection::Selection;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::filter::executor::{self, RowResultSet};
use crate::filter::state::FilterState;
use crate::store::DataStore;


/// Latest engine output. On a terminal failure the previous result set is
/// kept so the list does not flash empty; `error` holds the failure until
/// the next successful delivery clears it.
#[derive(Debug, Clone, Default)]
pub struct FilterSnapshot {
    pub result_set: Option<RowResultSet>,
    pub error: Option<Arc<FilterError>>,
}

pub struct FilterSession<S: DataStore> {
    store: Arc<S>,
    collection: String,
    state: FilterState,
    /// Options of dynamic facets, discovered once per session.
    discovered_options: HashMap<String, Vec<FacetOption>>,
    predicate_tx: watch::Sender<(u64, FilterPredicate)>,
    snapshot_rx: watch::Receiver<FilterSnapshot>,
    next_seq: u64,
}

impl<S: DataStore> FilterSession<S> {
    /// Spawns the worker and schedules the initial load (the seeded
    /// predicate, or the unfiltered collection).
    pub fn new(config: FilterConfig, store: Arc<S>) -> Self {
        let FilterConfig { collection, catalog, initial_selection, debounce } = config;
        let mut state = FilterState::new(catalog);
        if let Some(initial) = initial_selection {
            state.hydrate(initial);
        }

        let (predicate_tx, predicate_rx) = watch::channel((0, state.predicate()));
        let (snapshot_tx, snapshot_rx) = watch::channel(FilterSnapshot::default());
        tokio::spawn(run_worker(
            store.clone(),
            collection.clone(),
            debounce,
            predicate_rx,
            snapshot_tx,
        ));

        Self {
            store,
            collection,
            state,
            discovered_options: HashMap::new(),
            predicate_tx,
            snapshot_rx,
            next_seq: 1,
        }
    }

    pub fn select(&mut self, facet_key: &str, value: impl Into<FacetValue>) {
        if self.state.select(facet_key, value.into()) {
            self.schedule();
        }
    }

    pub fn clear_facet(&mut self, facet_key: &str) {
        if self.state.clear_facet(facet_key) {
            self.schedule();
        }
    }

    pub fn clear_all(&mut self) {
        if self.state.clear_all() {
            self.schedule();
        }
    }

    /// Re-run the current predicate, e.g. as the retry affordance after a
    /// terminal failure.
    pub fn refresh(&mut self) {
        self.schedule();
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    pub fn predicate(&self) -> FilterPredicate {
        self.state.predicate()
    }

    /// Receiver of published snapshots. `borrow()` gives the newest one.
    pub fn snapshots(&self) -> watch::Receiver<FilterSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Options to render for a facet: the static declaration, or values
    /// discovered from the store on first use and cached for the session.
    /// Discovery failure degrades to an empty list for this facet only.
    pub async fn facet_options(&mut self, facet_key: &str) -> Vec<FacetOption> {
        let Some(facet) = self.state.catalog().get(facet_key) else {
            let error = FilterError::InvalidFacetKey { key: facet_key.to_string() };
            warn!(%error, "facet_options ignored");
            return Vec::new();
        };
        if !facet.is_dynamic() {
            return facet.options.clone();
        }
        if let Some(cached) = self.discovered_options.get(facet_key) {
            return cached.clone();
        }

        let options = match discover_options(self.store.as_ref(), &self.collection, facet_key).await {
            Ok(options) => options,
            Err(error) => {
                warn!(%error, "facet degraded to no options");
                Vec::new()
            }
        };
        self.discovered_options.insert(facet_key.to_string(), options.clone());
        options
    }

    fn schedule(&mut self) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let _ = self.predicate_tx.send((seq, self.state.predicate()));
    }
}

async fn discover_options<S: DataStore>(
    store: &S,
    collection: &str,
    facet_key: &str,
) -> Result<Vec<FacetOption>, FilterError> {
    let values = store
        .fetch_distinct(collection, facet_key)
        .await
        .map_err(|source| FilterError::DiscoveryFailed { key: facet_key.to_string(), source })?;
    Ok(values
        .into_iter()
        .take(DISCOVERY_OPTION_LIMIT)
        .map(|value| {
            let display_label = value.display();
            FacetOption { stored_value: value, display_label }
        })
        .collect())
}

async fn run_worker<S: DataStore>(
    store: Arc<S>,
    collection: String,
    debounce: Duration,
    mut predicate_rx: watch::Receiver<(u64, FilterPredicate)>,
    snapshot_tx: watch::Sender<FilterSnapshot>,
) {
    loop {
        predicate_rx.borrow_and_update();
        tokio::time::sleep(debounce).await;
        // take whatever is newest after the debounce window
        let (seq, predicate) = predicate_rx.borrow_and_update().clone();

        let outcome = executor::apply_predicate(store.as_ref(), &collection, &predicate).await;

        let newest_seq = predicate_rx.borrow().0;
        if newest_seq != seq {
            debug!(seq, newest_seq, "discarding result for superseded predicate");
        } else {
            match outcome {
                Ok(result_set) => {
                    snapshot_tx.send_modify(|snapshot| {
                        snapshot.result_set = Some(result_set);
                        snapshot.error = None;
                    });
                }
                Err(error) => {
                    // keep the previous result set visible
                    snapshot_tx.send_modify(|snapshot| {
                        snapshot.error = Some(Arc::new(error));
                    });
                }
            }
        }

        if !predicate_rx.has_changed().unwrap_or(false) {
            if predicate_rx.changed().await.is_err() {
                // session dropped: no more predicates will come
                break;
            }
        }
    }
}
