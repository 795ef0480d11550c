//! Result sets paired with the predicate that produced them.

use serde::{Deserialize, Serialize};

use crate::predicate::FilterPredicate;


/// The rows delivered for one predicate. Replaced wholesale on every
/// successful query, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet<T> {
    pub predicate: FilterPredicate,
    pub rows: Vec<T>,
}

impl<T> ResultSet<T> {
    pub fn new(predicate: FilterPredicate, rows: Vec<T>) -> Self {
        Self { predicate, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
