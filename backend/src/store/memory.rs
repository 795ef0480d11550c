//! In-memory data store used in tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use common::facet::FacetValue;
use common::predicate::FilterCondition;
use serde_json::Value;

use crate::filter::local;
use crate::store::DataStore;


/// Holds whole collections in memory and evaluates conditions with the same
/// local evaluator the executor's fallback path uses, which makes it the
/// reference for primary/fallback equivalence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_rows(&self, collection: impl Into<String>, rows: Vec<Value>) {
        let mut collections = self.collections.lock().unwrap();
        collections.entry(collection.into()).or_default().extend(rows);
    }

    fn rows(&self, collection: &str) -> anyhow::Result<Vec<Value>> {
        let collections = self.collections.lock().unwrap();
        match collections.get(collection) {
            Some(rows) => Ok(rows.clone()),
            None => anyhow::bail!("unknown collection: {}", collection),
        }
    }
}

impl DataStore for MemoryStore {
    async fn query(&self, collection: &str, conditions: &[FilterCondition]) -> anyhow::Result<Vec<Value>> {
        let rows = self.rows(collection)?;
        Ok(rows.into_iter().filter(|row| local::row_matches(conditions, row)).collect())
    }

    async fn fetch_all(&self, collection: &str) -> anyhow::Result<Vec<Value>> {
        self.rows(collection)
    }

    async fn fetch_distinct(&self, collection: &str, key: &str) -> anyhow::Result<Vec<FacetValue>> {
        let rows = self.rows(collection)?;
        Ok(local::distinct_values(&rows, key))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::predicate::ConditionOperator;
    use serde_json::json;

    fn store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert_rows(
            "student_profiles",
            vec![
                json!({"id": 1, "education_program": "Webbutveckling", "knowledge": ["Figma"]}),
                json!({"id": 2, "education_program": "Digital Design", "knowledge": ["Figma", "HTML"]}),
            ],
        );
        store
    }

    #[tokio::test]
    async fn query_applies_all_conditions() {
        let store = store();
        let conditions = vec![FilterCondition {
            key: "education_program".to_string(),
            operator: ConditionOperator::Eq,
            values: vec!["Webbutveckling".into()],
        }];
        let rows = store.query("student_profiles", &conditions).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], 1);
    }

    #[tokio::test]
    async fn fetch_all_returns_the_whole_collection() {
        let rows = store().fetch_all("student_profiles").await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn fetch_distinct_flattens_array_columns() {
        let values = store().fetch_distinct("student_profiles", "knowledge").await.unwrap();
        assert_eq!(values, vec![FacetValue::from("Figma"), FacetValue::from("HTML")]);
    }

    #[tokio::test]
    async fn unknown_collection_is_an_error() {
        assert!(store().fetch_all("no_such_table").await.is_err());
    }
}
