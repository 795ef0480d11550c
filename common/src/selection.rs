//! Current filter selection, one value set per facet key.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::facet::FacetValue;


/// Selected values per facet. An empty set is never stored: deselecting the
/// last value of a facet removes its key entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Selection {
    pub facet_values: BTreeMap<String, BTreeSet<FacetValue>>,
}

impl Selection {
    pub fn values(&self, facet_key: &str) -> Option<&BTreeSet<FacetValue>> {
        self.facet_values.get(facet_key)
    }

    pub fn contains(&self, facet_key: &str, value: &FacetValue) -> bool {
        self.facet_values.get(facet_key).is_some_and(|set| set.contains(value))
    }

    /// Toggle membership of `value` in the facet's set: insert if absent,
    /// remove if present.
    pub fn toggle(&mut self, facet_key: &str, value: FacetValue) {
        let entry = self.facet_values.entry(facet_key.to_string()).or_default();
        if !entry.insert(value.clone()) {
            entry.remove(&value);
        }
        if entry.is_empty() {
            self.facet_values.remove(facet_key);
        }
    }

    /// Single-select semantics: replace the set with `{value}`, unless the
    /// set is already exactly `{value}`, in which case clear it.
    pub fn replace_or_clear(&mut self, facet_key: &str, value: FacetValue) {
        let current = self.facet_values.get(facet_key);
        if current.is_some_and(|set| set.len() == 1 && set.contains(&value)) {
            self.facet_values.remove(facet_key);
        } else {
            self.facet_values.insert(facet_key.to_string(), BTreeSet::from([value]));
        }
    }

    pub fn clear_facet(&mut self, facet_key: &str) -> bool {
        self.facet_values.remove(facet_key).is_some()
    }

    pub fn clear(&mut self) {
        self.facet_values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.facet_values.is_empty()
    }

    pub fn facet_keys(&self) -> impl Iterator<Item = &str> {
        self.facet_values.keys().map(|k| k.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_then_toggle_restores_prior_state() {
        let mut selection = Selection::default();
        selection.toggle("knowledge", FacetValue::from("FIGMA"));
        let snapshot = selection.clone();

        selection.toggle("knowledge", FacetValue::from("HTML"));
        selection.toggle("knowledge", FacetValue::from("HTML"));
        assert_eq!(selection, snapshot);
    }

    #[test]
    fn deselecting_last_value_removes_key() {
        let mut selection = Selection::default();
        selection.toggle("knowledge", FacetValue::from("FIGMA"));
        selection.toggle("knowledge", FacetValue::from("FIGMA"));
        assert!(selection.values("knowledge").is_none());
        assert!(selection.is_empty());
    }

    #[test]
    fn replace_or_clear_replaces_and_toggles_off() {
        let mut selection = Selection::default();
        selection.replace_or_clear("education_program", FacetValue::from("Webbutveckling"));
        selection.replace_or_clear("education_program", FacetValue::from("Digital Design"));
        let set = selection.values("education_program").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&FacetValue::from("Digital Design")));

        // second click on the already selected value clears the facet
        selection.replace_or_clear("education_program", FacetValue::from("Digital Design"));
        assert!(selection.values("education_program").is_none());
    }

    #[test]
    fn clear_facet_reports_whether_anything_was_selected() {
        let mut selection = Selection::default();
        assert!(!selection.clear_facet("location"));
        selection.toggle("location", FacetValue::from("GÖTEBORG"));
        assert!(selection.clear_facet("location"));
    }
}
