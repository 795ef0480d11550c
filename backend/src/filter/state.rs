//! Filter selection state and its mutation rules.

use common::catalog::FacetCatalog;
use common::facet::{FacetCardinality, FacetValue};
use common::predicate::FilterPredicate;
use common::selection::Selection;
use tracing::warn;

use crate::error::FilterError;


/// Owns the selection for one filter instance. All mutation goes through
/// this type so cardinality rules and catalog validity hold everywhere.
#[derive(Debug, Clone)]
pub struct FilterState {
    catalog: FacetCatalog,
    selection: Selection,
}

impl FilterState {
    pub fn new(catalog: FacetCatalog) -> Self {
        Self { catalog, selection: Selection::default() }
    }

    /// One-time seed from a previously applied filter set. Unknown keys are
    /// dropped, single-select facets keep their smallest value only.
    pub fn hydrate(&mut self, initial: Selection) {
        let mut selection = Selection::default();
        for (key, values) in initial.facet_values {
            let Some(facet) = self.catalog.get(&key) else {
                warn!(facet_key = %key, "hydrate dropped unknown facet key");
                continue;
            };
            let values = match facet.cardinality {
                FacetCardinality::Multi => values,
                FacetCardinality::Single => values.into_iter().take(1).collect(),
            };
            if !values.is_empty() {
                selection.facet_values.insert(key, values);
            }
        }
        self.selection = selection;
    }

    /// Toggle for multi-select facets, replace-or-toggle-off for
    /// single-select. Returns whether the selection changed; an unknown key
    /// is a logged no-op, never an error.
    pub fn select(&mut self, facet_key: &str, value: FacetValue) -> bool {
        match self.try_select(facet_key, value) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "select ignored");
                false
            }
        }
    }

    fn try_select(&mut self, facet_key: &str, value: FacetValue) -> Result<(), FilterError> {
        let facet = self
            .catalog
            .get(facet_key)
            .ok_or_else(|| FilterError::InvalidFacetKey { key: facet_key.to_string() })?;
        match facet.cardinality {
            FacetCardinality::Multi => self.selection.toggle(facet_key, value),
            FacetCardinality::Single => self.selection.replace_or_clear(facet_key, value),
        }
        Ok(())
    }

    pub fn clear_facet(&mut self, facet_key: &str) -> bool {
        if !self.catalog.contains(facet_key) {
            warn!(%facet_key, "clear ignored: facet key not in catalog");
            return false;
        }
        self.selection.clear_facet(facet_key)
    }

    pub fn clear_all(&mut self) -> bool {
        let had_selection = !self.selection.is_empty();
        self.selection.clear();
        had_selection
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    /// Pure, deterministic snapshot of the current selection.
    pub fn predicate(&self) -> FilterPredicate {
        FilterPredicate::derive(&self.catalog, &self.selection)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::profiles::student_facet_catalog;

    fn state() -> FilterState {
        FilterState::new(student_facet_catalog())
    }

    #[test]
    fn single_select_holds_at_most_one_value() {
        let mut state = state();
        for value in ["Webbutveckling", "Digital Design", "Webbutveckling", "Digital Design"] {
            state.select("education_program", value.into());
            let selected = state.selection().values("education_program");
            assert!(selected.is_none_or(|set| set.len() <= 1));
        }
        // last selected value wins
        let set = state.selection().values("education_program").unwrap();
        assert!(set.contains(&FacetValue::from("Digital Design")));
    }

    #[test]
    fn single_select_double_click_toggles_off() {
        let mut state = state();
        state.select("education_program", "Webbutveckling".into());
        state.select("education_program", "Webbutveckling".into());
        assert!(state.selection().values("education_program").is_none());
    }

    #[test]
    fn multi_select_toggle_is_idempotent_in_pairs() {
        let mut state = state();
        state.select("knowledge", "FIGMA".into());
        let before = state.selection().clone();
        state.select("knowledge", "HTML".into());
        state.select("knowledge", "HTML".into());
        assert_eq!(state.selection(), &before);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut state = state();
        assert!(!state.select("no_such_facet", "x".into()));
        assert!(state.selection().is_empty());
        assert!(!state.clear_facet("no_such_facet"));
    }

    #[test]
    fn clear_all_empties_the_selection() {
        let mut state = state();
        state.select("knowledge", "FIGMA".into());
        state.select("location", "STOCKHOLM".into());
        assert!(state.clear_all());
        assert!(state.selection().is_empty());
        assert!(state.predicate().is_unfiltered());
        // clearing an already empty selection is not a change
        assert!(!state.clear_all());
    }

    #[test]
    fn hydrate_drops_unknown_keys_and_enforces_cardinality() {
        let mut seed = Selection::default();
        seed.toggle("knowledge", "FIGMA".into());
        seed.toggle("bogus", "x".into());
        seed.facet_values.insert(
            "education_program".to_string(),
            ["Webbutveckling".into(), "Digital Design".into()].into_iter().collect(),
        );

        let mut state = state();
        state.hydrate(seed);
        assert!(state.selection().values("bogus").is_none());
        assert_eq!(state.selection().values("education_program").unwrap().len(), 1);
        assert!(state.selection().contains("knowledge", &FacetValue::from("FIGMA")));
    }
}
