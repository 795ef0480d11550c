//! Derived filter predicates and the conditions they translate to.

use serde::{Deserialize, Serialize};

use crate::catalog::FacetCatalog;
use crate::facet::{FacetDomain, FacetValue};
use crate::selection::Selection;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    Eq,
    In,
    /// Case-insensitive substring match; several values match any-of.
    IlikeSubstring,
    /// Array column shares at least one value with the selection.
    ArrayOverlaps,
}

/// One per-key condition. Conditions of a predicate combine with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub key: String,
    pub operator: ConditionOperator,
    pub values: Vec<FacetValue>,
}

/// Read-only snapshot of a selection together with the conditions derived
/// from it. Carries the selection so the presentation layer can render
/// active-filter chips without re-deriving them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterPredicate {
    pub selection: Selection,
    pub conditions: Vec<FilterCondition>,
}

impl FilterPredicate {
    /// Pure, deterministic derivation from the current selection. Keys not
    /// present in the catalog produce no condition.
    pub fn derive(catalog: &FacetCatalog, selection: &Selection) -> Self {
        let mut conditions = Vec::new();
        for (key, values) in selection.facet_values.iter() {
            let Some(facet) = catalog.get(key) else {
                continue;
            };
            let values = values.iter().cloned().collect::<Vec<_>>();
            let operator = match facet.domain {
                FacetDomain::EnumeratedString | FacetDomain::Boolean => {
                    if values.len() == 1 { ConditionOperator::Eq } else { ConditionOperator::In }
                }
                FacetDomain::FreeTextSubstring => ConditionOperator::IlikeSubstring,
                FacetDomain::ArrayMembership => ConditionOperator::ArrayOverlaps,
            };
            conditions.push(FilterCondition { key: key.clone(), operator, values });
        }
        FilterPredicate { selection: selection.clone(), conditions }
    }

    /// True when the predicate matches every row of the collection.
    pub fn is_unfiltered(&self) -> bool {
        self.conditions.is_empty()
    }
}
