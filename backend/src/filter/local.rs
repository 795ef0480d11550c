//! In-process condition evaluation over raw rows.
//!
//! This is the fallback path of the executor and the reference semantics the
//! in-memory store shares, so primary and fallback results stay equivalent.

use std::collections::BTreeSet;

use common::facet::FacetValue;
use common::predicate::{ConditionOperator, FilterCondition, FilterPredicate};
use serde_json::Value;


pub fn filter_rows(predicate: &FilterPredicate, rows: &[Value]) -> Vec<Value> {
    rows.iter()
        .filter(|row| row_matches(&predicate.conditions, row))
        .cloned()
        .collect()
}

pub fn row_matches(conditions: &[FilterCondition], row: &Value) -> bool {
    conditions.iter().all(|condition| condition_matches(condition, row))
}

fn condition_matches(condition: &FilterCondition, row: &Value) -> bool {
    let Some(field) = row.get(&condition.key) else {
        return false;
    };
    if field.is_null() {
        return false;
    }
    match condition.operator {
        ConditionOperator::Eq | ConditionOperator::In => {
            condition.values.iter().any(|value| value_equals(value, field))
        }
        ConditionOperator::IlikeSubstring => {
            let Some(haystack) = field.as_str() else {
                return false;
            };
            let haystack = haystack.to_lowercase();
            condition
                .values
                .iter()
                .any(|value| haystack.contains(&value.display().to_lowercase()))
        }
        ConditionOperator::ArrayOverlaps => {
            let Some(elements) = field.as_array() else {
                return false;
            };
            elements
                .iter()
                .any(|element| condition.values.iter().any(|value| value_equals(value, element)))
        }
    }
}

fn value_equals(selected: &FacetValue, field: &Value) -> bool {
    match (selected, field) {
        (FacetValue::String(s), Value::String(f)) => s == f,
        (FacetValue::Bool(b), Value::Bool(f)) => b == f,
        // boolean columns occasionally arrive as "TRUE"/"false" strings
        (FacetValue::Bool(b), Value::String(f)) => {
            f.eq_ignore_ascii_case(if *b { "true" } else { "false" })
        }
        _ => false,
    }
}

/// Distinct non-null values of one column across the given rows, flattening
/// array-typed columns. Values the facet model cannot represent are skipped.
pub fn distinct_values(rows: &[Value], key: &str) -> Vec<FacetValue> {
    let mut values = BTreeSet::new();
    for row in rows {
        let Some(field) = row.get(key) else {
            continue;
        };
        match field {
            Value::Array(elements) => {
                for element in elements {
                    if let Some(value) = facet_value_from_json(element) {
                        values.insert(value);
                    }
                }
            }
            other => {
                if let Some(value) = facet_value_from_json(other) {
                    values.insert(value);
                }
            }
        }
    }
    values.into_iter().collect()
}

fn facet_value_from_json(value: &Value) -> Option<FacetValue> {
    match value {
        Value::String(s) => Some(FacetValue::String(s.clone())),
        Value::Bool(b) => Some(FacetValue::Bool(*b)),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn condition(key: &str, operator: ConditionOperator, values: Vec<FacetValue>) -> FilterCondition {
        FilterCondition { key: key.to_string(), operator, values }
    }

    #[test]
    fn eq_matches_exact_strings_only() {
        let row = json!({"education_program": "Webbutveckling"});
        let hit = condition("education_program", ConditionOperator::Eq, vec!["Webbutveckling".into()]);
        let miss = condition("education_program", ConditionOperator::Eq, vec!["Digital Design".into()]);
        assert!(row_matches(&[hit], &row));
        assert!(!row_matches(&[miss], &row));
    }

    #[test]
    fn boolean_condition_accepts_stringly_typed_rows() {
        let clean = json!({"accepts_webb_developer": true});
        let dirty = json!({"accepts_webb_developer": "TRUE"});
        let c = condition("accepts_webb_developer", ConditionOperator::Eq, vec![true.into()]);
        assert!(row_matches(&[c.clone()], &clean));
        assert!(row_matches(&[c], &dirty));
    }

    #[test]
    fn ilike_is_case_insensitive_substring() {
        let row = json!({"city": "Göteborg (centrum)"});
        let hit = condition("city", ConditionOperator::IlikeSubstring, vec!["göteborg".into()]);
        let miss = condition("city", ConditionOperator::IlikeSubstring, vec!["Stockholm".into()]);
        assert!(row_matches(&[hit], &row));
        assert!(!row_matches(&[miss], &row));
    }

    #[test]
    fn array_overlap_matches_any_shared_value() {
        let row = json!({"knowledge": ["Figma", "HTML"]});
        let hit = condition(
            "knowledge",
            ConditionOperator::ArrayOverlaps,
            vec!["CSS".into(), "HTML".into()],
        );
        let miss = condition("knowledge", ConditionOperator::ArrayOverlaps, vec!["CSS".into()]);
        assert!(row_matches(&[hit], &row));
        assert!(!row_matches(&[miss], &row));
    }

    #[test]
    fn conditions_combine_with_and() {
        let row = json!({"education_program": "Webbutveckling", "knowledge": ["Figma"]});
        let program = condition("education_program", ConditionOperator::Eq, vec!["Webbutveckling".into()]);
        let skills = condition("knowledge", ConditionOperator::ArrayOverlaps, vec!["HTML".into()]);
        assert!(!row_matches(&[program, skills], &row));
    }

    #[test]
    fn missing_and_null_fields_never_match() {
        let missing = json!({"other": 1});
        let null = json!({"city": null});
        let c = condition("city", ConditionOperator::IlikeSubstring, vec!["a".into()]);
        assert!(!row_matches(&[c.clone()], &missing));
        assert!(!row_matches(&[c], &null));
    }

    #[test]
    fn distinct_values_flattens_arrays_and_drops_nulls() {
        let rows = vec![
            json!({"knowledge": ["Figma", "HTML"]}),
            json!({"knowledge": ["Figma", "CSS"]}),
            json!({"knowledge": null}),
            json!({}),
        ];
        let values = distinct_values(&rows, "knowledge");
        assert_eq!(
            values,
            vec![
                FacetValue::from("CSS"),
                FacetValue::from("Figma"),
                FacetValue::from("HTML"),
            ]
        );
    }
}
