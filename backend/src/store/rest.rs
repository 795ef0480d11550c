//! HTTP data store speaking the hosted backend's REST dialect, where every
//! condition becomes a query parameter on a collection endpoint.

use common::facet::FacetValue;
use common::predicate::{ConditionOperator, FilterCondition};
use serde_json::Value;

use crate::filter::local;
use crate::store::DataStore;


pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into(), api_key }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("LIA_STORE_URL").unwrap_or("http://127.0.0.1:3000".to_string()),
            std::env::var("LIA_STORE_API_KEY").ok(),
        )
    }

    async fn fetch_rows(&self, collection: &str, params: &[(String, String)]) -> anyhow::Result<Vec<Value>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), collection);
        let mut request = self.client.get(url).query(params);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key).bearer_auth(api_key);
        }
        let response = request.send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let rows: Vec<Value> = serde_json::from_str(&response_txt)?;
        Ok(rows)
    }
}

impl DataStore for RestStore {
    async fn query(&self, collection: &str, conditions: &[FilterCondition]) -> anyhow::Result<Vec<Value>> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(condition_params(conditions));
        self.fetch_rows(collection, &params).await
    }

    async fn fetch_all(&self, collection: &str) -> anyhow::Result<Vec<Value>> {
        let params = vec![("select".to_string(), "*".to_string())];
        self.fetch_rows(collection, &params).await
    }

    async fn fetch_distinct(&self, collection: &str, key: &str) -> anyhow::Result<Vec<FacetValue>> {
        // the dialect has no distinct; fetch the non-null column and dedupe
        let params = vec![
            ("select".to_string(), key.to_string()),
            (key.to_string(), "not.is.null".to_string()),
        ];
        let rows = self.fetch_rows(collection, &params).await?;
        Ok(local::distinct_values(&rows, key))
    }
}


/// Translate conditions to query parameters, one per key (ANDed by the
/// backend). Multi-value substring matches go through a single `or=(…)`
/// parameter so they stay one condition.
pub fn condition_params(conditions: &[FilterCondition]) -> Vec<(String, String)> {
    let mut params = Vec::new();
    for condition in conditions {
        match condition.operator {
            ConditionOperator::Eq => {
                let Some(value) = condition.values.first() else {
                    continue;
                };
                params.push((condition.key.clone(), format!("eq.{}", value.display())));
            }
            ConditionOperator::In => {
                params.push((condition.key.clone(), format!("in.({})", quoted_list(&condition.values))));
            }
            ConditionOperator::IlikeSubstring => {
                if condition.values.len() == 1 {
                    params.push((
                        condition.key.clone(),
                        format!("ilike.*{}*", condition.values[0].display()),
                    ));
                } else {
                    let alternatives = condition
                        .values
                        .iter()
                        .map(|value| format!("{}.ilike.*{}*", condition.key, value.display()))
                        .collect::<Vec<_>>()
                        .join(",");
                    params.push(("or".to_string(), format!("({})", alternatives)));
                }
            }
            ConditionOperator::ArrayOverlaps => {
                params.push((condition.key.clone(), format!("ov.{{{}}}", quoted_list(&condition.values))));
            }
        }
    }
    params
}

fn quoted_list(values: &[FacetValue]) -> String {
    values
        .iter()
        .map(|value| match value {
            FacetValue::Bool(b) => b.to_string(),
            FacetValue::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        })
        .collect::<Vec<_>>()
        .join(",")
}


#[cfg(test)]
mod tests {
    use super::*;

    fn condition(key: &str, operator: ConditionOperator, values: Vec<FacetValue>) -> FilterCondition {
        FilterCondition { key: key.to_string(), operator, values }
    }

    #[test]
    fn eq_and_in_translate_to_membership_params() {
        let params = condition_params(&[
            condition("education_program", ConditionOperator::Eq, vec!["Webbutveckling".into()]),
            condition(
                "lia_period",
                ConditionOperator::In,
                vec!["HÖST 2025".into(), "VÅR 2026".into()],
            ),
        ]);
        assert_eq!(params[0], ("education_program".to_string(), "eq.Webbutveckling".to_string()));
        assert_eq!(params[1], ("lia_period".to_string(), "in.(\"HÖST 2025\",\"VÅR 2026\")".to_string()));
    }

    #[test]
    fn multi_value_ilike_becomes_one_or_parameter() {
        let params = condition_params(&[condition(
            "city",
            ConditionOperator::IlikeSubstring,
            vec!["Stockholm".into(), "Göteborg".into()],
        )]);
        assert_eq!(
            params,
            vec![("or".to_string(), "(city.ilike.*Stockholm*,city.ilike.*Göteborg*)".to_string())]
        );
    }

    #[test]
    fn array_overlap_uses_an_array_literal() {
        let params = condition_params(&[condition(
            "knowledge",
            ConditionOperator::ArrayOverlaps,
            vec!["UNREAL ENGINE".into(), "HTML".into()],
        )]);
        assert_eq!(
            params,
            vec![("knowledge".to_string(), "ov.{\"UNREAL ENGINE\",\"HTML\"}".to_string())]
        );
    }

    #[test]
    fn boolean_values_stay_unquoted() {
        let params = condition_params(&[condition(
            "accepts_webb_developer",
            ConditionOperator::Eq,
            vec![true.into()],
        )]);
        assert_eq!(params, vec![("accepts_webb_developer".to_string(), "eq.true".to_string())]);
    }
}
