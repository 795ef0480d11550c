//! Facet declarations and stored facet values.

use serde::{Deserialize, Serialize};


/// A value as stored in the data store. Boolean columns are declared
/// explicitly; everything else filters as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum FacetValue {
    String(String),
    Bool(bool),
}

impl FacetValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FacetValue::String(s) => Some(s.as_str()),
            FacetValue::Bool(_) => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            FacetValue::String(s) => s.clone(),
            FacetValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::String(value.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        FacetValue::String(value)
    }
}

impl From<bool> for FacetValue {
    fn from(value: bool) -> Self {
        FacetValue::Bool(value)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetDomain {
    /// Exact match against a closed set of string values.
    EnumeratedString,
    /// Case-insensitive substring match against a text column.
    FreeTextSubstring,
    Boolean,
    /// The column holds an array; a row matches when it shares any value
    /// with the selection.
    ArrayMembership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetCardinality {
    Single,
    Multi,
}


/// One selectable (stored value, display label) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    pub stored_value: FacetValue,
    pub display_label: String,
}

impl FacetOption {
    pub fn new(stored_value: impl Into<FacetValue>, display_label: impl Into<String>) -> Self {
        Self { stored_value: stored_value.into(), display_label: display_label.into() }
    }
}


/// One filterable attribute of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub key: String,
    pub domain: FacetDomain,
    pub cardinality: FacetCardinality,
    /// Statically declared options. Empty means the facet is dynamic and its
    /// options are discovered from the data store on first use.
    pub options: Vec<FacetOption>,
}

impl Facet {
    pub fn new(key: impl Into<String>, domain: FacetDomain, cardinality: FacetCardinality) -> Self {
        Self { key: key.into(), domain, cardinality, options: vec![] }
    }

    pub fn with_options(
        key: impl Into<String>,
        domain: FacetDomain,
        cardinality: FacetCardinality,
        options: Vec<FacetOption>,
    ) -> Self {
        Self { key: key.into(), domain, cardinality, options }
    }

    pub fn is_dynamic(&self) -> bool {
        self.options.is_empty()
    }
}
