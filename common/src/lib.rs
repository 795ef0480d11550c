//! Common library exports shared between the filter engine and its callers.

extern crate serde;


pub mod facet;
pub mod catalog;
pub mod selection;
pub mod predicate;
pub mod result_set;
pub mod profiles;
pub mod filter_const;
