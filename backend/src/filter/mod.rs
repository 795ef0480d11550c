//! Filter engine module exports.

mod state;
pub use state::FilterState;

mod executor;
pub use executor::{RowResultSet, apply_predicate};

mod session;
pub use session::{FilterSession, FilterSnapshot};

pub mod local;
