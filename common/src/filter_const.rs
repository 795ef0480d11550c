//! Shared tuning constants for the filter engine.

/// How long the executor waits after a selection change before querying, so
/// rapid successive clicks coalesce into one query.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Upper bound on discovered options per dynamic facet.
pub const DISCOVERY_OPTION_LIMIT: usize = 21;
