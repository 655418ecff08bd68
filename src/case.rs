//! Case profile configuration
//!
//! The profile is built once at startup and passed by reference into the
//! dispatcher; handlers read it, nothing mutates it.

/// Default docket number used when a call omits `case_id`.
pub const DEFAULT_CASE_NUMBER: &str = "2024-DR-001847";

/// Name of the child the welfare tooling reports on.
pub const DEFAULT_CHILD_NAME: &str = "Alex";

/// Immutable per-process case configuration.
#[derive(Debug, Clone)]
pub struct CaseProfile {
    /// Court docket number
    pub case_number: String,

    /// Child's name as it appears in welfare assessment reports
    pub child_name: String,
}

impl Default for CaseProfile {
    fn default() -> Self {
        Self {
            case_number: DEFAULT_CASE_NUMBER.to_string(),
            child_name: DEFAULT_CHILD_NAME.to_string(),
        }
    }
}
