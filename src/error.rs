use thiserror::Error;

use crate::supabase::SupabaseError;

/// Minimum trimmed length for a name search
pub const MIN_SEARCH_LEN: usize = 2;

pub const SEARCH_TOO_SHORT: &str = "Please enter at least 2 characters to search";

pub const PAGE_OUT_OF_RANGE: &str = "Page number is too large";

/// Errors surfaced to the user by list and detail views
///
/// Cloneable so it can live in UI state and travel inside actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(String),

    /// The data source answered with an error
    #[error("Failed to fetch players. Error: {0}")]
    Source(String),

    /// A single-row fetch found nothing
    #[error("No data found")]
    NotFound,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ViewError {
    pub fn search_too_short() -> Self {
        ViewError::Validation(SEARCH_TOO_SHORT.to_string())
    }

    pub fn page_out_of_range() -> Self {
        ViewError::Validation(PAGE_OUT_OF_RANGE.to_string())
    }

    /// The message without the player-list prefix, for non-list lookups
    pub fn detail(&self) -> String {
        match self {
            ViewError::Validation(message) | ViewError::Source(message) => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewError::NotFound)
    }
}

impl From<SupabaseError> for ViewError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::NoRows => ViewError::NotFound,
            SupabaseError::Api { message, .. } => ViewError::Source(message),
            SupabaseError::Config(message) => ViewError::Source(message),
            SupabaseError::Transport(e) => ViewError::Unexpected(e.to_string()),
            SupabaseError::Decode(e) => ViewError::Unexpected(e.to_string()),
        }
    }
}
