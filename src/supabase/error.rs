use thiserror::Error;

/// PostgREST error code for "zero or many rows where one was requested"
pub const NO_ROWS_CODE: &str = "PGRST116";

/// Errors raised by the PostgREST gateway
#[derive(Error, Debug)]
pub enum SupabaseError {
    /// Non-2xx response carrying a PostgREST error body
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// `single()` query matched zero (or more than one) rows
    #[error("No matching row")]
    NoRows,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend configuration: {0}")]
    Config(String),
}

impl SupabaseError {
    /// Classify a non-2xx response body
    ///
    /// An HTTP 406 or a `PGRST116` code on a single-row request means no row.
    pub fn from_response(status: u16, body: &str, single: bool) -> Self {
        let parsed: super::rows::ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        if single && (status == 406 || parsed.code.as_deref() == Some(NO_ROWS_CODE)) {
            return SupabaseError::NoRows;
        }
        let message = parsed
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        SupabaseError::Api {
            status,
            code: parsed.code,
            message,
        }
    }
}
