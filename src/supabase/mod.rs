//! Minimal PostgREST (Supabase) gateway
//!
//! Only reads are supported. Every request carries the anon key both as the
//! `apikey` header and as a bearer token.

mod error;
pub mod query;
pub mod rows;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use error::{SupabaseError, NO_ROWS_CODE};
pub use query::Query;

/// Accept header that makes PostgREST return a single JSON object
pub const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

const REST_PATH: &str = "rest/v1";

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(url: &str, anon_key: &str, timeout: Duration) -> Result<Self, SupabaseError> {
        let base_url = url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SupabaseError::Config("backend URL is empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SupabaseError::Config(format!(
                "backend URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(anon_key)
            .map_err(|_| SupabaseError::Config("access key contains invalid characters".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key))
            .map_err(|_| SupabaseError::Config("access key contains invalid characters".into()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    /// Run a list query and decode the JSON array
    pub async fn select_rows<T: DeserializeOwned>(
        &self,
        query: &Query,
    ) -> Result<Vec<T>, SupabaseError> {
        let body = self.execute(query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Run a `single()` query and decode the JSON object
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        query: &Query,
    ) -> Result<T, SupabaseError> {
        let query = if query.is_single() {
            query.clone()
        } else {
            query.clone().single()
        };
        let body = self.execute(&query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn execute(&self, query: &Query) -> Result<String, SupabaseError> {
        let url = self.table_url(query.table());
        let params = query.to_params();
        debug!(table = query.table(), ?params, "PostgREST request");

        let mut request = self.http.get(&url).query(&params);
        if query.is_single() {
            request = request.header(ACCEPT, SINGLE_OBJECT_ACCEPT);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = SupabaseError::from_response(status.as_u16(), &body, query.is_single());
            if !matches!(err, SupabaseError::NoRows) {
                warn!(table = query.table(), status = status.as_u16(), "PostgREST error: {}", err);
            }
            return Err(err);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = Client::new("https://abc.supabase.co/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "https://abc.supabase.co");
        assert_eq!(
            client.table_url("players"),
            "https://abc.supabase.co/rest/v1/players"
        );
    }

    #[test]
    fn test_client_rejects_empty_url() {
        let err = Client::new("  ", "key", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));
    }

    #[test]
    fn test_client_rejects_non_http_url() {
        let err = Client::new("abc.supabase.co", "key", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));
    }

    #[test]
    fn test_client_rejects_key_with_newline() {
        let err = Client::new("https://x.co", "bad\nkey", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));
    }
}
