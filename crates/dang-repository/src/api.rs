//! HTTP document store repository implementation
//!
//! Persists decisions through a remote JSON document store.
//!
//! # API Specification
//!
//! ## POST /json/write
//!
//! ```json
//! {
//!   "filename": "pricing",
//!   "content": { "name": "pricing", "input_form": [...], "output_form": [...] }
//! }
//! ```
//!
//! `201 Created` means the document was written. Any other status is a
//! failure; the store may describe it in an `error` field of a JSON body.

use async_trait::async_trait;
use dang_core::Decision;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::DecisionRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP document store repository
#[derive(Debug, Clone)]
pub struct ApiRepository {
    client: Client,

    /// Base URL of the document store (e.g., "http://localhost:8090")
    base_url: String,
}

#[derive(Serialize)]
struct WriteRequest<'a> {
    filename: &'a str,
    content: &'a Decision,
}

impl ApiRepository {
    /// Create a new API repository
    ///
    /// No request is made until the first insert.
    pub fn new(base_url: impl Into<String>) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RepositoryError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn write_url(&self) -> String {
        format!("{}/json/write", self.base_url)
    }

    /// Turn a non-201 response into the error surfaced to the caller
    async fn rejection(response: reqwest::Response) -> RepositoryError {
        let status = response.status();

        let body: JsonValue = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return RepositoryError::Api(format!(
                    "Failed to decode document store response: {}",
                    e
                ))
            }
        };

        match body.get("error") {
            Some(error) => {
                let description = match error {
                    JsonValue::String(text) => text.clone(),
                    other => other.to_string(),
                };
                RepositoryError::Api(format!(
                    "http {} from document store - {}",
                    status_line(status),
                    description
                ))
            }
            None => RepositoryError::Api(format!(
                "document store returned http status code {} with no error description",
                status.as_u16()
            )),
        }
    }
}

/// `400 Bad Request` style status text
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[async_trait]
impl DecisionRepository for ApiRepository {
    async fn insert(&self, decision: &Decision) -> RepositoryResult<()> {
        let request = WriteRequest {
            filename: &decision.name,
            content: decision,
        };

        let response = self
            .client
            .post(self.write_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                RepositoryError::Api(format!("Failed to reach document store: {}", e))
            })?;

        if response.status() == StatusCode::CREATED {
            tracing::debug!(
                decision = decision.name.as_str(),
                "Wrote decision to document store"
            );
            return Ok(());
        }

        Err(Self::rejection(response).await)
    }

    fn backend(&self) -> &'static str {
        "api"
    }
}
