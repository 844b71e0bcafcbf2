//! HTTP client for the Socrata Open Data (SODA) resource API.
//!
//! Issues a single `SoQL` query per restaurant against the city's inspection
//! dataset and normalizes the rows into [`InspectionRecord`]s. There is no
//! retry here: a failed query surfaces immediately.

use std::time::Duration;

use healthbadge_core::InspectionRecord;
use reqwest::{Client, Url};

use crate::error::SodaError;
use crate::normalize::normalize_rows;
use crate::soql::{business_name_filter, select_clause, ORDER_BY};
use crate::types::{ApiErrorBody, InspectionRow};

const APP_TOKEN_HEADER: &str = "X-App-Token";

/// Client for the inspection-records dataset.
///
/// The host and dataset come from configuration, so tests point the same
/// constructor at a mock server.
pub struct InspectionClient {
    client: Client,
    base_url: Url,
    dataset: String,
    app_token: Option<String>,
}

impl InspectionClient {
    /// Creates a client with a custom host and dataset identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SodaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SodaError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        dataset: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SodaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replaces.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SodaError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            dataset: dataset.to_owned(),
            app_token: None,
        })
    }

    /// Sends `token` as the Socrata application token on every request.
    #[must_use]
    pub fn with_app_token(mut self, token: Option<String>) -> Self {
        self.app_token = token;
        self
    }

    /// Fetches the inspection history for a restaurant by exact business name.
    ///
    /// Rows come back newest first and their order is preserved. An empty
    /// vector means the dataset has no business by that name.
    ///
    /// # Errors
    ///
    /// - [`SodaError::Http`] on network failure or a non-2xx status without
    ///   an error envelope.
    /// - [`SodaError::Api`] if the API answers with its error envelope.
    /// - [`SodaError::Deserialize`] if the body is not the expected row array.
    pub async fn query(&self, restaurant_name: &str) -> Result<Vec<InspectionRecord>, SodaError> {
        let url = self.build_url(restaurant_name)?;
        tracing::debug!(restaurant = restaurant_name, %url, "querying inspection records");

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.app_token {
            request = request.header(APP_TOKEN_HEADER, token);
        }
        let response = request.send().await?;

        let status_check = response.error_for_status_ref().map(|_| ());
        if let Err(status_err) = status_check {
            let body = response.text().await.unwrap_or_default();
            if let Some(message) = Self::api_error_message(&body) {
                return Err(SodaError::Api(message));
            }
            return Err(SodaError::Http(status_err));
        }

        let body = response.text().await?;
        if let Some(message) = Self::api_error_message(&body) {
            return Err(SodaError::Api(message));
        }
        let rows: Vec<InspectionRow> =
            serde_json::from_str(&body).map_err(|e| SodaError::Deserialize {
                context: format!("inspection rows for '{restaurant_name}'"),
                source: e,
            })?;

        let records = normalize_rows(rows);
        tracing::debug!(
            restaurant = restaurant_name,
            records = records.len(),
            "inspection records received"
        );
        Ok(records)
    }

    /// Builds the resource URL with percent-encoded `SoQL` parameters.
    fn build_url(&self, restaurant_name: &str) -> Result<Url, SodaError> {
        let mut url = self
            .base_url
            .join(&format!("resource/{}.json", self.dataset))
            .map_err(|e| SodaError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("$select", &select_clause())
            .append_pair("$where", &business_name_filter(restaurant_name))
            .append_pair("$order", ORDER_BY);
        Ok(url)
    }

    /// Extracts the message from a Socrata error envelope, if `body` is one.
    fn api_error_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;
        let flagged = object.get("error").and_then(serde_json::Value::as_bool) == Some(true)
            || object.contains_key("code");
        if !flagged {
            return None;
        }
        let envelope: ApiErrorBody = serde_json::from_value(value).ok()?;
        Some(
            envelope
                .message
                .or(envelope.code)
                .unwrap_or_else(|| "unknown error".to_string()),
        )
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
