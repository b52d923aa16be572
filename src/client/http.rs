// src/client/http.rs — Hosted embeddings service over HTTP

use async_trait::async_trait;
use std::time::Duration;

use super::ScoringBackend;
use crate::infra::config::ServiceConfig;
use crate::infra::errors::PlaygroundError;
use crate::playground::types::{FundsAccount, Item, ScoreBody, ScoringResult};

pub struct HttpScoringClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpScoringClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(Duration::from_secs(config.timeout_seconds))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the body of a successful response, mapping transport failures
    /// and non-2xx statuses to `Network`.
    async fn read_body(
        &self,
        resp: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<String, PlaygroundError> {
        let resp = resp.map_err(|e| PlaygroundError::Network(format!("cannot reach service: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(PlaygroundError::Network(format!(
                "HTTP {status}: {}",
                text.trim()
            )));
        }
        resp.text()
            .await
            .map_err(|e| PlaygroundError::Network(format!("reading response failed: {e}")))
    }
}

/// Decode a `/process` body. The service answers validation failures with
/// `200 {"error": "..."}`, so that shape is checked first.
pub fn decode_scoring(body: &str, items: &[Item]) -> Result<ScoringResult, PlaygroundError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| PlaygroundError::Decode(format!("response is not JSON: {e}")))?;

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(PlaygroundError::Service(message.to_string()));
    }

    let result: ScoringResult = serde_json::from_value(value)
        .map_err(|e| PlaygroundError::Decode(format!("unexpected result shape: {e}")))?;

    let missing = result.missing_ids(items);
    if !missing.is_empty() {
        return Err(PlaygroundError::Decode(format!(
            "result has no scores for {} item(s): {}",
            missing.len(),
            missing.join(", ")
        )));
    }
    Ok(result)
}

pub fn decode_funds(body: &str) -> Result<FundsAccount, PlaygroundError> {
    serde_json::from_str(body)
        .map_err(|e| PlaygroundError::Decode(format!("unexpected funds shape: {e}")))
}

#[async_trait]
impl ScoringBackend for HttpScoringClient {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn score(&self, model: &str, items: &[Item]) -> Result<ScoringResult, PlaygroundError> {
        let body = ScoreBody { model, items };
        let resp = self
            .client
            .post(format!("{}/process", self.base_url))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await;
        let text = self.read_body(resp).await?;
        decode_scoring(&text, items)
    }

    async fn remaining_funds(&self) -> Result<FundsAccount, PlaygroundError> {
        let resp = self
            .client
            .get(format!("{}/remaining_funds", self.base_url))
            .timeout(self.timeout)
            .send()
            .await;
        let text = self.read_body(resp).await?;
        decode_funds(&text)
    }
}
