//! Thin JSON-over-HTTP client for the smoke checks.

use anyhow::{ensure, Context};
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;

use crate::config::SmokeConfig;

/// Status and decoded body of one API call. Non-JSON bodies are kept as a
/// JSON string.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Return the body if the status is `expected`, otherwise an error naming
    /// both.
    pub fn expect_status(self, expected: StatusCode) -> anyhow::Result<Value> {
        ensure!(
            self.status == expected,
            "expected HTTP {expected}, got {} with body {}",
            self.status,
            self.body
        );
        Ok(self.body)
    }
}

pub struct SmokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl SmokeClient {
    pub fn new(config: &SmokeConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<ApiResponse> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<ApiResponse> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> anyhow::Result<ApiResponse> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<ApiResponse> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send(&self, request: RequestBuilder) -> anyhow::Result<ApiResponse> {
        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let text = response
            .text()
            .await
            .context("failed to read response body")?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(ApiResponse { status, body })
    }
}
