use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tkp_logging::{tkp_debug, tkp_info};

use crate::{FailureKind, GenerateError};

/// The external document generator: turns a client request into a base64 document.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, query: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8765/generate".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Generation runs a language model and builds the document; it is slow.
            request_timeout: Duration::from_secs(300),
            max_bytes: 32 * 1024 * 1024,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    document: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Generator reached over HTTP: `POST {endpoint}` with `{"query": ...}`,
/// answered by `{"document": "<base64>"}` or `{"error": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    settings: GeneratorSettings,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn too_large(&self, actual: u64) -> GenerateError {
        GenerateError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "",
        )
    }
}

#[async_trait::async_trait]
impl Generator for HttpGenerator {
    async fn generate(&self, query: &str) -> Result<String, GenerateError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| GenerateError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(&GenerateRequest { query })
            .map_err(|err| GenerateError::new(FailureKind::InvalidResponse, err.to_string()))?;

        tkp_info!("POST {} query_len={}", url, query.chars().count());
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        tkp_debug!("generator answered {} with {} bytes", status, bytes.len());

        if !status.is_success() {
            // Backends report their own human-readable reason in the body.
            let reason = String::from_utf8_lossy(&bytes).trim().to_string();
            return Err(GenerateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                reason,
            ));
        }

        let parsed: GenerateResponse = serde_json::from_slice(&bytes).map_err(|err| {
            GenerateError::new(
                FailureKind::InvalidResponse,
                format!("invalid generator response: {err}"),
            )
        })?;
        match (parsed.document, parsed.error) {
            (_, Some(error)) => Err(GenerateError::new(FailureKind::Backend, error)),
            (Some(document), None) => Ok(document),
            (None, None) => Err(GenerateError::new(
                FailureKind::InvalidResponse,
                "generator response has no document",
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_timeout() {
        return GenerateError::new(FailureKind::Timeout, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
