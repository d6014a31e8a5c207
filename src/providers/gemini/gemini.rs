use async_trait::async_trait;
use tracing::info;

use crate::completion::{AnalysisError, CompletionProvider};

/// Model the analysis prompt is tuned for.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Low-variance sampling; report phrasing stays mostly deterministic.
pub const TEMPERATURE: f64 = 0.3;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Google's `generateContent` endpoint. One request per
/// completion; no retries, no timeout beyond the HTTP client's default.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different endpoint. Tests use this to run
    /// against a local stub server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AnalysisError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": TEMPERATURE }
        });

        info!("Requesting completion from Gemini model {}", self.model);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Provider {
                status: status.as_u16(),
                detail,
            });
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AnalysisError::MalformedResponse(json.to_string()))
    }
}
