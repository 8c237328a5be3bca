use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{prompt::PromptStyle, ProviderError, ProviderResponse, TextGenerator};

/// Client for a local Ollama server, used as the secondary provider.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl OllamaClient {
    const DEFAULT_MODEL: &str = "llama2";

    pub fn new() -> Self {
        Self {
            client: super::shared_http_client(),
            base_url: "http://localhost:11434".into(),
            model: Self::DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn send_generate_request(
        &self,
        prompt: &str,
    ) -> Result<GenerateResponse, ProviderError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: 0.3,
                top_p: 0.9,
                num_predict: 1000,
            },
        };

        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let resp = super::ensure_success(resp).await?;

        Ok(resp.json::<GenerateResponse>().await?)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator for OllamaClient {
    const PROVIDER_NAME: &'static str = "ollama";
    const PROMPT_STYLE: PromptStyle = PromptStyle::InstructionTags;

    #[tracing::instrument(skip_all, fields(provider = Self::PROVIDER_NAME, model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .send_generate_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate summary"))?;

        let text = response.response.ok_or_else(|| {
            tracing::error!("Generate response has no 'response' field");
            ProviderError::MalformedResponse("missing response".into())
        })?;

        Ok(ProviderResponse::new(text))
    }
}
