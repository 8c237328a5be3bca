use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{prompt::PromptStyle, ProviderError, ProviderResponse, TextGenerator};

/// Chat-completions client used as the primary provider.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &str = include_str!("./prompts/system_0.txt");
    const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
    const MAX_TOKENS: u32 = 1000;
    const TEMPERATURE: f32 = 0.3;

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: super::shared_http_client(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
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

    pub async fn send_completion_request(
        &self,
        user_content: &str,
    ) -> Result<CompletionResponse, ProviderError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT.trim_end()
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ],
            "max_tokens": Self::MAX_TOKENS,
            "temperature": Self::TEMPERATURE
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let resp = super::ensure_success(resp).await?;

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: Option<CompletionMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if the envelope carries one.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

impl TextGenerator for OpenAIClient {
    const PROVIDER_NAME: &'static str = "openai";
    const PROMPT_STYLE: PromptStyle = PromptStyle::Plain;

    #[tracing::instrument(skip_all, fields(provider = Self::PROVIDER_NAME, model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .send_completion_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate summary"))?;

        let text = response.into_text().ok_or_else(|| {
            tracing::error!("Completion response has no message content");
            ProviderError::MalformedResponse("missing choices[0].message.content".into())
        })?;

        Ok(ProviderResponse::new(text))
    }
}
