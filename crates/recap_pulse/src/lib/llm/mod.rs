pub mod ollama;
pub mod openai;

use std::{future::Future, sync::LazyLock};

use crate::{prompt::PromptStyle, ProviderError, ProviderResponse};

/// Connection pool shared by every provider client in the process.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

pub(crate) fn shared_http_client() -> reqwest::Client {
    HTTP_CLIENT.clone()
}

/// A text-generation backend: one prompt in, raw text out.
pub trait TextGenerator {
    const PROVIDER_NAME: &'static str;
    const PROMPT_STYLE: PromptStyle;

    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<ProviderResponse, ProviderError>> + Send;
}

impl<T: TextGenerator + Sync> TextGenerator for &T {
    const PROVIDER_NAME: &'static str = T::PROVIDER_NAME;
    const PROMPT_STYLE: PromptStyle = T::PROMPT_STYLE;

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        (**self).generate(prompt).await
    }
}

/// Maps a non-success status to [`ProviderError::Api`] carrying the body text.
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    Err(ProviderError::Api { status, message })
}
