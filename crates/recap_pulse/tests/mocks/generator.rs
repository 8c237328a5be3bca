use std::sync::{Arc, Mutex};

use recap_pulse::{prompt::PromptStyle, ProviderError, ProviderResponse, TextGenerator};

/// One scripted outcome: response text, or the HTTP status to fail with.
pub type Reply = Result<&'static str, u16>;

/// Replays `replies` in order; once exhausted the last reply repeats.
#[derive(Clone)]
pub struct MockGenerator {
    pub replies: Vec<Reply>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new(text: &'static str) -> Self {
        Self::scripted(vec![Ok(text)])
    }

    pub fn failing(status: u16) -> Self {
        Self::scripted(vec![Err(status)])
    }

    pub fn scripted(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty(), "mock needs at least one reply");
        Self {
            replies,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl TextGenerator for MockGenerator {
    const PROVIDER_NAME: &'static str = "mock";
    const PROMPT_STYLE: PromptStyle = PromptStyle::Plain;

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let reply = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            let idx = (calls.len() - 1).min(self.replies.len() - 1);
            self.replies[idx]
        };

        match reply {
            Ok(text) => Ok(ProviderResponse::new(text)),
            Err(status) => Err(ProviderError::Api {
                status,
                message: format!("mock failure {status}"),
            }),
        }
    }
}
