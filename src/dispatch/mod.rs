pub mod http;

use async_trait::async_trait;

use crate::error::SiftError;
use crate::prompt;

/// Everything one upstream completion call needs.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Bearer credential, read fresh for every request.
    pub api_key: String,
    pub model: String,
    /// Sent as the system-role message.
    pub system_prompt: String,
    /// Sent verbatim as the user-role message (not trimmed).
    pub user_text: String,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl ProviderRequest {
    /// The critical-thinking analysis request: fixed prompt, model and sampling,
    /// with only the caller's text and the credential varying.
    pub fn analysis(api_key: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: prompt::MODEL.to_string(),
            system_prompt: prompt::SYSTEM_PROMPT.to_string(),
            user_text: user_text.into(),
            temperature: prompt::TEMPERATURE,
            max_tokens: prompt::MAX_TOKENS,
        }
    }
}

/// Narrow seam over the chat-completion provider.
/// Returns the raw completion text; interpreting it is the caller's job.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, req: &ProviderRequest) -> Result<String, SiftError>;
}
