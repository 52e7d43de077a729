use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::dispatch::{CompletionClient, ProviderRequest};
use crate::error::SiftError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub const MAX_RESPONSE_BYTES: usize = 2 * 1024 * 1024; // 2MB

/// OpenAI-compatible chat-completions client.
pub struct HttpDispatch {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

impl HttpDispatch {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SiftError> {
        // No overall timeout: a slow completion is bounded by the host, not by us.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for HttpDispatch {
    async fn complete(&self, req: &ProviderRequest) -> Result<String, SiftError> {
        let body = ChatRequest {
            model: &req.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &req.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &req.user_text,
                },
            ],
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&req.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let (error_bytes, _) = read_capped(response, MAX_RESPONSE_BYTES)
                .await
                .unwrap_or_default();
            let text = String::from_utf8_lossy(&error_bytes);
            tracing::error!(status = status.as_u16(), "completion API error: {text}");
            return Err(SiftError::Upstream {
                message: format!("{status}: {text}"),
                status: Some(status.as_u16()),
            });
        }

        let too_large = || SiftError::Upstream {
            message: format!("response too large (max {MAX_RESPONSE_BYTES} bytes)"),
            status: None,
        };

        if response
            .content_length()
            .is_some_and(|len| len > MAX_RESPONSE_BYTES as u64)
        {
            return Err(too_large());
        }

        let (bytes, truncated) = read_capped(response, MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| SiftError::Upstream {
                message: format!("failed to read response body: {e}"),
                status: None,
            })?;

        if truncated {
            return Err(too_large());
        }

        let completion: ChatCompletion = serde_json::from_slice(&bytes)
            .map_err(|e| SiftError::SchemaParse(format!("failed to parse response: {e}")))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SiftError::SchemaParse("empty choices or null content".to_string()))?;

        tracing::debug!(bytes = bytes.len(), "completion received");

        Ok(text)
    }
}

/// Read at most `limit` bytes of the body, chunk by chunk, so an oversized
/// response is never buffered whole. The flag is set when bytes were left unread.
async fn read_capped(
    mut response: Response,
    limit: usize,
) -> Result<(Vec<u8>, bool), reqwest::Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = limit - buf.len();
        if chunk.len() > room {
            buf.extend_from_slice(&chunk[..room]);
            return Ok((buf, true));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok((buf, false))
}
