use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{Credential, Settings};
use crate::error::{ConfigurationError, TranslationError};

/// A remote chat-completion service: system instruction plus user input in,
/// assistant text out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Name of the hosted model requests are sent to.
    fn model_name(&self) -> &str;

    /// Performs exactly one request-response cycle.
    async fn complete(&self, instruction: &str, input: &str) -> Result<String, TranslationError>;
}

/// Where and how [`ClientHandle`] talks to the remote service.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl From<&Settings> for ClientOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            timeout: settings.timeout,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Handle to an OpenAI-compatible chat-completion endpoint.
///
/// Construction performs no network I/O; a bad credential only shows up as a
/// [`TranslationError::Remote`] on the first request.
#[derive(Debug)]
pub struct ClientHandle {
    client: Client,
    url: String,
    model: String,
    credential: Credential,
    timeout: Duration,
}

impl ClientHandle {
    pub fn new(credential: Credential, options: ClientOptions) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        let url = format!(
            "{}/chat/completions",
            options.endpoint.trim_end_matches('/')
        );

        tracing::debug!(%url, model = %options.model, "created chat-completion client");

        Ok(Self {
            client,
            url,
            model: options.model,
            credential,
            timeout: options.timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, err: &reqwest::Error) -> TranslationError {
        if err.is_timeout() {
            TranslationError::Timeout(self.timeout)
        } else {
            TranslationError::Network(format!("{}: {err}", self.url))
        }
    }
}

#[async_trait]
impl ChatModel for ClientHandle {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, instruction: &str, input: &str) -> Result<String, TranslationError> {
        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: instruction,
                },
                Message {
                    role: "user",
                    content: input,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.credential.expose())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            return Err(TranslationError::remote(status, &body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TranslationError::EmptyResponse)
    }
}
