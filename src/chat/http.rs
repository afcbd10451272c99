//! HTTP messaging backends.
//!
//! - [`HttpBackend`] posts a [`ChatRequest`] to the host server's `/api/chat`
//!   route and expects a [`ChatReply`] back. The browser build uses it.
//! - [`RagBackend`] speaks the upstream retrieval service's `/rag` contract
//!   (`{"text"}` in, `{"response"}` out). The host server forwards to it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use super::backend::{BackendError, ChatReply, ChatRequest, MessagingBackend};
use super::message::Message;

/// Backend that talks to the host server's chat route.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend posting to `endpoint` (absolute URL of `/api/chat`).
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, BackendError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a backend with a custom reqwest client.
    pub fn with_client(
        endpoint: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            endpoint: Url::parse(endpoint.as_ref())?,
            http,
        })
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MessagingBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Message, BackendError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let reply: ChatReply = decode(response).await?;
        Ok(Message::bot(reply.text))
    }
}

/// Request body of the upstream `/rag` route.
#[derive(Debug, Serialize)]
struct RagQuery<'a> {
    text: &'a str,
}

/// Response body of the upstream `/rag` route.
#[derive(Debug, Deserialize)]
struct RagAnswer {
    response: String,
}

/// Backend that forwards drafts to the retrieval-augmented upstream service.
///
/// The upstream keeps no conversation, so only the draft is sent.
#[derive(Debug, Clone)]
pub struct RagBackend {
    endpoint: Url,
    http: reqwest::Client,
}

impl RagBackend {
    /// Create a backend posting to `endpoint` (absolute URL of `/rag`).
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, BackendError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a backend with a custom reqwest client.
    pub fn with_client(
        endpoint: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            endpoint: Url::parse(endpoint.as_ref())?,
            http,
        })
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MessagingBackend for RagBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Message, BackendError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RagQuery {
                text: &request.draft_text,
            })
            .send()
            .await?;
        let answer: RagAnswer = decode(response).await?;
        Ok(Message::bot(answer.response))
    }
}

/// Error body shape used by both the host server and the upstream service.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".into());
    let message = serde_json::from_str::<ErrorDetail>(&body)
        .map(|detail| detail.detail)
        .unwrap_or(body);
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}
