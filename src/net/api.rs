//! HTTP helper for the assistant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error since the endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is classified into a [`SendError`] at this seam.
//! The widget collapses them into one fixed fallback message; the variant
//! detail is logged for operator visibility and never shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Why a chat request failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The backend answered with a non-success HTTP status.
    #[error("server error: {0}")]
    Status(u16),
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not JSON or lacked a `reply` string.
    #[error("malformed response body")]
    Malformed,
}

/// Wire request body: `{"message": <text>}`.
#[derive(Debug, serde::Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Wire response body: `{"reply": <text>}`.
#[derive(Debug, serde::Deserialize)]
struct ChatReply {
    reply: String,
}

/// Extract the assistant reply from a response body.
fn parse_reply(body: &str) -> Result<String, SendError> {
    serde_json::from_str::<ChatReply>(body)
        .map(|r| r.reply)
        .map_err(|_| SendError::Malformed)
}

/// POST the user's message to the assistant endpoint and return the reply.
///
/// No timeout is imposed; the call settles according to the underlying
/// transport.
///
/// # Errors
///
/// Returns a [`SendError`] on non-success status, transport failure, or a
/// malformed response body.
pub async fn send_chat_message(endpoint: &str, message: &str) -> Result<String, SendError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&ChatRequest { message })
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(SendError::Status(resp.status()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        parse_reply(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, message);
        Err(SendError::Network("not available on server".to_owned()))
    }
}
