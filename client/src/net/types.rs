//! Response and error types for the answer endpoint.
//!
//! DESIGN
//! ======
//! Only the `answer` field of the response body is consumed. The body is
//! decoded as a generic JSON value and `answer` is looked up by key, so any
//! JSON shape without a usable string `answer` (arrays, scalars, objects
//! missing the field) yields an empty `AskResponse` rather than an error.
//! Only bodies that are not JSON at all, or a bare `null`, fail to decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

/// What the client keeps from a successful response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AskResponse {
    /// Non-empty string `answer`, if the body carried one.
    pub answer: Option<String>,
}

impl AskResponse {
    /// Extract the answer from a decoded body.
    pub fn from_json(body: &Value) -> Self {
        let answer = body
            .get("answer")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Self { answer }
    }

    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `AskError::Decode` when `raw` is not JSON or is `null`.
    pub fn parse(raw: &str) -> Result<Self, AskError> {
        let body: Value = serde_json::from_str(raw).map_err(|e| AskError::Decode(e.to_string()))?;
        if body.is_null() {
            return Err(AskError::Decode("response body is null".to_owned()));
        }
        Ok(Self::from_json(&body))
    }

    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref()
    }
}

/// Errors produced while asking a question.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The endpoint answered with a non-2xx status.
    #[error("接口返回 {0}")]
    Status(u16),

    /// The request never completed (network, CORS, refused connection).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON object.
    #[error("{0}")]
    Decode(String),
}
