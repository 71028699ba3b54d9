//! REST call to the answer endpoint.
//!
//! Client-side (hydrate): a real multipart POST via `gloo-net`.
//! Server-side (SSR): a stub that fails, since the request only makes sense
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `AskError`; the caller turns it into the
//! failed assistant bubble and an error status line. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AskError, AskResponse};

/// Fixed answer endpoint.
pub const ENDPOINT: &str = "http://localhost:8081/ai/temporal";

/// Name of the single form field carrying the question.
pub const QUESTION_FIELD: &str = "question";

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Option<AskError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(AskError::Status(status))
    }
}

/// Text shown for a failed request: the JS error's own `message` when the
/// failure came from the browser, otherwise the error's display form.
#[cfg(any(test, feature = "hydrate"))]
fn transport_message(js_message: Option<&str>, display: String) -> String {
    js_message.map_or(display, str::to_owned)
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> AskError {
    let js_message = match &err {
        gloo_net::Error::JsError(js) => Some(js.message.clone()),
        _ => None,
    };
    AskError::Transport(transport_message(js_message.as_deref(), err.to_string()))
}

/// Send `question` to [`ENDPOINT`] as form data and decode the JSON reply.
///
/// # Errors
///
/// Returns `AskError::Status` for non-2xx responses, `AskError::Transport` when
/// the request cannot be sent, and `AskError::Decode` when the body is not
/// JSON. A JSON body without a usable `answer` is not an error.
pub async fn ask(question: &str) -> Result<AskResponse, AskError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|e| AskError::Transport(format!("{e:?}")))?;
        form.append_with_str(QUESTION_FIELD, question)
            .map_err(|e| AskError::Transport(format!("{e:?}")))?;

        let resp = gloo_net::http::Request::post(ENDPOINT)
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if let Some(err) = status_error(resp.status()) {
            return Err(err);
        }
        let raw = resp.text().await.map_err(|e| AskError::Decode(e.to_string()))?;
        AskResponse::parse(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err(AskError::Transport("not available on server".to_owned()))
    }
}
