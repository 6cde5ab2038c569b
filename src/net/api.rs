//! HTTP call to the chat endpoint.
//!
//! Client-side (csr): a multipart `POST` via `gloo-net`, one per submission.
//! Native builds only compile the response interpretation, which is where the
//! success/failure rules live.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ChatError`]; the caller decides what the
//! user sees. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatResponse};
#[cfg(feature = "csr")]
use super::types::ChatRequest;
#[cfg(feature = "csr")]
use crate::config::WidgetConfig;

/// Multipart field carrying the message text.
pub const MESSAGE_FIELD: &str = "message";
/// Multipart field carrying the optional attachment.
pub const FILE_FIELD: &str = "file";

/// Turn an HTTP status and raw body into the bot reply.
///
/// An `error` field in the body is reported as [`ChatError::Application`]
/// whatever the status, so a quota error on a 5xx is still recognised. A
/// non-2xx status without one is [`ChatError::Status`].
///
/// # Errors
///
/// See [`ChatError`] for the cases.
pub fn interpret_response(status: u16, body: &str) -> Result<String, ChatError> {
    let success = (200..300).contains(&status);
    let reply = match serde_json::from_str::<ChatResponse>(body) {
        Ok(parsed) => parsed.into_result(),
        Err(err) => Err(ChatError::Decode(err.to_string())),
    };
    match reply {
        Err(err @ ChatError::Application(_)) => Err(err),
        _ if !success => Err(ChatError::Status(status)),
        other => other,
    }
}

/// Send one message (and optional file) to the configured endpoint.
///
/// The CSRF header is attached when the configured cookie is present.
///
/// # Errors
///
/// Returns a [`ChatError`] for transport, status, decode and application
/// failures.
#[cfg(feature = "csr")]
pub async fn send_chat_message(config: &WidgetConfig, request: ChatRequest) -> Result<String, ChatError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str(MESSAGE_FIELD, &request.message)
        .map_err(js_error)?;
    if let Some(file) = &request.file {
        form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(js_error)?;
    }

    let mut builder = gloo_net::http::Request::post(&config.endpoint);
    match crate::util::cookie::document_cookie(&config.csrf_cookie) {
        Some(token) => builder = builder.header(&config.csrf_header, &token),
        None => log::warn!("no `{}` cookie; sending chat request without CSRF token", config.csrf_cookie),
    }

    let resp = builder
        .body(form)
        .map_err(|e| ChatError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    log::debug!("chat endpoint answered {status} ({} bytes)", body.len());
    interpret_response(status, &body)
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> ChatError {
    ChatError::Transport(format!("{err:?}"))
}
