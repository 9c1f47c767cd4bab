//! Clipboard writes through the async Clipboard API.
//!
//! The write is issued synchronously inside the caller's user gesture and
//! creates no DOM nodes. Failures are always detectable: a missing API is
//! an immediate error, a refused write rejects the returned promise.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// `navigator.clipboard` is missing, typically on an insecure origin.
    #[error("clipboard API is not available in this context")]
    Unavailable,
    /// The browser refused the write (permissions, no user gesture, ...).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Describe a rejection value from the Clipboard API.
///
/// DOMExceptions arrive as `"NotAllowedError: ..."`; anything without text
/// is reported generically.
#[must_use]
pub fn rejection_reason(raw: Option<String>) -> String {
    match raw {
        Some(reason) if !reason.trim().is_empty() => reason.trim().to_owned(),
        _ => "unknown reason".to_owned(),
    }
}

/// Error for a refused write, from the rejection's text if it has any.
#[must_use]
pub fn rejection(raw: Option<String>) -> ClipboardError {
    ClipboardError::Rejected(rejection_reason(raw))
}

/// Wait for a pending clipboard write.
#[cfg(feature = "browser")]
async fn settle(promise: js_sys::Promise) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ()).map_err(|value| {
        let text = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.to_string()))
            .or_else(|| value.as_string());
        rejection(text)
    })
}

#[cfg(feature = "browser")]
fn system_clipboard() -> Result<web_sys::Clipboard, ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    Ok(clipboard)
}

/// Start writing `text` to the system clipboard.
///
/// The returned promise resolves once the text is on the clipboard and
/// rejects if the browser refuses. A refusal is also logged.
///
/// # Errors
///
/// Returns [`ClipboardError::Unavailable`] when the page cannot reach the
/// Clipboard API at all.
#[cfg(feature = "browser")]
pub fn copy_to_clipboard(text: &str) -> Result<js_sys::Promise, ClipboardError> {
    let clipboard = system_clipboard()?;

    let promise = clipboard.write_text(text);
    let watched = promise.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = settle(watched).await {
            log::warn!("{e}");
        }
    });
    Ok(promise)
}
