//! JavaScript surface and module start-up.
//!
//! On instantiation the module installs logging. Once the document has
//! parsed it reads the page config and runs one registration pass: form
//! validation, anchor scrolling and notification auto-hide. The remaining
//! exports are called from page script.

use wasm_bindgen::prelude::*;

use crate::config;
use crate::net::api;
use crate::util::usage_reporter::{self, ReporterId};
use crate::util::{clipboard, dom, form_validation, notify, smooth_scroll};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = dom::document() else {
        log::warn!("no document available; page behaviors disabled");
        return;
    };
    let ready_document = document.clone();
    if let Err(e) = dom::on_ready(&document, move || {
        // The config block may sit anywhere in the body, so read it only
        // once parsing has finished.
        let (resolved, problem) = config::resolve(config::page_block().as_deref());
        log::set_max_level(resolved.level().to_level_filter());
        if let Some(e) = problem {
            log::warn!("{e}; using defaults");
        }
        config::install(resolved);

        let bound = bind_all(&ready_document);
        log::debug!("registration pass bound {bound} element(s)");
    }) {
        log::warn!("failed to wait for DOMContentLoaded: {e:?}");
    }
}

fn bind_all(document: &web_sys::Document) -> usize {
    let config = config::current();
    form_validation::bind_forms(document, &config)
        + smooth_scroll::bind_anchors(document)
        + notify::schedule_auto_hide(document, &config)
}

/// Bind forms, anchors and notifications added since the last pass.
///
/// Elements that are already bound are skipped. Returns how many elements
/// were newly bound.
#[wasm_bindgen]
pub fn rebind() -> usize {
    dom::document().map_or(0, |document| bind_all(&document))
}

/// Copy `text` to the system clipboard.
///
/// Throws when the Clipboard API is unavailable; otherwise returns a
/// promise that rejects if the browser refuses the write.
///
/// # Errors
///
/// Returns a `JsError` when the Clipboard API cannot be reached.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) -> Result<js_sys::Promise, JsError> {
    clipboard::copy_to_clipboard(text).map_err(|e| {
        log::warn!("{e}");
        JsError::from(e)
    })
}

/// A running usage reporter.
///
/// Discarding the handle leaves the reporter running; call `stop()` to end it.
#[wasm_bindgen]
pub struct UsageReporterHandle {
    id: ReporterId,
    session_id: String,
}

#[wasm_bindgen]
impl UsageReporterHandle {
    #[wasm_bindgen(getter, js_name = sessionId)]
    pub fn session_id(&self) -> String {
        self.session_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        usage_reporter::is_running(self.id)
    }

    /// Cancel this reporter. Returns `false` if it was already stopped.
    pub fn stop(&self) -> bool {
        usage_reporter::stop(self.id)
    }
}

/// Start reporting simulated usage for `session_id` on a fixed interval.
#[wasm_bindgen(js_name = updateDataUsage)]
pub fn update_data_usage(session_id: &str) -> UsageReporterHandle {
    let id = usage_reporter::start(session_id, config::current());
    UsageReporterHandle {
        id,
        session_id: session_id.to_owned(),
    }
}

/// Number of reporters currently running for `session_id`.
#[wasm_bindgen(js_name = activeReporters)]
pub fn active_reporters(session_id: &str) -> usize {
    usage_reporter::active_for(session_id)
}

/// Stop every reporter of `session_id` and end the session on the server.
///
/// Resolves to `true` when the server confirmed the stop.
#[wasm_bindgen(js_name = stopSession)]
pub async fn stop_session(session_id: String) -> bool {
    let stopped = usage_reporter::stop_session(&session_id);
    let base = config::current().usage_endpoint_base.clone();
    match api::stop_session(&base, &session_id).await {
        Ok(resp) if resp.is_success() => {
            log::info!("session {session_id} stopped ({stopped} reporter(s) cancelled)");
            true
        }
        Ok(resp) => {
            log::warn!("session {session_id} not stopped: {resp}");
            false
        }
        Err(e) => {
            log::warn!("error stopping session {session_id}: {e}");
            false
        }
    }
}
