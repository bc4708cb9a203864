use crate::document::describe_js_error;
use selection_gate::HostError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Run `f` exactly once after the document's markup has been parsed.
///
/// The wasm module may finish loading after `DOMContentLoaded` already fired,
/// so a document that is no longer loading runs `f` right away.
pub fn on_document_ready(
    document: &Document,
    f: impl FnOnce() + 'static,
) -> Result<(), HostError> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| HostError::new(describe_js_error(&err)))
}
