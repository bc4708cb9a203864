//! Browser host: binds the selection gate to the live page through `web-sys`.

mod console;
mod document;
mod ready;

pub use console::init_console_logger;
pub use document::{WebDocument, WebSelect, WebTextInput};
pub use ready::on_document_ready;

use selection_gate::{GateConfig, HostError, SelectionGate};

/// Install the gate on the current page once its markup has been parsed.
///
/// Pages without the configured controls are left alone. An error is only
/// returned when there is no document at all or the ready hook could not be
/// registered.
pub fn install(config: GateConfig) -> Result<(), HostError> {
    let document = WebDocument::current().ok_or_else(|| HostError::new("no document"))?;
    let target = document.clone();

    on_document_ready(document.raw(), move || {
        let _ = SelectionGate::initialize(&target, &config);
    })
}
