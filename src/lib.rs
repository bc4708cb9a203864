//! Form behavior for the bar tab pages, compiled to wasm.
//!
//! On the customer selection page the dropdown of existing customers and the
//! "new customer" text field are mutually exclusive. The module start hook
//! wires that up for the default element ids; [`install_gate`] covers form
//! variants that use other ids.

pub use selection_gate::{GateConfig, GateState, SelectionGate};

use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    web_host::init_console_logger(log::LevelFilter::Info);

    if let Err(err) = web_host::install(GateConfig::default()) {
        log::debug!(target: "bartab", "gate not installed: {err}");
    }
}

/// Bind a dropdown and text field by id. Returns `false` when there is no document.
#[wasm_bindgen]
pub fn install_gate(selection_id: String, free_text_id: String) -> bool {
    let config = GateConfig::default()
        .with_selection_id(selection_id)
        .with_free_text_id(free_text_id);
    web_host::install(config).is_ok()
}
