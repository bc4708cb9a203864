//! # selection_gate
//!
//! UI-agnostic binding between a selection dropdown and a free-text input.
//!
//! A form that lets the user either pick an existing name or type a new one
//! keeps the two mutually exclusive: choosing a non-empty option disables and
//! clears the text input, choosing the empty placeholder enables it again.
//!
//! - [`ControlHost`]: looks up controls by identifier and registers listeners
//! - [`SelectionGate`]: the live binding between the two controls
//! - [`GateConfig`]: element identifiers and init behavior
//!
//! This crate does not depend on any DOM. Integration layers implement
//! [`ControlHost`] for their document type.
//!
//! ```
//! use selection_gate::GateState;
//!
//! assert_eq!(GateState::for_selection(""), GateState::Enabled);
//! assert_eq!(GateState::for_selection("42"), GateState::Disabled);
//! ```

mod config;
mod control;
mod error;
mod gate;

pub use config::{DEFAULT_FREE_TEXT_ID, DEFAULT_SELECTION_ID, GateConfig};
pub use control::{
    ChangeListener, ControlHost, FreeTextControl, SelectionControl, accepts_free_text_type,
};
pub use error::{HostError, SkipReason};
pub use gate::{GateState, InitOutcome, SelectionGate};

#[cfg(test)]
mod tests;
