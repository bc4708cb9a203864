//! In-memory document that hosts a [`selection_gate::SelectionGate`] without a browser.
//!
//! The document is built from a [`Node`] tree. Form controls are seeded from
//! their markup attributes, `id` lookup follows `getElementById` rules, and
//! change listeners are dispatched synchronously in registration order.

mod controls;
mod document;
mod node;

pub use controls::{ControlKind, SelectHandle, TextInputHandle, TextInputSnapshot, control_kind};
pub use document::{MemoryDocument, ReadyState};
pub use node::{Id, Node};
