//! Control traits implemented by host documents.
//!
//! Controls are cheap, clonable handles to elements owned by the host. The
//! gate only reads and writes their properties; it never creates or destroys
//! them. Setters take `&self` because the underlying element is shared with
//! the host (a DOM node, or a cell in an in-memory document).

use crate::error::HostError;

/// Callback invoked when the selection control reports a value change.
pub type ChangeListener = Box<dyn FnMut()>;

/// A single-selection control. The empty string means "nothing selected".
pub trait SelectionControl: Clone + 'static {
    fn value(&self) -> String;
}

/// `<input type>` values that cannot act as the free-text control.
const NON_TEXT_INPUT_TYPES: &[&str] = &[
    "hidden", "checkbox", "radio", "file", "button", "submit", "reset", "image",
];

/// Whether an `<input>` with this `type` attribute can serve as free text.
///
/// Shared by every host so the same markup binds the same way. A missing,
/// empty or unknown type is a text input, as in browsers.
pub fn accepts_free_text_type(ty: &str) -> bool {
    let ty = ty.trim();
    !NON_TEXT_INPUT_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(ty))
}

/// A single-line text input with a mutable value and disabled flag.
pub trait FreeTextControl: Clone + 'static {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);
}

/// Document-side capabilities the gate needs.
///
/// Lookups return `None` when no element of the right kind carries the
/// identifier. That is an expected page configuration, not a failure.
pub trait ControlHost {
    type Selection: SelectionControl;
    type FreeText: FreeTextControl;

    fn selection_control(&self, id: &str) -> Option<Self::Selection>;

    fn free_text_control(&self, id: &str) -> Option<Self::FreeText>;

    /// Register `listener` for change notifications on `target`.
    ///
    /// The registration lasts for the lifetime of the document.
    fn listen_change(
        &self,
        target: &Self::Selection,
        listener: ChangeListener,
    ) -> Result<(), HostError>;
}
