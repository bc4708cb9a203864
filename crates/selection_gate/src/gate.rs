use crate::config::GateConfig;
use crate::control::{ControlHost, FreeTextControl, SelectionControl};
use crate::error::SkipReason;

const LOG_TARGET: &str = "selection_gate";

/// Enabled state of the free-text control, derived from the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Enabled,
    Disabled,
}

impl GateState {
    /// A non-empty selection disables free text; the empty placeholder enables it.
    pub fn for_selection(value: &str) -> Self {
        if value.is_empty() {
            GateState::Enabled
        } else {
            GateState::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, GateState::Enabled)
    }
}

/// Result of [`SelectionGate::initialize`].
#[derive(Debug)]
pub enum InitOutcome<S, F> {
    Bound(SelectionGate<S, F>),
    Skipped(SkipReason),
}

impl<S, F> InitOutcome<S, F> {
    pub fn is_bound(&self) -> bool {
        matches!(self, InitOutcome::Bound(_))
    }

    pub fn gate(&self) -> Option<&SelectionGate<S, F>> {
        match self {
            InitOutcome::Bound(gate) => Some(gate),
            InitOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            InitOutcome::Bound(_) => None,
            InitOutcome::Skipped(reason) => Some(reason),
        }
    }
}

/// Live binding between a selection control and a free-text control.
///
/// The binding holds handles only; both elements stay owned by the host.
/// It is created once per document and has no teardown: it lives until the
/// document goes away.
#[derive(Clone, Debug)]
pub struct SelectionGate<S, F> {
    selection: S,
    free_text: F,
}

impl<S: SelectionControl, F: FreeTextControl> SelectionGate<S, F> {
    /// Bind the controls named by `config`, if the document has both.
    ///
    /// A missing control is a valid page layout (e.g. the form variant without
    /// a dropdown): nothing is registered, nothing is mutated, nothing is
    /// logged.
    pub fn initialize<H>(host: &H, config: &GateConfig) -> InitOutcome<S, F>
    where
        H: ControlHost<Selection = S, FreeText = F>,
    {
        let selection = host.selection_control(&config.selection_id);
        let free_text = host.free_text_control(&config.free_text_id);

        let (selection, free_text) = match (selection, free_text) {
            (Some(selection), Some(free_text)) => (selection, free_text),
            (None, _) => return InitOutcome::Skipped(SkipReason::MissingSelectionControl),
            (Some(_), None) => return InitOutcome::Skipped(SkipReason::MissingFreeTextControl),
        };

        let gate = SelectionGate {
            selection,
            free_text,
        };

        let listener_gate = gate.clone();
        let listener = Box::new(move || {
            listener_gate.on_selection_changed();
        });

        if let Err(err) = host.listen_change(&gate.selection, listener) {
            log::debug!(target: LOG_TARGET, "binding skipped: {err}");
            return InitOutcome::Skipped(SkipReason::ListenerRejected(err));
        }

        log::trace!(
            target: LOG_TARGET,
            "bound #{} -> #{}",
            config.selection_id,
            config.free_text_id
        );

        if config.sync_on_init {
            gate.on_selection_changed();
        }

        InitOutcome::Bound(gate)
    }

    /// Mirror the selection's current value onto the free-text control.
    ///
    /// Entering `Disabled` clears the text. Returning to `Enabled` leaves the
    /// value as it is; an earlier draft is not restored.
    pub fn on_selection_changed(&self) -> GateState {
        let value = self.selection.value();
        let state = GateState::for_selection(&value);

        match state {
            GateState::Disabled => {
                self.free_text.set_disabled(true);
                self.free_text.set_value("");
            }
            GateState::Enabled => {
                self.free_text.set_disabled(false);
            }
        }

        log::trace!(target: LOG_TARGET, "selection {value:?} -> {state:?}");
        state
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn free_text(&self) -> &F {
        &self.free_text
    }
}
