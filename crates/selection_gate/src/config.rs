/// Identifier of the dropdown listing existing names.
pub const DEFAULT_SELECTION_ID: &str = "existing_name";

/// Identifier of the text input for a new name.
pub const DEFAULT_FREE_TEXT_ID: &str = "new_name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub selection_id: String,
    pub free_text_id: String,
    /// Apply the selection's current value once right after binding.
    ///
    /// Off by default: the initial enabled state is whatever the markup says.
    pub sync_on_init: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            selection_id: DEFAULT_SELECTION_ID.to_string(),
            free_text_id: DEFAULT_FREE_TEXT_ID.to_string(),
            sync_on_init: false,
        }
    }
}

impl GateConfig {
    pub fn with_selection_id(mut self, id: impl Into<String>) -> Self {
        self.selection_id = id.into();
        self
    }

    pub fn with_free_text_id(mut self, id: impl Into<String>) -> Self {
        self.free_text_id = id.into();
        self
    }

    pub fn with_sync_on_init(mut self, sync: bool) -> Self {
        self.sync_on_init = sync;
        self
    }
}
