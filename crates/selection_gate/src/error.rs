use std::fmt;

/// Failure reported by a host while wiring a listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host rejected listener: {}", self.message)
    }
}

impl std::error::Error for HostError {}

/// Why [`SelectionGate::initialize`](crate::SelectionGate::initialize) left the page untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingSelectionControl,
    MissingFreeTextControl,
    ListenerRejected(HostError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSelectionControl => f.write_str("selection control not present"),
            SkipReason::MissingFreeTextControl => f.write_str("free-text control not present"),
            SkipReason::ListenerRejected(err) => err.fmt(f),
        }
    }
}
