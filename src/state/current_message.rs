//! Draft message awaiting cipher settings before it is sent.
//!
//! DESIGN
//! ======
//! The settings modal is open exactly while a draft is pending. Modelling
//! that as an enum keeps the modal from depending on an empty-string or
//! nullable convention.

#[cfg(test)]
#[path = "current_message_test.rs"]
mod current_message_test;

/// Text captured from the composer on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftMessage {
    pub message: String,
}

impl DraftMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A draft plus the status of its send attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDraft {
    pub draft: DraftMessage,
    pub sending: bool,
    /// Last send failure or key validation error for this draft.
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DraftState {
    #[default]
    None,
    Pending(PendingDraft),
}

impl DraftState {
    pub fn pending(draft: DraftMessage) -> Self {
        Self::Pending(PendingDraft {
            draft,
            sending: false,
            error: None,
        })
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn draft(&self) -> Option<&DraftMessage> {
        match self {
            Self::None => None,
            Self::Pending(pending) => Some(&pending.draft),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Pending(PendingDraft { sending: true, .. }))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Pending(PendingDraft { error: Some(error), .. }) => Some(error),
            _ => None,
        }
    }
}
