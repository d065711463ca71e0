use std::fmt;

use crate::{Check, CheckId, HeaderMsg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The screen became visible.
    Appear,
    /// User toggled the row with the given id.
    ToggleCheck(CheckId),
    /// Recount the checked rows.
    RecomputeCount,
    /// Provider returned the checklist.
    FetchSucceeded(Vec<Check>),
    /// Provider failed to return the checklist.
    FetchFailed(ProviderError),
    /// User tapped the toolbar Add button.
    AddTapped,
    /// User tapped the action button while every row is checked.
    StarTapped,
    /// Ask for confirmation before adding.
    ShowConfirmation,
    /// Confirmation prompt cancelled or dismissed.
    ConfirmationDismissed,
    /// Confirmation prompt accepted.
    ConfirmAdd,
    /// Message for the embedded header component.
    Header(HeaderMsg),
    /// User pressed the floating action button.
    ActionButtonPressed,
}

/// Opaque failure reported by the checklist provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderError {}
