use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::view_model::ChecklistViewModel;
use crate::{HeaderState, Msg};

/// Stable row identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckId(Uuid);

impl From<Uuid> for CheckId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record delivered by the checklist provider. The core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl Check {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub id: CheckId,
    pub checked: bool,
    pub check: Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptButton {
    pub label: String,
    pub msg: Msg,
}

/// Pending "add?" confirmation with a cancel and a confirm choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub cancel: PromptButton,
    pub confirm: PromptButton,
}

impl ConfirmationPrompt {
    pub(crate) fn confirm_add() -> Self {
        Self {
            title: "Add a check?".to_string(),
            cancel: PromptButton {
                label: "No".to_string(),
                msg: Msg::ConfirmationDismissed,
            },
            confirm: PromptButton {
                label: "Add".to_string(),
                msg: Msg::ConfirmAdd,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChecklistState {
    checks: IndexMap<CheckId, CheckItem>,
    selected_count: usize,
    show_modal: bool,
    prompt: Option<ConfirmationPrompt>,
    header: HeaderState,
    dirty: bool,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ChecklistViewModel {
        ChecklistViewModel::from_state(self)
    }

    /// Items in fetch order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckItem> {
        self.checks.values()
    }

    pub fn check(&self, id: CheckId) -> Option<&CheckItem> {
        self.checks.get(&id)
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    pub fn show_modal(&self) -> bool {
        self.show_modal
    }

    pub fn prompt(&self) -> Option<&ConfirmationPrompt> {
        self.prompt.as_ref()
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Whether the action button stars the header instead of asking to add.
    pub fn all_selected(&self) -> bool {
        self.selected_count >= self.checks.len()
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Flips the checked flag. Returns `false` for an unknown id.
    pub(crate) fn toggle(&mut self, id: CheckId) -> bool {
        match self.checks.get_mut(&id) {
            Some(item) => {
                item.checked = !item.checked;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Recounts checked items from scratch.
    pub(crate) fn recompute_selected(&mut self) {
        let count = self.checks.values().filter(|item| item.checked).count();
        if count != self.selected_count {
            self.selected_count = count;
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_checks(&mut self, items: Vec<CheckItem>) {
        self.checks = items.into_iter().map(|item| (item.id, item)).collect();
        self.mark_dirty();
        self.recompute_selected();
    }

    pub(crate) fn set_prompt(&mut self, prompt: ConfirmationPrompt) {
        self.prompt = Some(prompt);
        self.mark_dirty();
    }

    /// Returns `false` when no prompt was pending.
    pub(crate) fn clear_prompt(&mut self) -> bool {
        if self.prompt.take().is_some() {
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn toggle_modal(&mut self) {
        self.show_modal = !self.show_modal;
        self.mark_dirty();
    }

    pub(crate) fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }
}
