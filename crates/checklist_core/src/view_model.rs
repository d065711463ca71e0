use crate::{CheckId, ChecklistState};

/// Face of the floating action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    /// Nothing selected yet.
    Plus,
    /// Some but not all rows selected.
    Count(usize),
    /// Every row selected.
    Star,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRowView {
    pub id: CheckId,
    pub title: String,
    pub detail: Option<String>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub title: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistViewModel {
    pub rows: Vec<CheckRowView>,
    pub selected_count: usize,
    pub total: usize,
    pub action_button: ActionButton,
    pub show_modal: bool,
    pub prompt: Option<PromptView>,
    pub user_icon_image: Option<String>,
}

impl ChecklistViewModel {
    pub(crate) fn from_state(state: &ChecklistState) -> Self {
        let selected_count = state.selected_count();
        let total = state.total();
        let action_button = if state.all_selected() {
            ActionButton::Star
        } else if selected_count == 0 {
            ActionButton::Plus
        } else {
            ActionButton::Count(selected_count)
        };

        Self {
            rows: state
                .checks()
                .map(|item| CheckRowView {
                    id: item.id,
                    title: item.check.title.clone(),
                    detail: item.check.detail.clone(),
                    checked: item.checked,
                })
                .collect(),
            selected_count,
            total,
            action_button,
            show_modal: state.show_modal(),
            prompt: state.prompt().map(|prompt| PromptView {
                title: prompt.title.clone(),
                cancel_label: prompt.cancel.label.clone(),
                confirm_label: prompt.confirm.label.clone(),
            }),
            user_icon_image: state.header().user_icon_image().map(ToOwned::to_owned),
        }
    }

    /// Id of the row at a zero-based position.
    pub fn row_id(&self, index: usize) -> Option<CheckId> {
        self.rows.get(index).map(|row| row.id)
    }
}
