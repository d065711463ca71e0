use checklist_logging::{checklist_debug, checklist_warn};

use crate::state::ConfirmationPrompt;
use crate::{
    update_header, CheckItem, ChecklistState, Effect, HeaderMsg, IdGenerator, Msg, STAR_ICON,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// `ids` supplies identifiers for rows created from a fetch result.
pub fn update(
    mut state: ChecklistState,
    msg: Msg,
    ids: &mut dyn IdGenerator,
) -> (ChecklistState, Vec<Effect>) {
    let effects = match msg {
        Msg::Appear => vec![Effect::FetchChecklist],
        Msg::ToggleCheck(id) => {
            if !state.toggle(id) {
                checklist_debug!("ToggleCheck ignored for unknown id {}", id);
                return (state, Vec::new());
            }
            // Keep the count exact even before the follow-up is processed.
            state.recompute_selected();
            vec![Effect::Dispatch(Msg::RecomputeCount)]
        }
        Msg::RecomputeCount => {
            state.recompute_selected();
            Vec::new()
        }
        Msg::FetchSucceeded(checks) => {
            checklist_debug!("FetchSucceeded with {} checks", checks.len());
            let items = checks
                .into_iter()
                .map(|check| CheckItem {
                    id: ids.next_id(),
                    checked: false,
                    check,
                })
                .collect();
            state.replace_checks(items);
            Vec::new()
        }
        Msg::FetchFailed(error) => {
            checklist_warn!("Checklist fetch failed, keeping current list: {}", error);
            Vec::new()
        }
        Msg::StarTapped => {
            if state.header_mut().set_user_icon_image(STAR_ICON) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ShowConfirmation => {
            if state.selected_count() < state.total() {
                state.set_prompt(ConfirmationPrompt::confirm_add());
            }
            Vec::new()
        }
        Msg::ActionButtonPressed => {
            let routed = if state.all_selected() {
                Msg::StarTapped
            } else {
                Msg::ShowConfirmation
            };
            return update(state, routed, ids);
        }
        Msg::ConfirmationDismissed => {
            state.clear_prompt();
            Vec::new()
        }
        Msg::ConfirmAdd => {
            // Adding a check is not implemented yet; accepting only closes the prompt.
            state.clear_prompt();
            Vec::new()
        }
        Msg::Header(inner) => {
            if update_header(state.header_mut(), &inner) {
                state.mark_dirty();
            }
            if inner == HeaderMsg::ShowModal {
                state.toggle_modal();
            }
            Vec::new()
        }
        Msg::AddTapped => Vec::new(),
    };

    (state, effects)
}
