//! Checklist core: pure state machine and view-model helpers.
mod effect;
mod env;
mod header;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use env::{IdGenerator, SequentialIds, UuidGenerator};
pub use header::{update_header, HeaderMsg, HeaderState, STAR_ICON};
pub use msg::{Msg, ProviderError};
pub use state::{Check, CheckId, CheckItem, ChecklistState, ConfirmationPrompt, PromptButton};
pub use update::update;
pub use view_model::{ActionButton, CheckRowView, ChecklistViewModel, PromptView};
