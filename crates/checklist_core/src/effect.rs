use crate::Msg;

/// Work requested by `update`, executed outside the pure core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the checklist provider for the current list of checks.
    FetchChecklist,
    /// Feed a follow-up message back into the queue.
    Dispatch(Msg),
}
