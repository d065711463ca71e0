//! Checklist engine: provider clients and async effect execution.
mod engine;
mod fetch;
mod local;
mod types;

pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{ChecklistClient, FetchSettings, HttpChecklistClient};
pub use local::{FileChecklistClient, StaticChecklistClient};
pub use types::{EngineEvent, FailureKind, FetchError};
