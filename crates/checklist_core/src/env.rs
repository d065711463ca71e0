use uuid::Uuid;

use crate::CheckId;

/// Source of fresh row identifiers, injected into `update`.
pub trait IdGenerator {
    fn next_id(&mut self) -> CheckId;
}

/// Random v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> CheckId {
        CheckId::from(Uuid::new_v4())
    }
}

/// Deterministic identifiers `1, 2, 3, ...` encoded as UUIDs.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> CheckId {
        self.next += 1;
        CheckId::from(Uuid::from_u128(self.next))
    }
}
