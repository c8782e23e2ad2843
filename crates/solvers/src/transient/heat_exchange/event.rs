use super::Record;

/// Event emitted by the simulation after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number within the current call, starting at 1.
    pub step: usize,

    /// The record appended by this step.
    pub record: Record,
}
