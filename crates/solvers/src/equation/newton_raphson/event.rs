use super::Iterate;

/// Event emitted by the Newton-Raphson solver after each step of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number within the current run, starting at 1.
    pub step: usize,

    /// The iterate produced by this step.
    pub iterate: Iterate,
}
