/// Indicates how a Newton-Raphson run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|y|` fell to or below the requested epsilon.
    Converged,

    /// Reached the step limit without converging.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Newton-Raphson run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Current estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub y: f64,

    /// Number of steps taken during this run.
    pub steps: usize,
}
