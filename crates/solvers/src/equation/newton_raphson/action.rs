/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the solution so far.
    StopEarly,
}
