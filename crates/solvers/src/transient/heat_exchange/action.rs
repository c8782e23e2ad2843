/// Control actions supported by the heat exchange simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop stepping and return the status so far.
    StopEarly,
}
