//! Predicate-driven early stopping.

use numkit_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, HasTime};

/// An observer that stops a solver once `predicate(event)` returns `true`.
///
/// Works with any solver whose action type is [`CanStopEarly`].
///
/// # Example
///
/// ```
/// use numkit_observers::StopWhen;
/// use numkit_solvers::equation::newton_raphson::{self, Config, NewtonRaphson, Status};
///
/// let mut solver = NewtonRaphson::new(|x: f64| x * x - 2.0, 1.0, Config::default());
/// let stop = StopWhen::new(|event: &newton_raphson::Event| event.step == 2);
///
/// let solution = solver.run_observed(1e-12, None, stop).unwrap();
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P> {
    predicate: P,
}

impl<P> StopWhen<P> {
    /// Creates an observer from a stopping predicate.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    A: CanStopEarly,
    P: FnMut(&E) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event).then(A::stop_early)
    }
}

/// Stops once an event's residual magnitude falls below `tolerance`.
pub fn residual_below<E: HasResidual>(tolerance: f64) -> StopWhen<impl FnMut(&E) -> bool> {
    StopWhen::new(move |event: &E| event.residual().abs() < tolerance)
}

/// Stops once an event's time reaches `stop_time`.
pub fn time_reaches<E: HasTime>(stop_time: f64) -> StopWhen<impl FnMut(&E) -> bool> {
    StopWhen::new(move |event: &E| event.time() >= stop_time)
}
