//! In-memory trace recording.
//!
//! See [`TraceRecorder`] and [`Traceable`] for usage.

use numkit_core::Observer;
use numkit_solvers::{equation::newton_raphson, transient::heat_exchange};

/// Extracts trace values from a solver event.
///
/// Implement this on an event type to pass a [`TraceRecorder`] directly as a
/// solver observer. Return `None` from [`x`][Traceable::x] to skip the event
/// entirely; return `None` in a trace slot to skip only that trace.
///
/// The root finder and heat exchange events implement it out of the box:
///
/// | event                    | x          | traces                     |
/// |--------------------------|------------|----------------------------|
/// | `newton_raphson::Event`  | step       | `[x, y]`                   |
/// | `heat_exchange::Event`   | time       | `[T_bar, T_water, h]`      |
pub trait Traceable<const N: usize> {
    /// The independent value for this event, or `None` to skip it.
    fn x(&self) -> Option<f64>;

    /// The value of each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// An observer that logs named traces of `(x, y)` points.
///
/// The const generic `N` is the number of traces. Record data either by
/// passing `&mut TraceRecorder` as the observer of a solver whose events are
/// [`Traceable<N>`][Traceable], or by calling [`record`][TraceRecorder::record]
/// from a closure observer. The recorder never returns an action.
///
/// # Example
///
/// ```
/// use numkit_observers::TraceRecorder;
/// use numkit_solvers::equation::newton_raphson::{Config, NewtonRaphson};
///
/// let mut log = TraceRecorder::<2>::new(["x", "y"]);
/// let mut solver = NewtonRaphson::new(|x: f64| x * x - 2.0, 1.0, Config::default());
///
/// let solution = solver.run_observed(1e-9, Some(20), &mut log).unwrap();
///
/// assert_eq!(log.trace(0).map(<[_]>::len), Some(solution.steps));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecorder<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> TraceRecorder<N> {
    /// Creates an empty recorder with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one point per trace at `x`.
    ///
    /// A `None` slot leaves that trace unchanged.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the points of trace `i`, or `None` if there is no such trace.
    #[must_use]
    pub fn trace(&self, i: usize) -> Option<&[[f64; 2]]> {
        self.data.get(i).map(Vec::as_slice)
    }

    /// Returns the trace names.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Returns `true` if no trace has any points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Vec::is_empty)
    }

    /// Removes all recorded points, keeping the names.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(Vec::clear);
    }
}

impl<const N: usize, E, A> Observer<E, A> for TraceRecorder<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut TraceRecorder<N>` to be passed to solvers that take an
/// observer by value, so the traces can be read after the run.
impl<const N: usize, E, A> Observer<E, A> for &mut TraceRecorder<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

impl Traceable<2> for newton_raphson::Event {
    fn x(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        let step = self.step as f64;
        Some(step)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.iterate.x), Some(self.iterate.y)]
    }
}

impl Traceable<3> for heat_exchange::Event {
    fn x(&self) -> Option<f64> {
        Some(self.record.t)
    }

    fn traces(&self) -> [Option<f64>; 3] {
        let record = &self.record;
        [Some(record.bar), Some(record.water), Some(record.h)]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_solvers::{
        equation::newton_raphson::{Config, Iterate, NewtonRaphson},
        transient::heat_exchange::{self, Body, Constant, HeatExchangeSimulation},
    };

    /// A local event with optional values.
    struct Sample {
        x: Option<f64>,
        a: Option<f64>,
        b: Option<f64>,
    }

    impl Traceable<2> for Sample {
        fn x(&self) -> Option<f64> {
            self.x
        }

        fn traces(&self) -> [Option<f64>; 2] {
            [self.a, self.b]
        }
    }

    fn feed(log: &mut TraceRecorder<2>, x: Option<f64>, a: Option<f64>, b: Option<f64>) {
        let action: Option<()> = log.observe(&Sample { x, a, b });
        assert!(action.is_none());
    }

    #[test]
    fn missing_x_skips_the_event() {
        let mut log = TraceRecorder::new(["a", "b"]);
        feed(&mut log, None, Some(1.0), Some(2.0));

        assert!(log.is_empty());
    }

    #[test]
    fn missing_value_skips_only_its_trace() {
        let mut log = TraceRecorder::new(["a", "b"]);
        feed(&mut log, Some(1.0), None, Some(3.0));
        feed(&mut log, Some(2.0), Some(4.0), Some(5.0));

        assert_eq!(log.trace(0), Some(&[[2.0, 4.0]][..]));
        assert_eq!(log.trace(1), Some(&[[1.0, 3.0], [2.0, 5.0]][..]));
        assert_eq!(log.trace(2), None);
    }

    #[test]
    fn record_and_clear() {
        let mut log = TraceRecorder::new(["first", "second"]);
        log.record(0.5, [Some(1.0), None]);

        assert_eq!(log.names(), &["first".to_owned(), "second".to_owned()]);
        assert_eq!(log.trace(0), Some(&[[0.5, 1.0]][..]));
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.names()[1], "second");
    }

    #[test]
    fn logs_newton_iterates() {
        let mut log = TraceRecorder::<2>::new(["x", "y"]);
        let mut solver = NewtonRaphson::new(|x: f64| x * x - 2.0, 1.0, Config::default());

        let solution = solver
            .run_observed(1e-9, Some(20), &mut log)
            .expect("slope stays non-zero");

        let xs = log.trace(0).expect("x trace");
        let ys = log.trace(1).expect("y trace");
        assert_eq!(xs.len(), solution.steps);
        assert_eq!(xs[0][0], 1.0);
        for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
            let Iterate { x: expected_x, y: expected_y } = solver.history()[i + 1];
            assert_eq!(x[1], expected_x);
            assert_eq!(y[1], expected_y);
        }
        assert_relative_eq!(xs[xs.len() - 1][1], 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn logs_heat_exchange_records() {
        let config = heat_exchange::Config::new(
            Body::new(100.0, 1.0, 1.0),
            Body::new(0.0, 1.0, 1.0),
            1.0,
            0.1,
        )
        .expect("valid config");
        let mut sim = HeatExchangeSimulation::new(config, Constant(1.0)).expect("valid config");
        let mut log = TraceRecorder::<3>::new(["bar", "water", "h"]);

        sim.simulate_observed(10, None, &mut log)
            .expect("configured dt is valid");

        let bar = log.trace(0).expect("bar trace");
        assert_eq!(bar.len(), 10);
        assert_eq!(bar.last().copied(), Some([sim.t(), sim.bar_temperature()]));
        assert!(log.trace(2).expect("h trace").iter().all(|p| p[1] == 1.0));
    }
}
