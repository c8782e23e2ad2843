use approx::assert_relative_eq;

use super::{
    Action, Body, Config, ConfigError, Constant, Error, Event, HeatExchangeSimulation, Method,
    Side, Status,
};

/// Tb = 100, Tw = 0, unit masses, heats, area and h, dt = 0.1.
fn unit_config(method: Method) -> Config {
    Config::new(Body::new(100.0, 1.0, 1.0), Body::new(0.0, 1.0, 1.0), 1.0, 0.1)
        .expect("valid config")
        .with_method(method)
}

/// A steel bar quenched in water.
fn quench_config() -> Config {
    Config::new(
        Body::new(90.0, 2.0, 450.0),
        Body::new(20.0, 5.0, 4180.0),
        0.01,
        1.0,
    )
    .expect("valid config")
}

fn stored_heat(config: &Config, bar: f64, water: f64) -> f64 {
    config.bar.heat_capacity() * bar + config.water.heat_capacity() * water
}

#[test]
fn converges_to_common_temperature() {
    let mut sim =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();

    sim.simulate(200, None).expect("configured dt is valid");

    assert_relative_eq!(sim.t(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(sim.bar_temperature(), 50.0, epsilon = 1e-9);
    assert_relative_eq!(sim.water_temperature(), 50.0, epsilon = 1e-9);
}

#[test]
fn improved_euler_conserves_heat_and_converges_monotonically() {
    let config = quench_config();
    let mut sim = HeatExchangeSimulation::new(config, Constant(500.0)).unwrap();
    let initial = stored_heat(&config, 90.0, 20.0);

    sim.simulate(2000, None).expect("configured dt is valid");

    for record in sim.history() {
        assert_relative_eq!(
            stored_heat(&config, record.bar, record.water),
            initial,
            max_relative = 1e-10
        );
        assert!(record.bar >= record.water);
    }
    for pair in sim.history().windows(2) {
        assert!(pair[1].bar <= pair[0].bar);
        assert!(pair[1].water >= pair[0].water);
    }

    let equilibrium = initial / (config.bar.heat_capacity() + config.water.heat_capacity());
    assert_relative_eq!(sim.bar_temperature(), equilibrium, epsilon = 1e-2);
    assert_relative_eq!(sim.water_temperature(), equilibrium, epsilon = 1e-2);
}

#[test]
fn euler_and_improved_euler_differ_by_the_corrector() {
    let mut euler =
        HeatExchangeSimulation::new(unit_config(Method::Euler), Constant(1.0)).unwrap();
    let mut improved =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();

    euler.step(None).expect("configured dt is valid");
    improved.step(None).expect("configured dt is valid");

    // Euler: ΔT shrinks by 1 - 2·dt. Improved: by 1 - 2·dt + 2·dt².
    assert_relative_eq!(euler.bar_temperature(), 90.0, epsilon = 1e-12);
    assert_relative_eq!(euler.water_temperature(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(improved.bar_temperature(), 91.0, epsilon = 1e-12);
    assert_relative_eq!(improved.water_temperature(), 9.0, epsilon = 1e-12);
}

#[test]
fn large_euler_step_overshoots_equilibrium() {
    let mut sim = HeatExchangeSimulation::new(unit_config(Method::Euler), Constant(1.0)).unwrap();

    sim.step(Some(0.75)).expect("explicit dt is valid");

    assert_relative_eq!(sim.bar_temperature(), 25.0, epsilon = 1e-12);
    assert_relative_eq!(sim.water_temperature(), 75.0, epsilon = 1e-12);
}

#[test]
fn heat_flows_from_bar_to_water() {
    // Conducts only when the bar is the hotter body.
    let one_way = |delta_t: f64| if delta_t > 0.0 { 1.0 } else { 0.0 };
    let mut sim = HeatExchangeSimulation::new(unit_config(Method::Euler), one_way).unwrap();

    assert_eq!(sim.h(), 1.0);
    sim.step(None).expect("configured dt is valid");

    assert_relative_eq!(sim.bar_temperature(), 90.0, epsilon = 1e-12);
    assert_relative_eq!(sim.water_temperature(), 10.0, epsilon = 1e-12);
}

#[test]
fn h_follows_current_temperature_difference() {
    let conductivity = |delta_t: f64| 1.0 + 0.01 * delta_t.abs();
    let mut sim = HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), conductivity)
        .unwrap();

    assert_relative_eq!(sim.h(), 2.0);

    sim.simulate(5, None).expect("configured dt is valid");

    let delta_t = sim.bar_temperature() - sim.water_temperature();
    assert_relative_eq!(sim.h(), 1.0 + 0.01 * delta_t.abs());
    assert_eq!(sim.h_history().last().copied(), Some(sim.h()));
}

#[test]
fn history_has_initial_record_and_one_per_step() {
    let mut sim = HeatExchangeSimulation::new(unit_config(Method::Euler), Constant(1.0)).unwrap();

    let first = sim.history()[0];
    assert_eq!((first.t, first.bar, first.water, first.h), (0.0, 100.0, 0.0, 1.0));

    for _ in 0..3 {
        sim.step(None).expect("configured dt is valid");
    }

    assert_eq!(sim.history().len(), 4);
    for (t, expected) in sim.t_history().into_iter().zip([0.0, 0.1, 0.2, 0.3]) {
        assert_relative_eq!(t, expected, epsilon = 1e-12);
    }
    assert_eq!(sim.bar_history().len(), 4);
    assert_eq!(sim.water_history()[3], sim.water_temperature());
}

#[test]
fn explicit_dt_overrides_config() {
    let mut sim =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();

    let record = sim.step(Some(0.5)).expect("explicit dt is valid");

    assert_eq!(record.t, 0.5);
    assert_eq!(sim.history().last(), Some(&record));
}

#[test]
fn rejects_invalid_explicit_dt() {
    let mut sim =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();

    assert_eq!(sim.step(Some(0.0)), Err(Error::InvalidStep { dt: 0.0 }));
    assert_eq!(sim.step(Some(-1.0)), Err(Error::InvalidStep { dt: -1.0 }));
    assert!(matches!(
        sim.simulate(3, Some(f64::NAN)),
        Err(Error::InvalidStep { .. })
    ));
    assert!(matches!(
        sim.simulate_until(1.0, Some(f64::INFINITY)),
        Err(Error::InvalidStep { .. })
    ));

    assert_eq!(sim.history().len(), 1);
    assert_eq!(sim.t(), 0.0);
}

#[test]
fn simulate_until_may_overshoot_by_less_than_one_step() {
    let mut sim =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();

    let steps = sim.simulate_until(1.0, Some(0.3)).expect("explicit dt is valid");

    assert_eq!(steps, 4);
    assert_relative_eq!(sim.t(), 1.2, epsilon = 1e-12);

    let again = sim.simulate_until(1.0, None).expect("configured dt is valid");
    assert_eq!(again, 0);
}

#[test]
fn observer_sees_each_record_and_can_stop() {
    let mut sim =
        HeatExchangeSimulation::new(unit_config(Method::ImprovedEuler), Constant(1.0)).unwrap();
    let mut seen = Vec::new();

    let status = sim
        .simulate_observed(10, None, |event: &Event| {
            seen.push(*event);
            (event.step == 3).then_some(Action::StopEarly)
        })
        .expect("configured dt is valid");

    assert_eq!(status, Status::StoppedByObserver);
    assert_eq!(seen.len(), 3);
    assert_eq!(sim.history().len(), 4);
    for event in &seen {
        assert_eq!(event.record, sim.history()[event.step]);
    }

    let status = sim
        .simulate_observed(2, None, ())
        .expect("configured dt is valid");
    assert_eq!(status, Status::Complete);
    assert_eq!(sim.history().len(), 6);
}

#[test]
fn rejects_invalid_config() {
    let mut config = unit_config(Method::Euler);
    config.water.mass = -1.0;

    assert_eq!(
        HeatExchangeSimulation::new(config, Constant(1.0)).map(|_| ()),
        Err(ConfigError::Mass {
            side: Side::Water,
            value: -1.0
        })
    );
}
