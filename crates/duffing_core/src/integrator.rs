use crate::{
    config::SimulationConfig,
    duffing::{DuffingOscillator, DuffingParameters, InitialState},
    error::Result,
    solvers::RK4,
    traits::{Stepper, VectorField},
    trajectory::{StateSample, Trajectory},
};
use tracing::{debug, warn};

/// Integrates the Duffing oscillator over the grid of `config`, starting from
/// `(x0 + epsilon, v0 + epsilon)`.
///
/// Always returns `config.steps() + 1` samples. Overflow is not treated as an
/// error: once a state goes non-finite the remaining samples carry NaN or
/// infinities, and the run still completes. Use [`integrate_checked`] to
/// reject such runs.
pub fn integrate(
    params: &DuffingParameters,
    init: &InitialState,
    epsilon: f64,
    config: &SimulationConfig,
) -> Result<Trajectory> {
    config.validate()?;
    Ok(integrate_validated(params, init, epsilon, config))
}

/// Like [`integrate`], but fails with `NumericalInstability` when any sample is non-finite.
pub fn integrate_checked(
    params: &DuffingParameters,
    init: &InitialState,
    epsilon: f64,
    config: &SimulationConfig,
) -> Result<Trajectory> {
    let trajectory = integrate(params, init, epsilon, config)?;
    trajectory.ensure_finite()?;
    Ok(trajectory)
}

/// Runs the stepping loop. `config` must already be validated.
pub(crate) fn integrate_validated(
    params: &DuffingParameters,
    init: &InitialState,
    epsilon: f64,
    config: &SimulationConfig,
) -> Trajectory {
    let steps = config.steps();
    let start = init.perturbed(epsilon);
    debug!(
        ?params,
        x0 = start.x0,
        v0 = start.v0,
        epsilon,
        steps,
        dt = config.dt,
        "integrating Duffing trajectory"
    );

    let field = DuffingOscillator::<f64>::new(params);
    let mut stepper = RK4::new(field.dimension());
    let mut state = [start.x0, start.v0];
    let mut samples = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let t = config.time_at(i);
        samples.push(StateSample {
            t,
            x: state[0],
            v: state[1],
        });
        // No stage is evaluated past the last recorded sample.
        if i < steps {
            stepper.step(&field, t, &mut state, config.dt);
        }
    }

    let trajectory = Trajectory::new(epsilon, samples);
    if let Some(index) = trajectory.first_non_finite() {
        warn!(
            epsilon,
            index,
            t = config.time_at(index),
            "trajectory became non-finite"
        );
    }
    trajectory
}
