//! Sensitivity to initial conditions: the same physical parameters integrated
//! from a family of shifted starting points `(x0 + ε, v0 + ε)`.

use crate::{
    config::SimulationConfig,
    duffing::{DuffingParameters, InitialState},
    error::Result,
    integrator::integrate_validated,
    trajectory::Trajectory,
};
use serde::Serialize;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Offsets the comparison view uses when the caller supplies none.
pub const DEFAULT_EPSILONS: [f64; 5] = [0.0, 0.01, 0.05, 0.1, 0.2];

/// One trajectory per requested offset, in request order.
/// Duplicate offsets are kept and computed independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivitySet {
    runs: Vec<Trajectory>,
}

impl SensitivitySet {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Trajectory> {
        self.runs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.runs.iter()
    }

    pub fn epsilons(&self) -> Vec<f64> {
        self.runs.iter().map(Trajectory::epsilon).collect()
    }

    /// The unperturbed run, if `0.0` was among the offsets.
    pub fn reference(&self) -> Option<&Trajectory> {
        self.runs.iter().find(|run| run.epsilon() == 0.0)
    }

    /// Offsets whose trajectory contains NaN or infinite samples.
    pub fn diverged(&self) -> Vec<f64> {
        self.runs
            .iter()
            .filter(|run| !run.is_finite())
            .map(Trajectory::epsilon)
            .collect()
    }

    pub fn into_trajectories(self) -> Vec<Trajectory> {
        self.runs
    }
}

impl<'a> IntoIterator for &'a SensitivitySet {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// Integrates once per entry of `epsilons`, all with `params` and `init`.
///
/// The runs share nothing, so with the `parallel` feature they are spread over
/// the rayon pool; the output order always matches `epsilons`.
pub fn run_sensitivity(
    params: &DuffingParameters,
    init: &InitialState,
    epsilons: &[f64],
    config: &SimulationConfig,
) -> Result<SensitivitySet> {
    config.validate()?;
    debug!(runs = epsilons.len(), steps = config.steps(), "running sensitivity fan-out");

    #[cfg(feature = "parallel")]
    let runs: Vec<Trajectory> = epsilons
        .par_iter()
        .map(|&epsilon| integrate_validated(params, init, epsilon, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let runs: Vec<Trajectory> = epsilons
        .iter()
        .map(|&epsilon| integrate_validated(params, init, epsilon, config))
        .collect();

    Ok(SensitivitySet { runs })
}
