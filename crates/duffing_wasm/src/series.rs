//! Chart-ready payloads built from core trajectories.

use anyhow::{bail, Result};
use duffing_core::{Component, Trajectory, DEFAULT_EPSILONS};
use serde::Serialize;

pub(crate) const PRIMARY_SERIES_NAME: &str = "Primary solution";

/// One named line on the chart, stored column-wise so the UI can hand the
/// arrays straight to its plotting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SeriesPayload {
    pub name: String,
    pub epsilon: f64,
    pub diverged: bool,
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub v: Vec<f64>,
}

impl SeriesPayload {
    pub(crate) fn from_trajectory(name: String, trajectory: &Trajectory) -> Self {
        Self {
            name,
            epsilon: trajectory.epsilon(),
            diverged: !trajectory.is_finite(),
            t: trajectory.times(),
            x: trajectory.values(Component::Position),
            v: trajectory.values(Component::Velocity),
        }
    }
}

pub(crate) fn sensitivity_series_name(epsilon: f64) -> String {
    format!("ε = {epsilon}")
}

/// Offsets requested by the UI; an empty list means the default comparison set.
pub(crate) fn resolve_epsilons(requested: Vec<f64>) -> Result<Vec<f64>> {
    if requested.is_empty() {
        return Ok(DEFAULT_EPSILONS.to_vec());
    }
    if let Some(index) = requested.iter().position(|eps| !eps.is_finite()) {
        bail!("Offset at index {index} is not a finite number.");
    }
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::{resolve_epsilons, sensitivity_series_name, SeriesPayload};
    use duffing_core::{integrate, DuffingParameters, InitialState, SimulationConfig};

    #[test]
    fn series_names_use_plain_number_formatting() {
        assert_eq!(sensitivity_series_name(0.0), "ε = 0");
        assert_eq!(sensitivity_series_name(0.01), "ε = 0.01");
        assert_eq!(sensitivity_series_name(0.2), "ε = 0.2");
    }

    #[test]
    fn empty_request_falls_back_to_default_offsets() {
        let resolved = resolve_epsilons(Vec::new()).expect("defaults");
        assert_eq!(resolved, vec![0.0, 0.01, 0.05, 0.1, 0.2]);
    }

    #[test]
    fn rejects_non_finite_offsets() {
        let err = resolve_epsilons(vec![0.0, f64::NAN]).expect_err("NaN offset");
        assert!(format!("{err}").contains("index 1"));
    }

    #[test]
    fn payload_columns_line_up_with_samples() {
        let config = SimulationConfig::new(0.1, 1.0).expect("valid config");
        let trajectory = integrate(
            &DuffingParameters::default(),
            &InitialState::default(),
            0.05,
            &config,
        )
        .expect("valid config");
        let payload = SeriesPayload::from_trajectory("run".to_string(), &trajectory);

        assert_eq!(payload.epsilon, 0.05);
        assert!(!payload.diverged);
        assert_eq!(payload.t.len(), trajectory.len());
        assert_eq!(payload.x.len(), trajectory.len());
        assert_eq!(payload.v.len(), trajectory.len());
        assert_eq!(payload.x[0], 1.0 + 0.05);
        assert_eq!(payload.v[0], 2.0 + 0.05);
    }
}
