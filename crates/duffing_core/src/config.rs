use crate::error::{DuffingError, Result};
use crate::trajectory::StateSample;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_T_MAX: f64 = 20.0;

/// Largest sample count a trajectory buffer can be allocated for.
pub const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<StateSample>();

/// Time grid shared by every run: a fixed step `dt` up to the horizon `t_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed integration step
    pub dt: f64,
    /// Final simulation time
    pub t_max: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            t_max: DEFAULT_T_MAX,
        }
    }
}

impl SimulationConfig {
    pub fn new(dt: f64, t_max: f64) -> Result<Self> {
        let config = Self { dt, t_max };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(DuffingError::InvalidConfiguration(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(DuffingError::InvalidConfiguration(format!(
                "t_max must be positive and finite, got {}",
                self.t_max
            )));
        }
        if self.t_max < self.dt {
            return Err(DuffingError::InvalidConfiguration(format!(
                "t_max ({}) must not be shorter than dt ({})",
                self.t_max, self.dt
            )));
        }
        let steps = (self.t_max / self.dt).floor();
        if steps >= MAX_SAMPLES as f64 {
            return Err(DuffingError::InvalidConfiguration(format!(
                "t_max / dt = {steps} steps exceeds the {MAX_SAMPLES}-sample buffer limit"
            )));
        }
        Ok(())
    }

    /// Number of integration steps, `floor(t_max / dt)`.
    /// A trajectory holds one more sample than this.
    pub fn steps(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }

    pub fn sample_count(&self) -> usize {
        self.steps() + 1
    }

    /// Time of sample `index`, computed directly so the grid does not drift.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::{SimulationConfig, MAX_SAMPLES};
    use crate::error::DuffingError;

    fn assert_invalid(result: crate::error::Result<SimulationConfig>, needle: &str) {
        match result {
            Err(DuffingError::InvalidConfiguration(message)) => assert!(
                message.contains(needle),
                "expected error to contain \"{needle}\", got \"{message}\""
            ),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn default_grid_has_two_thousand_steps() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steps(), 2000);
        assert_eq!(config.sample_count(), 2001);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_values() {
        assert_invalid(SimulationConfig::new(0.0, 20.0), "dt must be positive");
        assert_invalid(SimulationConfig::new(-0.01, 20.0), "dt must be positive");
        assert_invalid(SimulationConfig::new(f64::NAN, 20.0), "dt must be positive");
        assert_invalid(SimulationConfig::new(0.01, 0.0), "t_max must be positive");
        assert_invalid(
            SimulationConfig::new(0.01, f64::INFINITY),
            "t_max must be positive",
        );
        assert_invalid(
            SimulationConfig::new(0.5, 0.1),
            "must not be shorter than dt",
        );
    }

    #[test]
    fn rejects_grids_too_large_to_allocate() {
        assert_invalid(SimulationConfig::new(1e-12, 1e6), "buffer limit");
        assert_invalid(
            SimulationConfig::new(f64::MIN_POSITIVE, 1.0),
            "buffer limit",
        );
    }

    #[test]
    fn accepts_grids_just_under_the_sample_limit() {
        let config = SimulationConfig::new(1.0, (MAX_SAMPLES / 2) as f64).expect("valid config");
        assert!(config.sample_count() <= MAX_SAMPLES);
    }

    #[test]
    fn steps_floor_partial_intervals() {
        let config = SimulationConfig::new(0.3, 1.0).expect("valid config");
        assert_eq!(config.steps(), 3);
        assert_eq!(config.sample_count(), 4);
    }

    #[test]
    fn time_at_is_index_times_dt() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_at(0), 0.0);
        assert_eq!(config.time_at(2000), 2000.0 * 0.01);
        assert!((config.time_at(2000) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn deserializes_from_json_shape() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"dt": 0.25, "t_max": 5.0}"#).expect("config should parse");
        assert_eq!(config, SimulationConfig::new(0.25, 5.0).expect("valid"));
        assert_eq!(config.steps(), 20);
    }
}
