use crate::error::{DuffingError, Result};
use serde::{Deserialize, Serialize};

/// Time and state `(x, v)` at one grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSample {
    pub t: f64,
    pub x: f64,
    pub v: f64,
}

impl StateSample {
    pub fn is_finite(&self) -> bool {
        self.t.is_finite() && self.x.is_finite() && self.v.is_finite()
    }
}

/// Which state component a chart series plots against `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    Position,
    Velocity,
}

impl Component {
    pub fn of(self, sample: &StateSample) -> f64 {
        match self {
            Component::Position => sample.x,
            Component::Velocity => sample.v,
        }
    }
}

/// A complete run: `steps + 1` samples on the grid `t_i = i * dt`.
/// Built once by the integrator and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    epsilon: f64,
    samples: Vec<StateSample>,
}

impl Trajectory {
    pub(crate) fn new(epsilon: f64, samples: Vec<StateSample>) -> Self {
        Self { epsilon, samples }
    }

    /// Initial-condition offset this run was computed with.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn samples(&self) -> &[StateSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&StateSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&StateSample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateSample> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// `(t, value)` pairs for one component.
    pub fn series(&self, component: Component) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| (s.t, component.of(s)))
            .collect()
    }

    /// Values of one component, aligned with `times()`.
    pub fn values(&self, component: Component) -> Vec<f64> {
        self.samples.iter().map(|s| component.of(s)).collect()
    }

    /// Index of the first sample holding NaN or an infinity.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|s| !s.is_finite())
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    pub fn ensure_finite(&self) -> Result<()> {
        match self.first_non_finite() {
            None => Ok(()),
            Some(index) => Err(DuffingError::NumericalInstability {
                epsilon: self.epsilon,
                index,
                t: self.samples[index].t,
            }),
        }
    }

    pub fn into_samples(self) -> Vec<StateSample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StateSample;
    type IntoIter = std::slice::Iter<'a, StateSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Component, StateSample, Trajectory};
    use crate::error::DuffingError;

    fn sample(t: f64, x: f64, v: f64) -> StateSample {
        StateSample { t, x, v }
    }

    #[test]
    fn projects_components_onto_the_time_axis() {
        let trajectory = Trajectory::new(
            0.0,
            vec![sample(0.0, 1.0, 2.0), sample(0.5, 1.5, 1.0)],
        );
        assert_eq!(
            trajectory.series(Component::Position),
            vec![(0.0, 1.0), (0.5, 1.5)]
        );
        assert_eq!(trajectory.values(Component::Velocity), vec![2.0, 1.0]);
        assert_eq!(trajectory.times(), vec![0.0, 0.5]);
    }

    #[test]
    fn serializes_epsilon_and_samples() {
        let trajectory = Trajectory::new(0.01, vec![sample(0.0, 1.01, 2.01)]);
        let json = serde_json::to_value(&trajectory).expect("trajectory serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "epsilon": 0.01,
                "samples": [{ "t": 0.0, "x": 1.01, "v": 2.01 }],
            })
        );
    }

    #[test]
    fn finite_trajectory_passes_the_check() {
        let trajectory = Trajectory::new(0.1, vec![sample(0.0, 1.0, 2.0)]);
        assert!(trajectory.is_finite());
        assert!(trajectory.ensure_finite().is_ok());
    }

    #[test]
    fn reports_first_non_finite_sample() {
        let trajectory = Trajectory::new(
            0.2,
            vec![
                sample(0.0, 1.0, 2.0),
                sample(0.1, f64::INFINITY, 2.0),
                sample(0.2, f64::NAN, f64::NAN),
            ],
        );
        assert_eq!(trajectory.first_non_finite(), Some(1));
        assert_eq!(
            trajectory.ensure_finite(),
            Err(DuffingError::NumericalInstability {
                epsilon: 0.2,
                index: 1,
                t: 0.1,
            })
        );
    }
}
