//! The forced, damped Duffing oscillator
//!
//! `x'' + delta x' + alpha x + beta x^3 = A cos(phi t)`
//!
//! written as the first-order system `x' = v`, `v' = -delta v - alpha x - beta x^3 + A cos(phi t)`.
//! The sign of `beta` selects a hardening (`beta > 0`) or softening (`beta < 0`) spring.

use crate::traits::{Scalar, VectorField};
use serde::{Deserialize, Serialize};

/// Physical parameters of one run. No range checks are applied: very large
/// values are accepted and may drive the trajectory to overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuffingParameters {
    /// Damping coefficient
    pub delta: f64,
    /// Linear stiffness
    pub alpha: f64,
    /// Nonlinear (cubic) stiffness
    pub beta: f64,
    /// Forcing amplitude `A`
    pub amplitude: f64,
    /// Forcing angular frequency `phi`
    pub frequency: f64,
}

impl Default for DuffingParameters {
    fn default() -> Self {
        Self {
            delta: 0.1,
            alpha: 1.0,
            beta: 0.3,
            amplitude: 0.5,
            frequency: 1.0,
        }
    }
}

impl DuffingParameters {
    pub fn new(delta: f64, alpha: f64, beta: f64, amplitude: f64, frequency: f64) -> Self {
        Self {
            delta,
            alpha,
            beta,
            amplitude,
            frequency,
        }
    }
}

/// Position and velocity at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    pub x0: f64,
    pub v0: f64,
}

impl Default for InitialState {
    fn default() -> Self {
        Self { x0: 1.0, v0: 2.0 }
    }
}

impl InitialState {
    pub fn new(x0: f64, v0: f64) -> Self {
        Self { x0, v0 }
    }

    /// Shifts both components by the same offset.
    pub fn perturbed(&self, epsilon: f64) -> Self {
        Self {
            x0: self.x0 + epsilon,
            v0: self.v0 + epsilon,
        }
    }
}

/// Duffing vector field over state `[x, v]`.
#[derive(Debug, Clone, Copy)]
pub struct DuffingOscillator<T: Scalar> {
    delta: T,
    alpha: T,
    beta: T,
    amplitude: T,
    frequency: T,
}

impl<T: Scalar> DuffingOscillator<T> {
    pub fn new(params: &DuffingParameters) -> Self {
        Self {
            delta: T::constant(params.delta),
            alpha: T::constant(params.alpha),
            beta: T::constant(params.beta),
            amplitude: T::constant(params.amplitude),
            frequency: T::constant(params.frequency),
        }
    }

    /// External forcing `A cos(phi t)`.
    pub fn forcing(&self, t: T) -> T {
        self.amplitude * (self.frequency * t).cos()
    }
}

impl<T: Scalar> VectorField<T> for DuffingOscillator<T> {
    fn dimension(&self) -> usize {
        2
    }

    fn evaluate(&self, t: T, state: &[T], out: &mut [T]) {
        let x = state[0];
        let v = state[1];
        out[0] = v;
        out[1] = -self.delta * v - self.alpha * x - self.beta * x.powi(3) + self.forcing(t);
    }
}
