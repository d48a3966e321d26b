pub mod config;
pub mod duffing;
pub mod error;
pub mod integrator;
pub mod sensitivity;
pub mod solvers;
pub mod trajectory;
/// The `duffing_core` crate is the numerical engine behind the Duffing oscillator explorer.
/// It integrates `x'' + delta x' + alpha x + beta x^3 = A cos(phi t)` on a fixed time grid
/// and re-runs that integration from perturbed starting points to expose sensitivity to
/// initial conditions.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (ODE right-hand sides), `Stepper` (one-step methods).
/// - **Solvers**: the classic fixed-step RK4 stepper.
/// - **Integrator**: `integrate` produces a complete `Trajectory` of `(t, x, v)` samples.
/// - **Sensitivity**: `run_sensitivity` fans the integrator out over a list of offsets, in parallel when the `parallel` feature is on.
pub mod traits;

pub use config::SimulationConfig;
pub use duffing::{DuffingOscillator, DuffingParameters, InitialState};
pub use error::{DuffingError, Result};
pub use integrator::{integrate, integrate_checked};
pub use sensitivity::{run_sensitivity, SensitivitySet, DEFAULT_EPSILONS};
pub use trajectory::{Component, StateSample, Trajectory};
