use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the vector fields and steppers.
/// Must support floating-point arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + Send + Sync + 'static {
    /// Converts an `f64` literal into this scalar type.
    /// Values that cannot be represented become NaN rather than panicking.
    fn constant(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + FromPrimitive + Debug + Send + Sync + 'static> Scalar for T {}

/// A continuous-time, first-order system `dy/dt = f(t, y)`.
pub trait VectorField<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the right-hand side.
    /// t: time at which the field is sampled
    /// state: current state
    /// out: buffer receiving dy/dt
    fn evaluate(&self, t: T, state: &[T], out: &mut [T]);
}

/// A fixed-step one-step method.
pub trait Stepper<T: Scalar> {
    /// Advances `state` from time `t` to `t + dt` in place.
    ///
    /// The caller owns the clock: time is passed in rather than accumulated
    /// inside the stepper, so callers can compute `t` from the step index.
    fn step(&mut self, field: &impl VectorField<T>, t: T, state: &mut [T], dt: T);
}
