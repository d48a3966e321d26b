use crate::traits::{Scalar, Stepper, VectorField};

/// Classic Runge-Kutta 4th Order Solver
///
/// Stage buffers are allocated once for a given dimension and reused across
/// steps, so a single `RK4` can drive a whole trajectory without allocating.
pub struct RK4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
}

impl<T: Scalar> RK4<T> {
    pub fn new(dim: usize) -> Self {
        let z = T::zero();
        Self {
            k1: vec![z; dim],
            k2: vec![z; dim],
            k3: vec![z; dim],
            k4: vec![z; dim],
            tmp: vec![z; dim],
        }
    }

    pub fn dimension(&self) -> usize {
        self.k1.len()
    }
}

impl<T: Scalar> Stepper<T> for RK4<T> {
    fn step(&mut self, field: &impl VectorField<T>, t: T, state: &mut [T], dt: T) {
        debug_assert_eq!(state.len(), self.dimension());

        let half = T::constant(0.5);
        let two = T::constant(2.0);
        let sixth_dt = dt / T::constant(6.0);
        let t_mid = t + half * dt;

        // k1 = f(t, y)
        field.evaluate(t, state, &mut self.k1);

        // k2 = f(t + dt/2, y + dt/2 * k1)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + half * dt * self.k1[i];
        }
        field.evaluate(t_mid, &self.tmp, &mut self.k2);

        // k3 = f(t + dt/2, y + dt/2 * k2)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + half * dt * self.k2[i];
        }
        field.evaluate(t_mid, &self.tmp, &mut self.k3);

        // k4 = f(t + dt, y + dt * k3)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k3[i];
        }
        field.evaluate(t + dt, &self.tmp, &mut self.k4);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        for i in 0..state.len() {
            state[i] = state[i]
                + sixth_dt * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }
    }
}
