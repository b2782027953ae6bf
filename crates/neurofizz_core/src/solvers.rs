use crate::error::EvalError;
use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Explicit (forward) Euler.
///
/// `x[i+1] = x[i] + dt * f(x[i], t[i])`. First-order accurate with local
/// truncation error O(dt^2).
pub struct Euler<T: Scalar> {
    k1: Vec<T>,
}

impl<T: Scalar> Euler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Euler<T> {
    fn step<S>(
        &mut self,
        system: &S,
        t: T,
        prev: &mut [T],
        next: &mut [T],
        dt: T,
    ) -> Result<(), EvalError>
    where
        S: DynamicalSystem<T> + ?Sized,
    {
        system.apply(t, prev, &mut self.k1)?;

        for i in 0..prev.len() {
            next[i] = prev[i] + dt * self.k1[i];
        }

        Ok(())
    }
}

/// Second-order predictor step.
///
/// `k1 = f(x, t)`; `k2 = f(x, t) + k1*(dt/2)`; `x[i+1] = x[i] + k2*dt`.
///
/// Not the textbook explicit midpoint rule: both stages sample the vector
/// field at the unadvanced state, so the dt/2 term rescales the first slope
/// instead of re-evaluating at a trial state. Downstream consumers depend
/// on the trajectories this variant produces, so it is kept as-is rather
/// than corrected.
pub struct Ord2<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
}

impl<T: Scalar> Ord2<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::zero(); dim],
            k2: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Ord2<T> {
    fn step<S>(
        &mut self,
        system: &S,
        t: T,
        prev: &mut [T],
        next: &mut [T],
        dt: T,
    ) -> Result<(), EvalError>
    where
        S: DynamicalSystem<T> + ?Sized,
    {
        let half = T::from_f64(0.5).unwrap();

        // Two separate evaluations at the same state, matching the scheme
        // as documented; a resetting model sees the second call post-reset.
        system.apply(t, prev, &mut self.k1)?;
        system.apply(t, prev, &mut self.k2)?;

        for i in 0..prev.len() {
            let k2 = self.k2[i] + self.k1[i] * (dt * half);
            next[i] = prev[i] + k2 * dt;
        }

        Ok(())
    }
}

/// Classic Runge-Kutta 4th Order Solver
pub struct RK4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
}

impl<T: Scalar> RK4<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::zero(); dim],
            k2: vec![T::zero(); dim],
            k3: vec![T::zero(); dim],
            k4: vec![T::zero(); dim],
            tmp: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for RK4<T> {
    fn step<S>(
        &mut self,
        system: &S,
        t: T,
        prev: &mut [T],
        next: &mut [T],
        dt: T,
    ) -> Result<(), EvalError>
    where
        S: DynamicalSystem<T> + ?Sized,
    {
        let half = T::from_f64(0.5).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let two = T::from_f64(2.0).unwrap();

        // k1 = f(t, y)
        system.apply(t, prev, &mut self.k1)?;

        // k2 = f(t + dt/2, y + dt*k1/2)
        for i in 0..prev.len() {
            self.tmp[i] = prev[i] + dt * self.k1[i] * half;
        }
        system.apply(t + dt * half, &mut self.tmp, &mut self.k2)?;

        // k3 = f(t + dt/2, y + dt*k2/2)
        for i in 0..prev.len() {
            self.tmp[i] = prev[i] + dt * self.k2[i] * half;
        }
        system.apply(t + dt * half, &mut self.tmp, &mut self.k3)?;

        // k4 = f(t + dt, y + dt*k3)
        for i in 0..prev.len() {
            self.tmp[i] = prev[i] + dt * self.k3[i];
        }
        system.apply(t + dt, &mut self.tmp, &mut self.k4)?;

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        for i in 0..prev.len() {
            next[i] = prev[i]
                + dt * sixth * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        Ok(())
    }
}
