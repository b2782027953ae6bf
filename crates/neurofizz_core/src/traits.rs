use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

use crate::error::EvalError;

/// A trait for types that can be used as scalars in our dynamical systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents a dynamical system: a vector field `f(x, t)` of fixed
/// dimension.
pub trait DynamicalSystem<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    ///
    /// x: current state. Mutable because spiking models (LIF, Izhikevich)
    /// apply their reset rule to the state that was just passed in, before
    /// the derivative is formed. The rewrite is part of the model's own
    /// dynamics and lands in whatever buffer the caller handed over, so a
    /// stored trajectory row that crossed threshold ends up holding the
    /// post-reset value.
    /// t: current time
    /// out: buffer to write the result (dx/dt)
    ///
    /// Fails only when the field itself is undefined at `x`, e.g. the
    /// Hodgkins-Huxley gate rates at their pole voltages. Implementations
    /// must be deterministic and keep no cross-call state beyond the reset
    /// rule above.
    fn apply(&self, t: T, x: &mut [T], out: &mut [T]) -> Result<(), EvalError>;
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt, reading the state at `t` from `prev`
    /// and writing the state at `t + dt` into `next`.
    ///
    /// `prev` is mutable so that a model's reset rule can rewrite it; see
    /// [`DynamicalSystem::apply`]. `prev` and `next` must both have the
    /// system's dimension.
    fn step<S>(
        &mut self,
        system: &S,
        t: T,
        prev: &mut [T],
        next: &mut [T],
        dt: T,
    ) -> Result<(), EvalError>
    where
        S: DynamicalSystem<T> + ?Sized;
}
