use serde::Serialize;

use crate::error::SolveError;
use crate::traits::Scalar;

/// Uniform sampling of the half-open interval `[t0, t1)`.
///
/// The grid holds every time `t0 + i*dt` strictly below `t1`, so its length
/// is `floor((t1 - t0)/dt)` when the span divides evenly. Sample times are
/// computed by multiplication, not accumulation, so `time(i)` is identical
/// no matter how the grid is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeGrid<T> {
    t0: T,
    t1: T,
    dt: T,
    len: usize,
}

impl<T: Scalar> TimeGrid<T> {
    /// Builds the grid, rejecting configurations that cannot produce at
    /// least one sample: non-positive `dt`, `t1 <= t0`, or a step larger
    /// than the whole span.
    pub fn new(t0: T, t1: T, dt: T) -> Result<Self, SolveError<T>> {
        if dt <= T::zero() || t1 <= t0 {
            return Err(SolveError::InvalidStep { t0, t1, dt });
        }

        // Seed with the floored quotient, then enforce the strict `< t1`
        // rule at the boundary. Division alone miscounts exact multiples:
        // (100 - 0)/0.02 floors to 4999 in f64 while the grid holds 5000
        // samples.
        let mut len = ((t1 - t0) / dt).floor().to_usize().unwrap_or(0);
        while Self::sample(t0, dt, len) < t1 {
            len += 1;
        }
        while len > 0 && Self::sample(t0, dt, len - 1) >= t1 {
            len -= 1;
        }

        if len == 0 {
            return Err(SolveError::InvalidStep { t0, t1, dt });
        }

        Ok(Self { t0, t1, dt, len })
    }

    fn sample(t0: T, dt: T, i: usize) -> T {
        t0 + T::from_usize(i).unwrap_or_else(T::max_value) * dt
    }

    /// Number of samples, equal to the row count of a trajectory produced
    /// over this grid.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A constructed grid always has at least one sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The i-th sample time, `t0 + i*dt`.
    pub fn time(&self, i: usize) -> T {
        Self::sample(self.t0, self.dt, i)
    }

    pub fn t0(&self) -> T {
        self.t0
    }

    pub fn t1(&self) -> T {
        self.t1
    }

    pub fn dt(&self) -> T {
        self.dt
    }

    /// Iterates the sample times in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.time(i))
    }
}
