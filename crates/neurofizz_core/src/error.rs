use thiserror::Error;

use crate::trajectory::Trajectory;
use crate::traits::Scalar;

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure of a single derivative evaluation.
///
/// Distinct from divergence: the vector field itself is undefined at the
/// requested state, which is an expected edge case of the closed-form rate
/// expressions rather than a numerical blow-up.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// A `exp(x) - 1` gate-rate denominator evaluated to exactly zero
    /// (Hodgkins-Huxley at its pole voltages).
    #[error("gate rate denominator vanished at membrane potential {voltage}")]
    SingularRate { voltage: f64 },
}

/// Name resolution failures. Never silently defaulted: any name outside the
/// closed catalog is an error, including the empty string and legacy
/// "not found" placeholders.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("unknown model name {0:?}")]
    UnknownModel(String),

    #[error("unknown solver name {0:?}")]
    UnknownSolver(String),
}

/// Failures of a single integration run.
#[derive(Debug, Error)]
pub enum SolveError<T: Scalar> {
    /// Rejected before any iteration: the grid needs `dt > 0`, `t1 > t0`,
    /// and at least one sample below `t1`.
    #[error("invalid time grid: t0 = {t0:?}, t1 = {t1:?}, dt = {dt:?} yields no usable steps")]
    InvalidStep { t0: T, t1: T, dt: T },

    /// The supplied initial state does not match the system dimension.
    #[error("initial state has {got} components but the system expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A freshly computed row contained a non-finite component. `partial`
    /// holds every row before the failing one, so the caller can inspect
    /// how the state grew or retry with a smaller step.
    #[error("state became non-finite at step {index}")]
    Diverged { index: usize, partial: Trajectory<T> },

    /// A derivative evaluation hit an undefined point of the vector field.
    /// Reported distinctly from [`SolveError::Diverged`] with the same
    /// partial-result contract.
    #[error("singular gate rate at step {index}: {source}")]
    SingularRate {
        index: usize,
        source: EvalError,
        partial: Trajectory<T>,
    },
}

/// Umbrella error for the name-driven entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Solve(#[from] SolveError<f64>),
}
