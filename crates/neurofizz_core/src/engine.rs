//! The solver engine: drives a stepper over a time grid and hands the
//! dense trajectory to the caller, plus the name-driven entry points used
//! by calling collaborators (GUI, plotting, timing harness).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineResult, SolveError};
use crate::grid::TimeGrid;
use crate::registry::{self, ModelKind, SolverKind};
use crate::solvers::{Euler, Ord2, RK4};
use crate::trajectory::Trajectory;
use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Caller-supplied time span and step size for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub t0: f64,
    pub t1: f64,
    pub dt: f64,
}

/// One of the three fixed-step integrators, resolved from a
/// [`SolverKind`].
pub enum Stepper<T: Scalar> {
    Euler(Euler<T>),
    Ord2(Ord2<T>),
    Rk4(RK4<T>),
}

impl<T: Scalar> Stepper<T> {
    pub fn new(kind: SolverKind, dim: usize) -> Self {
        match kind {
            SolverKind::Euler => Stepper::Euler(Euler::new(dim)),
            SolverKind::Ord2 => Stepper::Ord2(Ord2::new(dim)),
            SolverKind::Rk4 => Stepper::Rk4(RK4::new(dim)),
        }
    }
}

impl<T: Scalar> Steppable<T> for Stepper<T> {
    fn step<S>(
        &mut self,
        system: &S,
        t: T,
        prev: &mut [T],
        next: &mut [T],
        dt: T,
    ) -> Result<(), crate::error::EvalError>
    where
        S: DynamicalSystem<T> + ?Sized,
    {
        match self {
            Stepper::Euler(s) => s.step(system, t, prev, next, dt),
            Stepper::Ord2(s) => s.step(system, t, prev, next, dt),
            Stepper::Rk4(s) => s.step(system, t, prev, next, dt),
        }
    }
}

/// Integrates `system` from `x0` over the grid `[t0, t1)` with step `dt`.
///
/// Row 0 of the result is `x0` exactly; row `i` is the state at
/// `t0 + i*dt`. The grid is validated before any iteration. A non-finite
/// row or an undefined derivative stops the loop and surfaces the failing
/// index together with every completed row.
pub fn solve<T, S, P>(
    system: &S,
    stepper: &mut P,
    t0: T,
    x0: &[T],
    t1: T,
    dt: T,
) -> Result<Trajectory<T>, SolveError<T>>
where
    T: Scalar,
    S: DynamicalSystem<T> + ?Sized,
    P: Steppable<T>,
{
    let grid = TimeGrid::new(t0, t1, dt)?;
    if x0.len() != system.dimension() {
        return Err(SolveError::DimensionMismatch {
            expected: system.dimension(),
            got: x0.len(),
        });
    }

    let n = grid.len();
    let dim = x0.len();
    let mut traj = Trajectory::zeros(n, dim);
    traj.row_mut(0).copy_from_slice(x0);
    debug!(steps = n, dim, "starting fixed-step integration");

    for i in 1..n {
        let t_prev = grid.time(i - 1);
        let outcome = {
            let (prev, next) = traj.step_pair(i);
            stepper
                .step(system, t_prev, prev, next, dt)
                .map(|()| next.iter().all(|v| v.is_finite()))
        };
        match outcome {
            Ok(true) => {}
            Ok(false) => {
                traj.truncate(i);
                warn!(index = i, "state became non-finite; returning partial trajectory");
                return Err(SolveError::Diverged {
                    index: i,
                    partial: traj,
                });
            }
            Err(source) => {
                traj.truncate(i);
                warn!(index = i, "derivative undefined; returning partial trajectory");
                return Err(SolveError::SingularRate {
                    index: i,
                    source,
                    partial: traj,
                });
            }
        }
    }

    Ok(traj)
}

/// Resolves both names and integrates from the model's default initial
/// state.
pub fn run(model_name: &str, solver_name: &str, config: RunConfig) -> EngineResult<Trajectory<f64>> {
    let (model, x0) = registry::resolve_model(model_name)?;
    let solver = registry::resolve_solver(solver_name)?;
    debug!(model = model_name, solver = solver_name, "resolved run");
    let mut stepper = Stepper::new(solver, model.dimension());
    Ok(solve(&model, &mut stepper, config.t0, &x0, config.t1, config.dt)?)
}

/// Resolves both names and integrates from a caller-supplied initial
/// state.
pub fn run_from(
    model_name: &str,
    solver_name: &str,
    config: RunConfig,
    x0: &[f64],
) -> EngineResult<Trajectory<f64>> {
    let (model, _) = registry::resolve_model(model_name)?;
    let solver = registry::resolve_solver(solver_name)?;
    debug!(model = model_name, solver = solver_name, "resolved run");
    let mut stepper = Stepper::new(solver, model.dimension());
    Ok(solve(&model, &mut stepper, config.t0, x0, config.t1, config.dt)?)
}

/// Runs a model with its preset `(t1, dt)` pair and default initial
/// state.
pub fn run_preset(model_name: &str, solver_name: &str) -> EngineResult<Trajectory<f64>> {
    let kind: ModelKind = model_name.parse()?;
    run(model_name, solver_name, kind.preset())
}
