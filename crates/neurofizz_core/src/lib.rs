//! The `neurofizz_core` crate is the model/solver integration engine
//! behind the NeuroFizz playground: a fixed catalog of neuron and dynamo
//! ODE models and three fixed-step integrators that turn a model, an
//! initial state, and a time span into a dense trajectory.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem`
//!   (vector fields, including the inline spike-reset contract),
//!   `Steppable` (solvers).
//! - **Models**: the named catalog (van der Pol through Robbins) with
//!   fixed default parameters and canonical initial states.
//! - **Solvers**: euler, a simplified second-order predictor, and
//!   classical RK4.
//! - **Registry**: closed-set name resolution for models and solvers.
//! - **Engine**: the integration loop, run presets, and the name-driven
//!   entry points consumed by the GUI and other collaborators.
//!
//! Everything is synchronous and deterministic; identical inputs yield
//! bit-identical trajectories, and the only side effect anywhere is the
//! documented in-place reset of spiking models.

pub mod engine;
pub mod error;
pub mod grid;
pub mod models;
pub mod registry;
pub mod solvers;
pub mod trajectory;
pub mod traits;
