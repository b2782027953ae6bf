//! Name resolution for the closed model and solver catalogs.
//!
//! Dispatch is a pair of enumerated keys rather than string-comparison
//! chains: parsing a name yields a `Copy` kind, and every resolution
//! constructs a fresh model value with default parameters. There is no
//! global mutable catalog and no fallback entry; unknown names fail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::RunConfig;
use crate::error::RegistryError;
use crate::models::{
    FitzhughNagumo, HindmarshRose, HodgkinHuxley, Izhikevich, LeakyIntegrateAndFire, Lorenz,
    Model, MorrisLecar, RikitakeDynamo, Robbins, VanDerPol,
};

/// The ten named models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    VanDerPol,
    LeakyIntegrateAndFire,
    FitzhughNagumo,
    MorrisLecar,
    Izhikevich,
    HindmarshRose,
    HodgkinHuxley,
    RikitakeDynamo,
    Lorenz,
    Robbins,
}

impl ModelKind {
    pub const ALL: [ModelKind; 10] = [
        ModelKind::VanDerPol,
        ModelKind::LeakyIntegrateAndFire,
        ModelKind::FitzhughNagumo,
        ModelKind::MorrisLecar,
        ModelKind::Izhikevich,
        ModelKind::HindmarshRose,
        ModelKind::HodgkinHuxley,
        ModelKind::RikitakeDynamo,
        ModelKind::Lorenz,
        ModelKind::Robbins,
    ];

    /// The short catalog key, as used by calling collaborators.
    pub fn key(self) -> &'static str {
        match self {
            ModelKind::VanDerPol => "VDP",
            ModelKind::LeakyIntegrateAndFire => "LIF",
            ModelKind::FitzhughNagumo => "FN",
            ModelKind::MorrisLecar => "ML",
            ModelKind::Izhikevich => "IZ",
            ModelKind::HindmarshRose => "HR",
            ModelKind::HodgkinHuxley => "HH",
            ModelKind::RikitakeDynamo => "RD",
            ModelKind::Lorenz => "L",
            ModelKind::Robbins => "R",
        }
    }

    /// Human-readable title for menus and plot headings.
    pub fn title(self) -> &'static str {
        match self {
            ModelKind::VanDerPol => "van der Pol oscillator",
            ModelKind::LeakyIntegrateAndFire => "Leaky Integrate-and-Fire",
            ModelKind::FitzhughNagumo => "Fitzhugh-Nagumo",
            ModelKind::MorrisLecar => "Morris-Lecar",
            ModelKind::Izhikevich => "Izhikevich",
            ModelKind::HindmarshRose => "Hindmarsh-Rose",
            ModelKind::HodgkinHuxley => "Hodgkins-Huxley",
            ModelKind::RikitakeDynamo => "Rikitake Dynamo",
            ModelKind::Lorenz => "Lorenz Equations",
            ModelKind::Robbins => "Robbins Equations",
        }
    }

    /// A fresh model instance with default parameters. Nothing is cached
    /// or shared; each run owns its model value outright.
    pub fn build(self) -> Model {
        match self {
            ModelKind::VanDerPol => Model::VanDerPol(VanDerPol::default()),
            ModelKind::LeakyIntegrateAndFire => {
                Model::LeakyIntegrateAndFire(LeakyIntegrateAndFire::default())
            }
            ModelKind::FitzhughNagumo => Model::FitzhughNagumo(FitzhughNagumo::default()),
            ModelKind::MorrisLecar => Model::MorrisLecar(MorrisLecar::default()),
            ModelKind::Izhikevich => Model::Izhikevich(Izhikevich::default()),
            ModelKind::HindmarshRose => Model::HindmarshRose(HindmarshRose::default()),
            ModelKind::HodgkinHuxley => Model::HodgkinHuxley(HodgkinHuxley::default()),
            ModelKind::RikitakeDynamo => Model::RikitakeDynamo(RikitakeDynamo::default()),
            ModelKind::Lorenz => Model::Lorenz(Lorenz::default()),
            ModelKind::Robbins => Model::Robbins(Robbins::default()),
        }
    }

    /// The `(t1, dt)` pair the original plotting screens used for this
    /// model. A convenience for callers, not an engine constraint.
    pub fn preset(self) -> RunConfig {
        let (t1, dt) = match self {
            ModelKind::VanDerPol => (100.0, 0.02),
            ModelKind::LeakyIntegrateAndFire => (100.0, 0.02),
            ModelKind::FitzhughNagumo => (100.0, 0.01),
            ModelKind::MorrisLecar => (1000.0, 0.30),
            ModelKind::Izhikevich => (300.0, 0.1),
            ModelKind::HindmarshRose => (800.0, 0.1),
            ModelKind::HodgkinHuxley => (100.0, 0.02),
            ModelKind::RikitakeDynamo => (100.0, 0.01),
            ModelKind::Lorenz => (100.0, 0.01),
            ModelKind::Robbins => (200.0, 0.1),
        };
        RunConfig { t0: 0.0, t1, dt }
    }
}

impl FromStr for ModelKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| RegistryError::UnknownModel(s.to_owned()))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The three fixed-step integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverKind {
    Euler,
    Ord2,
    Rk4,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [SolverKind::Euler, SolverKind::Ord2, SolverKind::Rk4];

    pub fn key(self) -> &'static str {
        match self {
            SolverKind::Euler => "euler",
            SolverKind::Ord2 => "ord2",
            SolverKind::Rk4 => "rk4",
        }
    }
}

impl FromStr for SolverKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| RegistryError::UnknownSolver(s.to_owned()))
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolves a model name to a fresh instance and its default initial
/// state.
pub fn resolve_model(name: &str) -> Result<(Model, Vec<f64>), RegistryError> {
    let kind: ModelKind = name.parse()?;
    let model = kind.build();
    let x0 = model.initial_state();
    Ok((model, x0))
}

/// Resolves a solver name.
pub fn resolve_solver(name: &str) -> Result<SolverKind, RegistryError> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::{resolve_model, resolve_solver, ModelKind, SolverKind};
    use crate::error::RegistryError;
    use crate::traits::DynamicalSystem;

    #[test]
    fn every_catalog_key_resolves() {
        for kind in ModelKind::ALL {
            let (model, x0) = resolve_model(kind.key()).expect("catalog key should resolve");
            assert_eq!(model.dimension(), x0.len());
        }
        for kind in SolverKind::ALL {
            assert_eq!(resolve_solver(kind.key()).unwrap(), kind);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
        }
        for kind in SolverKind::ALL {
            assert_eq!(kind.to_string().parse::<SolverKind>().unwrap(), kind);
        }
    }

    #[test]
    fn catalog_dimensions_are_fixed() {
        let expected = [
            (ModelKind::VanDerPol, 2),
            (ModelKind::LeakyIntegrateAndFire, 1),
            (ModelKind::FitzhughNagumo, 2),
            (ModelKind::MorrisLecar, 2),
            (ModelKind::Izhikevich, 2),
            (ModelKind::HindmarshRose, 3),
            (ModelKind::HodgkinHuxley, 4),
            (ModelKind::RikitakeDynamo, 6),
            (ModelKind::Lorenz, 3),
            (ModelKind::Robbins, 3),
        ];
        for (kind, dim) in expected {
            assert_eq!(kind.build().dimension(), dim, "{}", kind);
        }
    }

    #[test]
    fn unknown_names_fail_without_defaults() {
        for name in ["XX", "", "vdp", "Not Found", "rk4"] {
            let err = resolve_model(name).expect_err("unknown model should fail");
            assert_eq!(err, RegistryError::UnknownModel(name.to_owned()));
        }
        for name in ["rk5", "", "RK4", "midpoint", "VDP"] {
            let err = resolve_solver(name).expect_err("unknown solver should fail");
            assert_eq!(err, RegistryError::UnknownSolver(name.to_owned()));
        }
    }

    #[test]
    fn presets_are_well_formed() {
        for kind in ModelKind::ALL {
            let preset = kind.preset();
            assert!(preset.dt > 0.0);
            assert!(preset.t1 > preset.t0);
        }
    }
}
