//! The model catalog: neuron membrane-potential models and dynamo/flow
//! models, each a parameter struct with fixed defaults, a canonical initial
//! state, and a `DynamicalSystem` impl evaluating the vector field.
//!
//! Every constructor hands out fresh values; nothing in this module is
//! shared between runs. Spiking models (LIF, Izhikevich) carry an inline
//! reset rule that rewrites the state passed into `apply` before the
//! derivative is formed; see [`crate::traits::DynamicalSystem::apply`].

use crate::error::EvalError;
use crate::traits::DynamicalSystem;

/// van der Pol relaxation oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerPol {
    pub mu: f64,
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self { mu: 1.0 }
    }
}

impl VanDerPol {
    pub fn initial_state() -> Vec<f64> {
        vec![0.01, 0.01]
    }
}

impl DynamicalSystem<f64> for VanDerPol {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        out[0] = x[1];
        out[1] = self.mu * (1.0 - x[0] * x[0]) * x[1] - x[0];
        Ok(())
    }
}

/// Leaky Integrate-and-Fire point neuron.
///
/// The membrane relaxes toward `r * i_ext`; whenever the stored potential
/// reaches `threshold` the reset rule snaps it back to `reset` in place.
/// With the default drive the steady state sits above threshold, so the
/// default run spikes periodically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakyIntegrateAndFire {
    pub tau: f64,
    pub r: f64,
    pub i_ext: f64,
    pub threshold: f64,
    pub reset: f64,
}

impl Default for LeakyIntegrateAndFire {
    fn default() -> Self {
        Self {
            tau: 10.0,
            r: 1.0,
            i_ext: 2.0,
            threshold: 1.0,
            reset: 0.0,
        }
    }
}

impl LeakyIntegrateAndFire {
    pub fn initial_state() -> Vec<f64> {
        vec![0.0]
    }
}

impl DynamicalSystem<f64> for LeakyIntegrateAndFire {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        if x[0] >= self.threshold {
            x[0] = self.reset;
        }
        out[0] = (self.r * self.i_ext - x[0]) / self.tau;
        Ok(())
    }
}

/// Fitzhugh-Nagumo two-variable reduction of excitable membrane dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitzhughNagumo {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub i_ext: f64,
}

impl Default for FitzhughNagumo {
    fn default() -> Self {
        Self {
            a: 0.75,
            b: 0.8,
            c: 3.0,
            i_ext: -0.39,
        }
    }
}

impl FitzhughNagumo {
    pub fn initial_state() -> Vec<f64> {
        vec![0.01, 0.01]
    }
}

impl DynamicalSystem<f64> for FitzhughNagumo {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let (v, w) = (x[0], x[1]);
        out[0] = self.c * (v + w - v * v * v / 3.0 + self.i_ext);
        out[1] = -1.0 / self.c * (v - self.a + self.b * w);
        Ok(())
    }
}

/// Morris-Lecar voltage/recovery model with calcium and potassium
/// conductances.
///
/// The recovery equation is written as `phi*(w_inf - w) / sech(..)` rather
/// than the usual `phi*(w_inf - w)*cosh(..)`; the two agree analytically
/// but not necessarily in the last floating-point digit, and downstream
/// output depends on this spelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorrisLecar {
    pub vk: f64,
    pub gk: f64,
    pub vca: f64,
    pub gca: f64,
    pub vl: f64,
    pub gl: f64,
    pub phi: f64,
    pub v1: f64,
    pub v2: f64,
    pub v3: f64,
    pub v4: f64,
    pub i_ext: f64,
}

impl Default for MorrisLecar {
    fn default() -> Self {
        Self {
            vk: -84.0,
            gk: 8.0,
            vca: 130.0,
            gca: 4.4,
            vl: -60.0,
            gl: 2.0,
            phi: 0.04,
            v1: -1.2,
            v2: 18.0,
            v3: 2.0,
            v4: 30.0,
            i_ext: 79.0,
        }
    }
}

impl MorrisLecar {
    pub fn initial_state() -> Vec<f64> {
        vec![0.0, 0.0]
    }
}

impl DynamicalSystem<f64> for MorrisLecar {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let (v, w) = (x[0], x[1]);
        let m_inf = 0.5 * (1.0 + ((v - self.v1) / self.v2).tanh());
        let w_inf = 0.5 * (1.0 + ((v - self.v3) / self.v4).tanh());
        let sech = ((v - self.v3) / (2.0 * self.v4)).cosh().recip();

        out[0] = -self.gca * m_inf * (v - self.vca)
            - self.gk * w * (v - self.vk)
            - self.gl * (v - self.vl)
            + self.i_ext;
        out[1] = self.phi * (w_inf - w) / sech;
        Ok(())
    }
}

/// Izhikevich quadratic integrate-and-fire neuron.
///
/// Spike detection is the inline rule of the original formulation: once the
/// stored potential reaches [`Izhikevich::SPIKE_THRESHOLD`] it is rewritten
/// to `c` and the recovery variable is bumped by `d`, in place, before the
/// derivative is formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Izhikevich {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub i_ext: f64,
}

impl Izhikevich {
    pub const SPIKE_THRESHOLD: f64 = 30.0;

    pub fn initial_state() -> Vec<f64> {
        vec![0.0, 0.0]
    }
}

impl Default for Izhikevich {
    fn default() -> Self {
        Self {
            a: 0.02,
            b: 0.2,
            c: -65.0,
            d: 2.0,
            i_ext: 10.0,
        }
    }
}

impl DynamicalSystem<f64> for Izhikevich {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        if x[0] >= Self::SPIKE_THRESHOLD {
            x[0] = self.c;
            x[1] += self.d;
        }
        let (v, u) = (x[0], x[1]);
        out[0] = 0.04 * v * v + 5.0 * v + 140.0 - u + self.i_ext;
        out[1] = self.a * (self.b * v - u);
        Ok(())
    }
}

/// Hindmarsh-Rose bursting neuron, three variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HindmarshRose {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub r: f64,
    pub s: f64,
    pub i_ext: f64,
    pub x_rest: f64,
}

impl Default for HindmarshRose {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 3.0,
            c: 1.0,
            d: 5.0,
            r: 0.006,
            s: 4.0,
            i_ext: 1.84,
            x_rest: -1.5,
        }
    }
}

impl HindmarshRose {
    pub fn initial_state() -> Vec<f64> {
        vec![3.0, 0.0, -1.2]
    }
}

impl DynamicalSystem<f64> for HindmarshRose {
    fn dimension(&self) -> usize {
        3
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let (xv, y, z) = (x[0], x[1], x[2]);
        out[0] = y - self.a * xv.powi(3) + self.b * xv * xv - z + self.i_ext;
        out[1] = self.c - self.d * xv * xv - y;
        out[2] = self.r * (self.s * (xv - self.x_rest) - z);
        Ok(())
    }
}

/// Two Hindmarsh-Rose neurons with diffusive voltage coupling. Not part of
/// the named catalog; construct it directly when a six-variable bursting
/// pair is wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledHindmarshRose {
    pub cell: HindmarshRose,
    pub k: f64,
}

impl Default for CoupledHindmarshRose {
    fn default() -> Self {
        Self {
            cell: HindmarshRose::default(),
            k: 0.05,
        }
    }
}

impl CoupledHindmarshRose {
    pub fn initial_state() -> Vec<f64> {
        vec![3.0, 0.0, -1.2, 3.0, 0.0, -1.2]
    }
}

impl DynamicalSystem<f64> for CoupledHindmarshRose {
    fn dimension(&self) -> usize {
        6
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let p = &self.cell;
        let (x0, y0, z0) = (x[0], x[1], x[2]);
        let (x1, y1, z1) = (x[3], x[4], x[5]);

        out[0] = y0 - p.a * x0.powi(3) + p.b * x0 * x0 - z0 + p.i_ext + self.k * (x1 - x0);
        out[1] = p.c - p.d * x0 * x0 - y0;
        out[2] = p.r * (p.s * (x0 - p.x_rest) - z0);
        out[3] = y1 - p.a * x1.powi(3) + p.b * x1 * x1 - z1 + p.i_ext + self.k * (x0 - x1);
        out[4] = p.c - p.d * x1 * x1 - y1;
        out[5] = p.r * (p.s * (x1 - p.x_rest) - z1);
        Ok(())
    }
}

/// Hodgkins-Huxley four-variable membrane model in the inverted-sign
/// convention (depolarization is negative, `e_na = -115`).
///
/// Four voltage-dependent gate rates are computed in closed form before the
/// derivative: alpha/beta pairs for the potassium activation `n`, sodium
/// activation `m`, and sodium inactivation `h`. The `exp(x) - 1`
/// denominators of `alpha_n` and `alpha_m` vanish at `v = -10` and
/// `v = -25` respectively; evaluation at those exact voltages fails with
/// [`EvalError::SingularRate`] instead of leaking NaN into the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HodgkinHuxley {
    pub g_k: f64,
    pub g_na: f64,
    pub g_l: f64,
    pub e_k: f64,
    pub e_na: f64,
    pub e_l: f64,
    pub c_m: f64,
    pub i_ext: f64,
}

impl Default for HodgkinHuxley {
    fn default() -> Self {
        Self {
            g_k: 36.0,
            g_na: 120.0,
            g_l: 0.3,
            e_k: 12.0,
            e_na: -115.0,
            e_l: -10.613,
            c_m: 1.0,
            i_ext: -10.0,
        }
    }
}

impl HodgkinHuxley {
    pub fn initial_state() -> Vec<f64> {
        vec![0.01, 0.01, 0.01, 0.01]
    }

    fn alpha_n(v: f64) -> Result<f64, EvalError> {
        let den = ((v + 10.0) / 10.0).exp() - 1.0;
        if den == 0.0 {
            return Err(EvalError::SingularRate { voltage: v });
        }
        Ok(0.01 * (v + 10.0) / den)
    }

    fn alpha_m(v: f64) -> Result<f64, EvalError> {
        let den = ((v + 25.0) / 10.0).exp() - 1.0;
        if den == 0.0 {
            return Err(EvalError::SingularRate { voltage: v });
        }
        Ok(0.1 * (v + 25.0) / den)
    }
}

impl DynamicalSystem<f64> for HodgkinHuxley {
    fn dimension(&self) -> usize {
        4
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let (v, n, m, h) = (x[0], x[1], x[2], x[3]);

        let alpha_n = Self::alpha_n(v)?;
        let beta_n = 0.125 * (v / 80.0).exp();
        let alpha_m = Self::alpha_m(v)?;
        let beta_m = 4.0 * (v / 18.0).exp();
        let alpha_h = 0.07 * (v / 20.0).exp();
        let beta_h = 1.0 / (((v + 30.0) / 10.0).exp() + 1.0);

        out[0] = (self.g_k * n.powi(4) * (v - self.e_k)
            + self.g_na * m.powi(3) * h * (v - self.e_na)
            + self.g_l * (v - self.e_l)
            - self.i_ext)
            * (-1.0 / self.c_m);
        out[1] = alpha_n * (1.0 - n) - beta_n * n;
        out[2] = alpha_m * (1.0 - m) - beta_m * m;
        out[3] = alpha_h * (1.0 - h) - beta_h * h;
        Ok(())
    }
}

/// Rikitake two-disc dynamo, the classic model of geomagnetic polarity
/// reversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RikitakeDynamo {
    pub m: f64,
    pub g: f64,
    pub r: f64,
    pub f: f64,
}

impl Default for RikitakeDynamo {
    fn default() -> Self {
        Self {
            m: 0.5,
            g: 50.0,
            r: 8.0,
            f: 0.5,
        }
    }
}

impl RikitakeDynamo {
    pub fn initial_state() -> Vec<f64> {
        vec![-1.4, -1.0, -1.0, -1.4, 2.2, -1.5]
    }
}

impl DynamicalSystem<f64> for RikitakeDynamo {
    fn dimension(&self) -> usize {
        6
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        let m = self.m;
        out[0] = self.r * (x[3] - x[0]);
        out[1] = self.r * (x[2] - x[1]);
        out[2] = x[0] * x[4] + m * x[1] - (1.0 + m) * x[2];
        out[3] = x[1] * x[5] + m * x[0] - (1.0 + m) * x[3];
        out[4] = self.g * (1.0 - (1.0 + m) * x[0] * x[2] + m * x[0] * x[1]) - self.f * x[4];
        out[5] = self.g * (1.0 - (1.0 + m) * x[1] * x[3] + m * x[1] * x[0]) - self.f * x[5];
        Ok(())
    }
}

/// Lorenz convection equations with the canonical chaotic parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl Lorenz {
    pub fn initial_state() -> Vec<f64> {
        vec![1.0, 2.0, 1.0]
    }
}

impl DynamicalSystem<f64> for Lorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        out[0] = self.sigma * (x[1] - x[0]);
        out[1] = self.rho * x[0] - x[1] - x[0] * x[2];
        out[2] = x[0] * x[1] - self.beta * x[2];
        Ok(())
    }
}

/// Robbins single-disc dynamo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Robbins {
    pub v: f64,
    pub sigma: f64,
    pub r: f64,
}

impl Default for Robbins {
    fn default() -> Self {
        Self {
            v: 1.0,
            sigma: 5.0,
            r: 13.0,
        }
    }
}

impl Robbins {
    pub fn initial_state() -> Vec<f64> {
        vec![0.00032, 0.23, 0.51]
    }
}

impl DynamicalSystem<f64> for Robbins {
    fn dimension(&self) -> usize {
        3
    }

    fn apply(&self, _t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        out[0] = self.r - x[1] * x[2] - self.v * x[0];
        out[1] = x[0] * x[2] - x[1];
        out[2] = self.sigma * (x[1] - x[2]);
        Ok(())
    }
}

/// A model resolved from the catalog, ready to integrate.
///
/// One enum so the engine can hold any catalog entry without boxing;
/// everything dispatches with a plain match.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    VanDerPol(VanDerPol),
    LeakyIntegrateAndFire(LeakyIntegrateAndFire),
    FitzhughNagumo(FitzhughNagumo),
    MorrisLecar(MorrisLecar),
    Izhikevich(Izhikevich),
    HindmarshRose(HindmarshRose),
    CoupledHindmarshRose(CoupledHindmarshRose),
    HodgkinHuxley(HodgkinHuxley),
    RikitakeDynamo(RikitakeDynamo),
    Lorenz(Lorenz),
    Robbins(Robbins),
}

impl Model {
    /// A fresh copy of the model's canonical initial state. Every call
    /// allocates anew; runs never share state buffers.
    pub fn initial_state(&self) -> Vec<f64> {
        match self {
            Model::VanDerPol(_) => VanDerPol::initial_state(),
            Model::LeakyIntegrateAndFire(_) => LeakyIntegrateAndFire::initial_state(),
            Model::FitzhughNagumo(_) => FitzhughNagumo::initial_state(),
            Model::MorrisLecar(_) => MorrisLecar::initial_state(),
            Model::Izhikevich(_) => Izhikevich::initial_state(),
            Model::HindmarshRose(_) => HindmarshRose::initial_state(),
            Model::CoupledHindmarshRose(_) => CoupledHindmarshRose::initial_state(),
            Model::HodgkinHuxley(_) => HodgkinHuxley::initial_state(),
            Model::RikitakeDynamo(_) => RikitakeDynamo::initial_state(),
            Model::Lorenz(_) => Lorenz::initial_state(),
            Model::Robbins(_) => Robbins::initial_state(),
        }
    }
}

impl DynamicalSystem<f64> for Model {
    fn dimension(&self) -> usize {
        match self {
            Model::VanDerPol(m) => m.dimension(),
            Model::LeakyIntegrateAndFire(m) => m.dimension(),
            Model::FitzhughNagumo(m) => m.dimension(),
            Model::MorrisLecar(m) => m.dimension(),
            Model::Izhikevich(m) => m.dimension(),
            Model::HindmarshRose(m) => m.dimension(),
            Model::CoupledHindmarshRose(m) => m.dimension(),
            Model::HodgkinHuxley(m) => m.dimension(),
            Model::RikitakeDynamo(m) => m.dimension(),
            Model::Lorenz(m) => m.dimension(),
            Model::Robbins(m) => m.dimension(),
        }
    }

    fn apply(&self, t: f64, x: &mut [f64], out: &mut [f64]) -> Result<(), EvalError> {
        match self {
            Model::VanDerPol(m) => m.apply(t, x, out),
            Model::LeakyIntegrateAndFire(m) => m.apply(t, x, out),
            Model::FitzhughNagumo(m) => m.apply(t, x, out),
            Model::MorrisLecar(m) => m.apply(t, x, out),
            Model::Izhikevich(m) => m.apply(t, x, out),
            Model::HindmarshRose(m) => m.apply(t, x, out),
            Model::CoupledHindmarshRose(m) => m.apply(t, x, out),
            Model::HodgkinHuxley(m) => m.apply(t, x, out),
            Model::RikitakeDynamo(m) => m.apply(t, x, out),
            Model::Lorenz(m) => m.apply(t, x, out),
            Model::Robbins(m) => m.apply(t, x, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::traits::DynamicalSystem;

    fn eval<S: DynamicalSystem<f64>>(system: &S, state: &[f64]) -> Vec<f64> {
        let mut x = state.to_vec();
        let mut out = vec![0.0; system.dimension()];
        system
            .apply(0.0, &mut x, &mut out)
            .expect("evaluation should succeed");
        out
    }

    #[test]
    fn initial_states_match_dimensions() {
        let cases: Vec<(usize, Vec<f64>)> = vec![
            (VanDerPol::default().dimension(), VanDerPol::initial_state()),
            (
                LeakyIntegrateAndFire::default().dimension(),
                LeakyIntegrateAndFire::initial_state(),
            ),
            (
                FitzhughNagumo::default().dimension(),
                FitzhughNagumo::initial_state(),
            ),
            (MorrisLecar::default().dimension(), MorrisLecar::initial_state()),
            (Izhikevich::default().dimension(), Izhikevich::initial_state()),
            (
                HindmarshRose::default().dimension(),
                HindmarshRose::initial_state(),
            ),
            (
                CoupledHindmarshRose::default().dimension(),
                CoupledHindmarshRose::initial_state(),
            ),
            (
                HodgkinHuxley::default().dimension(),
                HodgkinHuxley::initial_state(),
            ),
            (
                RikitakeDynamo::default().dimension(),
                RikitakeDynamo::initial_state(),
            ),
            (Lorenz::default().dimension(), Lorenz::initial_state()),
            (Robbins::default().dimension(), Robbins::initial_state()),
        ];
        for (dim, x0) in cases {
            assert_eq!(dim, x0.len());
        }
    }

    #[test]
    fn initial_state_is_fresh_per_call() {
        let model = Model::Lorenz(Lorenz::default());
        let mut a = model.initial_state();
        a[0] = 999.0;
        assert_eq!(model.initial_state()[0], 1.0);
    }

    #[test]
    fn lorenz_derivative_at_canonical_start() {
        let out = eval(&Lorenz::default(), &[1.0, 2.0, 1.0]);
        assert!((out[0] - 10.0).abs() < 1e-12);
        assert!((out[1] - 25.0).abs() < 1e-12);
        assert!((out[2] - (2.0 - 8.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn van_der_pol_derivative_near_origin() {
        let out = eval(&VanDerPol::default(), &[0.01, 0.01]);
        assert!((out[0] - 0.01).abs() < 1e-15);
        assert!((out[1] - ((1.0 - 1e-4) * 0.01 - 0.01)).abs() < 1e-15);
    }

    #[test]
    fn fitzhugh_nagumo_derivative_spot_check() {
        let out = eval(&FitzhughNagumo::default(), &[0.01, 0.01]);
        let expected0 = 3.0 * (0.01 + 0.01 - 0.01_f64.powi(3) / 3.0 - 0.39);
        let expected1 = -1.0 / 3.0 * (0.01 - 0.75 + 0.8 * 0.01);
        assert!((out[0] - expected0).abs() < 1e-12);
        assert!((out[1] - expected1).abs() < 1e-12);
    }

    #[test]
    fn robbins_derivative_spot_check() {
        let out = eval(&Robbins::default(), &[1.0, 1.0, 1.0]);
        assert_eq!(out[0], 11.0);
        assert_eq!(out[1], 0.0);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn rikitake_derivative_at_default_start() {
        let out = eval(&RikitakeDynamo::default(), &RikitakeDynamo::initial_state());
        assert!((out[0] - 0.0).abs() < 1e-12);
        assert!((out[1] - 0.0).abs() < 1e-12);
        // x0*x4 + m*x1 - (1+m)*x2 = -3.08 - 0.5 + 1.5
        assert!((out[2] - (-2.08)).abs() < 1e-12);
        // g*(1 - (1+m)*x0*x2 + m*x0*x1) - f*x4 = 50*(1 - 2.1 + 0.7) - 1.1
        assert!((out[4] - (-21.1)).abs() < 1e-9);
    }

    #[test]
    fn morris_lecar_recovery_vanishes_at_steady_state() {
        let ml = MorrisLecar::default();
        let v = 10.0;
        let w_inf = 0.5 * (1.0 + ((v - ml.v3) / ml.v4).tanh());
        let out = eval(&ml, &[v, w_inf]);
        assert!(out[1].abs() < 1e-12);
    }

    #[test]
    fn lif_reset_rewrites_the_input_state() {
        let lif = LeakyIntegrateAndFire::default();
        let mut x = vec![1.5];
        let mut out = vec![0.0];
        lif.apply(0.0, &mut x, &mut out).expect("apply should succeed");
        assert_eq!(x[0], 0.0);
        assert!((out[0] - 0.2).abs() < 1e-15);
    }

    #[test]
    fn lif_below_threshold_is_untouched() {
        let lif = LeakyIntegrateAndFire::default();
        let mut x = vec![0.9];
        let mut out = vec![0.0];
        lif.apply(0.0, &mut x, &mut out).expect("apply should succeed");
        assert_eq!(x[0], 0.9);
    }

    #[test]
    fn izhikevich_reset_snaps_voltage_and_bumps_recovery() {
        let iz = Izhikevich::default();
        let mut x = vec![30.0, 1.0];
        let mut out = vec![0.0, 0.0];
        iz.apply(0.0, &mut x, &mut out).expect("apply should succeed");
        assert_eq!(x, vec![-65.0, 3.0]);
        // Derivative is formed from the post-reset state.
        let v = -65.0;
        let expected0 = 0.04 * v * v + 5.0 * v + 140.0 - 3.0 + 10.0;
        assert!((out[0] - expected0).abs() < 1e-12);
        assert!((out[1] - 0.02 * (0.2 * v - 3.0)).abs() < 1e-12);
    }

    #[test]
    fn coupled_hindmarsh_rose_is_symmetric_for_identical_halves() {
        let out = eval(
            &CoupledHindmarshRose::default(),
            &CoupledHindmarshRose::initial_state(),
        );
        assert_eq!(out[0], out[3]);
        assert_eq!(out[1], out[4]);
        assert_eq!(out[2], out[5]);
        // Coupling term cancels, so each half matches the single neuron.
        let single = eval(&HindmarshRose::default(), &HindmarshRose::initial_state());
        assert_eq!(out[0], single[0]);
        assert_eq!(out[2], single[2]);
    }

    #[test]
    fn hodgkin_huxley_rates_are_finite_at_rest() {
        let out = eval(&HodgkinHuxley::default(), &HodgkinHuxley::initial_state());
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn hodgkin_huxley_reports_singular_rates_at_pole_voltages() {
        let hh = HodgkinHuxley::default();
        for v in [-10.0, -25.0] {
            let mut x = vec![v, 0.01, 0.01, 0.01];
            let mut out = vec![0.0; 4];
            let err = hh.apply(0.0, &mut x, &mut out).expect_err("expected pole");
            assert_eq!(err, EvalError::SingularRate { voltage: v });
        }
    }
}
