//! Localized Gaussian wave packet used as the initial condition.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ SimError, SimResult },
    DEF_K0,
    HBAR,
};

/// A Gaussian envelope modulated by a plane wave,
///
/// ```text
/// Re ψ(x, t) = exp(-(x - t - x₀)² / 2σ²) cos(k₀ x)
/// Im ψ(x, t) = exp(-(x - t - x₀)² / 2σ²) sin(k₀ x)
/// ψ*ψ = (Re ψ)² + (Im ψ)²
/// ```
///
/// The components are *not* normalized here; the integrator rescales its
/// state once at initialization so that the total probability mass over its
/// grid is 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianPacket {
    /// Initial position of the packet center.
    pub x0: f64,
    /// Standard deviation of the envelope; uncertainty of localization.
    pub sigma: f64,
    /// Wavenumber of the carrier.
    pub k0: f64,
    /// Particle mass.
    pub m: f64,
    /// Energy derived from the wavenumber and spread,
    /// `(ħ²/2m)(k₀² + 1/2σ²)`. Informational; the integrator never reads it.
    pub e: f64,
}

impl GaussianPacket {
    /// Create a packet centered on `x0` with spread `sigma`.
    pub fn new(x0: f64, sigma: f64, k0: f64, m: f64) -> SimResult<Self> {
        SimError::check_sigma(sigma)?;
        SimError::check_mass(m)?;
        let e = HBAR * HBAR / (2.0 * m)
            * (k0 * k0 + 0.5 / (sigma * sigma));
        Ok(Self { x0, sigma, k0, m, e })
    }

    /// Like [`Self::new`] with the default wavenumber `π/20` and unit mass.
    pub fn with_defaults(x0: f64, sigma: f64) -> SimResult<Self> {
        Self::new(x0, sigma, DEF_K0, 1.0)
    }

    fn envelope(&self, x: f64, t: f64) -> f64 {
        (-(x - t - self.x0).powi(2) / (2.0 * self.sigma * self.sigma)).exp()
    }

    /// Real component over an array of positions at time `t`.
    pub fn real<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.envelope(xk, t) * (self.k0 * xk).cos())
    }

    /// Imaginary component over an array of positions at time `t`.
    pub fn imag<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.envelope(xk, t) * (self.k0 * xk).sin())
    }

    /// Probability density over an array of positions at time `t`.
    pub fn prob<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| {
            let g = self.envelope(xk, t);
            let re = g * (self.k0 * xk).cos();
            let im = g * (self.k0 * xk).sin();
            re * re + im * im
        })
    }

    /// Complex-valued view of the packet, `envelope · e^(i k₀ x)`.
    pub fn psi<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.envelope(xk, t) * C64::cis(self.k0 * xk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray as nd;
    use std::f64::consts::PI;

    #[test]
    fn defaults_fill_wavenumber_and_mass() {
        let p = GaussianPacket::with_defaults(50.0, 5.0).unwrap();
        assert_abs_diff_eq!(p.k0, PI / 20.0, epsilon = 1e-15);
        assert_eq!(p.m, 1.0);
    }

    #[test]
    fn energy_follows_wavenumber_and_spread() {
        let p = GaussianPacket::new(0.0, 5.0, 0.3, 1.0).unwrap();
        assert_abs_diff_eq!(
            p.e, 0.5 * (0.3_f64.powi(2) + 0.5 / 25.0), epsilon = 1e-15);
        // heavier particles at the same wavenumber carry less energy
        let q = GaussianPacket::new(0.0, 5.0, 0.3, 2.0).unwrap();
        assert_abs_diff_eq!(q.e, p.e / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn density_matches_component_squares() {
        let p = GaussianPacket::new(50.0, 5.0, 0.3, 1.0).unwrap();
        let x: nd::Array1<f64> = (0..100).map(|k| k as f64).collect();
        let re = p.real(&x, 0.0);
        let im = p.imag(&x, 0.0);
        let prob = p.prob(&x, 0.0);
        for k in 0..x.len() {
            assert_abs_diff_eq!(
                prob[k], re[k] * re[k] + im[k] * im[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn complex_view_agrees_with_components() {
        let p = GaussianPacket::new(50.0, 5.0, 0.3, 1.0).unwrap();
        let x: nd::Array1<f64> = (40..60).map(|k| k as f64).collect();
        let re = p.real(&x, 2.0);
        let im = p.imag(&x, 2.0);
        let psi = p.psi(&x, 2.0);
        for k in 0..x.len() {
            assert_abs_diff_eq!(psi[k].re, re[k], epsilon = 1e-12);
            assert_abs_diff_eq!(psi[k].im, im[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(GaussianPacket::new(0.0, 0.0, 0.3, 1.0).is_err());
        assert!(GaussianPacket::new(0.0, -5.0, 0.3, 1.0).is_err());
        assert!(GaussianPacket::new(0.0, 5.0, 0.3, 0.0).is_err());
    }
}
