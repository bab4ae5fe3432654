#![allow(dead_code, non_snake_case)]

//! Provides higher-level constructs for the numerical integration of the
//! one-dimensional, time-dependent Schrödinger equation via an explicit
//! finite-difference time-domain (FDTD) scheme.
//!
//! A [`Simulation`][sim::Simulation] couples a spatial [`Grid`][grid::Grid],
//! a resolved [potential field][potential], and a localized
//! [Gaussian wave packet][packet::GaussianPacket], advancing the real and
//! imaginary wavefunction components on a staggered three-level time stencil
//! and emitting periodic [snapshots][sim::Snapshot] of the evolving state for
//! external rendering.
//!
//! All quantities are expressed in natural units with `ħ = 1`.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod potential;
pub mod packet;
pub mod sim;
pub mod utils;

pub mod docs;

/// Reduced Planck constant in the natural unit system used throughout.
pub const HBAR: f64 = 1.0;

pub(crate) const DEF_N: usize = 1200;
pub(crate) const DEF_DX: f64 = 1.0;
pub(crate) const DEF_K0: f64 = std::f64::consts::PI / 20.0;
pub(crate) const DEF_TOLERANCE: f64 = 1e-4;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
