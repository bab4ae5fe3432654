//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned from simulation constructors and sampling entry points.
///
/// Ill-placed potential shapes are *not* represented here: they contribute a
/// zero field and emit a [`tracing`] warning instead, since potentials compose
/// additively and a partial field is still usable. Numerical instability from
/// an aggressive time step is likewise never reported as an error; it
/// manifests as non-finite values in the sampled arrays.
#[derive(Debug, Error)]
pub enum SimError {
    /// Returned when a grid has no interior points to update.
    #[error("grids must contain at least 3 points; got {0}")]
    BadGridSize(usize),

    /// Returned when a non-positive spatial step is encountered.
    #[error("spatial steps must be greater than 0; got {0}")]
    BadSpatialStep(f64),

    /// Returned when coordinate limits describe an empty range.
    #[error("coordinate limits must satisfy start < end; got [{0}, {1}]")]
    BadLims(f64, f64),

    /// Returned when a user-supplied time step is non-positive or non-finite.
    #[error("time steps must be positive and finite; got {0}")]
    BadTimeStep(f64),

    /// Returned when a zero sampling interval is encountered.
    #[error("sampling intervals must be greater than 0")]
    BadInterval,

    /// Returned when a non-positive wave packet spread is encountered.
    #[error("wave packet spreads must be greater than 0; got {0}")]
    BadSigma(f64),

    /// Returned when a non-positive particle mass is encountered.
    #[error("particle masses must be greater than 0; got {0}")]
    BadMass(f64),
}

impl SimError {
    pub(crate) fn check_grid_size(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::BadGridSize(n))
    }

    pub(crate) fn check_spatial_step(dx: f64) -> Result<(), Self> {
        (dx > 0.0).then_some(()).ok_or(Self::BadSpatialStep(dx))
    }

    pub(crate) fn check_lims(lims: (f64, f64)) -> Result<(), Self> {
        (lims.0 < lims.1).then_some(()).ok_or(Self::BadLims(lims.0, lims.1))
    }

    pub(crate) fn check_time_step(dt: f64) -> Result<(), Self> {
        (dt > 0.0 && dt.is_finite()).then_some(())
            .ok_or(Self::BadTimeStep(dt))
    }

    pub(crate) fn check_interval(delta_t: usize) -> Result<(), Self> {
        (delta_t != 0).then_some(()).ok_or(Self::BadInterval)
    }

    pub(crate) fn check_sigma(sigma: f64) -> Result<(), Self> {
        (sigma > 0.0).then_some(()).ok_or(Self::BadSigma(sigma))
    }

    pub(crate) fn check_mass(m: f64) -> Result<(), Self> {
        (m > 0.0).then_some(()).ok_or(Self::BadMass(m))
    }
}

pub type SimResult<T> = Result<T, SimError>;
