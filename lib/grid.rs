//! The spatial discretization on which fields and wavefunctions are sampled.

use ndarray as nd;
use crate::error::{ SimError, SimResult };

/// An ordered sequence of `n` equally spaced spatial coordinates.
///
/// The coordinate array is computed once at construction and never mutated;
/// a `Grid` is shared read-only between the potential field resolver, the
/// simulation engine, and any rendering layer drawing static backdrops.
#[derive(Clone, Debug)]
pub struct Grid {
    start: f64,
    dx: f64,
    x: nd::Array1<f64>,
}

impl Grid {
    /// Create a grid of `n` points starting at `start` with spacing `dx`.
    ///
    /// At least 3 points are required so that the integration stencil has a
    /// non-empty interior.
    pub fn new(start: f64, dx: f64, n: usize) -> SimResult<Self> {
        SimError::check_spatial_step(dx)?;
        SimError::check_grid_size(n)?;
        let x: nd::Array1<f64>
            = (0..n).map(|k| start + k as f64 * dx).collect();
        Ok(Self { start, dx, x })
    }

    /// Create a grid covering `[lims.0, lims.1)` with spacing `dx`.
    ///
    /// The point count is derived from the range, so the grid always spans
    /// the requested limits with a consistent length.
    pub fn from_lims(lims: (f64, f64), dx: f64) -> SimResult<Self> {
        SimError::check_spatial_step(dx)?;
        SimError::check_lims(lims)?;
        let n = ((lims.1 - lims.0) / dx).ceil() as usize;
        Self::new(lims.0, dx, n)
    }

    /// Number of grid points.
    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Spacing between adjacent coordinates.
    pub fn dx(&self) -> f64 { self.dx }

    /// First coordinate.
    pub fn start(&self) -> f64 { self.start }

    /// Last coordinate.
    pub fn end(&self) -> f64 { self.x[self.x.len() - 1] }

    /// View of the coordinate array.
    pub fn coords(&self) -> nd::ArrayView1<'_, f64> { self.x.view() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_are_evenly_spaced() {
        let grid = Grid::new(-5.0, 0.5, 21).unwrap();
        assert_eq!(grid.len(), 21);
        assert_eq!(grid.start(), -5.0);
        let x = grid.coords();
        for k in 1..grid.len() {
            approx::assert_abs_diff_eq!(
                x[k] - x[k - 1], 0.5, epsilon = 1e-12);
        }
        approx::assert_abs_diff_eq!(grid.end(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn lims_derive_count_from_range() {
        let grid = Grid::from_lims((0.0, 100.0), 1.0).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.end(), 99.0);
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(Grid::new(0.0, 0.0, 100).is_err());
        assert!(Grid::new(0.0, -1.0, 100).is_err());
        assert!(Grid::new(0.0, 1.0, 2).is_err());
        assert!(Grid::from_lims((10.0, 0.0), 1.0).is_err());
    }
}
