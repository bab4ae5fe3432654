//! Potential shapes and their resolution into a single field array.
//!
//! The contributor set is small and fixed, so shapes are expressed as a
//! closed enum rather than an open trait hierarchy. Every variant supplies
//! both a scalar and a vectorized evaluation path, and the two paths share
//! one boundary convention.

use ndarray as nd;
use tracing::warn;
use crate::{ Arr1, DEF_TOLERANCE };

/// A single contribution to the potential field.
///
/// Contributions compose additively: the field seen by the integrator is the
/// elementwise sum of every contributor evaluated on the same grid (see
/// [`resolve`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Potential {
    /// Free particle; identically zero everywhere.
    Null,

    /// Amplitude `a` at the single grid point closest to `pos`, zero
    /// elsewhere.
    ///
    /// On a discrete grid no coordinate necessarily falls on `pos`; with
    /// poor resolution a "point" would smear into a barrier. `tolerance`
    /// bounds how far the nearest coordinate may sit from `pos` before the
    /// shape refuses to place itself and contributes nothing.
    Point { a: f64, pos: f64, tolerance: f64 },

    /// Amplitude `a` on the closed interval `[pos - width, pos + width]`,
    /// zero elsewhere.
    Barrier { a: f64, pos: f64, width: f64 },

    /// Amplitude `a` strictly left of `pos`, zero at and beyond `pos`.
    Step { a: f64, pos: f64 },
}

impl Potential {
    /// Point shape with the default placement tolerance.
    pub fn point(a: f64, pos: f64) -> Self {
        Self::Point { a, pos, tolerance: DEF_TOLERANCE }
    }

    /// Barrier of half-width `width` centered on `pos`.
    pub fn barrier(a: f64, pos: f64, width: f64) -> Self {
        Self::Barrier { a, pos, width }
    }

    /// Step dropping to zero at `pos`.
    pub fn step(a: f64, pos: f64) -> Self {
        Self::Step { a, pos }
    }

    /// Human-readable shape label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "free particle",
            Self::Point { .. } => "point potential",
            Self::Barrier { .. } => "barrier potential",
            Self::Step { .. } => "step potential",
        }
    }

    /// Evaluate the shape at a single position.
    pub fn eval_at(&self, x: f64) -> f64 {
        match *self {
            Self::Null => 0.0,
            Self::Point { a, pos, tolerance } =>
                if (x - pos).abs() <= tolerance { a } else { 0.0 },
            Self::Barrier { a, pos, width } =>
                if (x - pos).abs() <= width { a } else { 0.0 },
            Self::Step { a, pos } =>
                if x < pos { a } else { 0.0 },
        }
    }

    /// Evaluate the shape over an array of positions.
    ///
    /// A point shape whose position lies outside the coordinate range, or
    /// whose nearest coordinate misses its tolerance, emits a warning and
    /// evaluates to the zero array rather than failing; see [`Self::Point`].
    pub fn eval<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        match *self {
            Self::Null => nd::Array1::zeros(x.len()),
            Self::Point { a, pos, tolerance } =>
                eval_point(x, a, pos, tolerance),
            Self::Barrier { .. } | Self::Step { .. } =>
                x.mapv(|xk| self.eval_at(xk)),
        }
    }
}

fn eval_point<S>(x: &Arr1<S>, a: f64, pos: f64, tolerance: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let mut res: nd::Array1<f64> = nd::Array1::zeros(x.len());
    let lo = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if pos < lo || pos > hi {
        warn!(pos, lo, hi,
            "point potential lies outside the coordinate range; \
            contributing zero field");
        return res;
    }
    let (idx, closest) = x.iter().enumerate()
        .min_by(|(_, xa), (_, xb)| {
            (*xa - pos).abs().total_cmp(&(*xb - pos).abs())
        })
        .map(|(k, xk)| (k, *xk))
        .unwrap();
    if (closest - pos).abs() > tolerance {
        warn!(pos, closest, tolerance,
            "no grid point within tolerance of the point potential; \
            contributing zero field");
        return res;
    }
    res[idx] = a;
    res
}

/// Resolve a set of contributions into a single field array: the elementwise
/// sum of every shape evaluated on the given coordinates.
pub fn resolve<S>(potentials: &[Potential], x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let mut V: nd::Array1<f64> = nd::Array1::zeros(x.len());
    for pot in potentials.iter() {
        V += &pot.eval(x);
    }
    V
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn scale() -> ndarray::Array1<f64> {
        Grid::new(0.0, 1.0, 100).unwrap().coords().to_owned()
    }

    #[test]
    fn null_is_identically_zero() {
        let x = scale();
        let v = Potential::Null.eval(&x);
        assert!(v.iter().all(|&vk| vk == 0.0));
        assert_eq!(Potential::Null.eval_at(17.3), 0.0);
    }

    #[test]
    fn point_on_grid_hits_exactly_one_index() {
        let x = scale();
        let v = Potential::point(5.0, 50.0).eval(&x);
        assert_eq!(v[50], 5.0);
        let hits = v.iter().filter(|&&vk| vk != 0.0).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn point_outside_scale_contributes_nothing() {
        let x = scale();
        let v = Potential::point(5.0, -10.0).eval(&x);
        assert!(v.iter().all(|&vk| vk == 0.0));
        let v = Potential::point(5.0, 1000.0).eval(&x);
        assert!(v.iter().all(|&vk| vk == 0.0));
    }

    #[test]
    fn point_off_grid_beyond_tolerance_contributes_nothing() {
        let x = scale();
        // nearest coordinate is 50, which misses the default tolerance
        let v = Potential::point(5.0, 50.4).eval(&x);
        assert!(v.iter().all(|&vk| vk == 0.0));
    }

    #[test]
    fn barrier_covers_a_closed_interval() {
        let x = scale();
        let pot = Potential::barrier(2.0, 30.0, 5.0);
        let v = pot.eval(&x);
        for (xk, vk) in x.iter().zip(v.iter()) {
            let expected = if (xk - 30.0).abs() <= 5.0 { 2.0 } else { 0.0 };
            assert_eq!(*vk, expected, "barrier mismatch at x = {}", xk);
            assert_eq!(pot.eval_at(*xk), expected);
        }
        assert_eq!(v[25], 2.0);
        assert_eq!(v[35], 2.0);
        assert_eq!(v[24], 0.0);
        assert_eq!(v[36], 0.0);
    }

    #[test]
    fn step_is_nonzero_strictly_left_of_position() {
        let x = scale();
        let pot = Potential::step(3.0, 40.0);
        let v = pot.eval(&x);
        for (xk, vk) in x.iter().zip(v.iter()) {
            let expected = if *xk < 40.0 { 3.0 } else { 0.0 };
            assert_eq!(*vk, expected, "step mismatch at x = {}", xk);
            assert_eq!(pot.eval_at(*xk), expected);
        }
        assert_eq!(v[39], 3.0);
        assert_eq!(v[40], 0.0);
    }

    #[test]
    fn resolved_field_is_sum_of_contributions() {
        let x = scale();
        let pots = [
            Potential::Null,
            Potential::barrier(2.0, 30.0, 5.0),
            Potential::step(-1.0, 60.0),
            Potential::point(4.0, 80.0),
        ];
        let V = resolve(&pots, &x);
        let mut expected = ndarray::Array1::<f64>::zeros(x.len());
        for pot in pots.iter() { expected += &pot.eval(&x); }
        assert_eq!(V, expected);
        // spot-check superposition where shapes overlap
        assert_eq!(V[30], 2.0 - 1.0);
        assert_eq!(V[80], 4.0);
    }
}
