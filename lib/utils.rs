//! Miscellaneous array tools shared by the integrator and its tests.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;
use crate::Arr1;

/// Compute the probability density `r² + i²` from component arrays.
///
/// *Panics if the arrays have unequal lengths.*
pub fn prob_density<S, T>(re: &Arr1<S>, im: &Arr1<T>) -> nd::Array1<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    nd::Zip::from(re).and(im)
        .map_collect(|rk, ik| rk * rk + ik * ik)
}

/// Compute the probability mass of a sampled density as the Riemann sum
/// `dx · Σ y`.
pub fn wf_mass<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    dx * y.sum()
}

/// Divide an array by a scalar in place.
pub fn wf_rescale<S, A>(y: &mut nd::ArrayBase<S, Ix1>, norm: A)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    y.iter_mut().for_each(|yk| { *yk = *yk / norm; });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn density_is_sum_of_squares() {
        let re = array![1.0, 0.0, -2.0];
        let im = array![0.0, 3.0, 2.0];
        let p = prob_density(&re, &im);
        assert_eq!(p, array![1.0, 9.0, 8.0]);
    }

    #[test]
    fn mass_is_riemann_sum() {
        let y = array![1.0, 2.0, 3.0, 4.0];
        approx::assert_abs_diff_eq!(wf_mass(&y, 0.5), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn rescale_divides_in_place() {
        let mut y = array![2.0, 4.0, 8.0];
        wf_rescale(&mut y, 2.0);
        assert_eq!(y, array![1.0, 2.0, 4.0]);
    }
}
