//! Cubic Hermite evaluation for one set of boundary conditions.

use crate::basis::{Basis, Hermite};
use num_traits::Float;

/// Boundary conditions of a cubic Hermite easing curve.
///
/// The curve starts at position `p0` with velocity `v0` and ends at
/// position `p1` with velocity `v1`. Fields are named so callers can't
/// swap a position for a velocity by argument order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HermiteParams<T = f64> {
    /// Start position.
    pub p0: T,
    /// Start velocity (tangent).
    pub v0: T,
    /// End position.
    pub p1: T,
    /// End velocity (tangent).
    pub v1: T,
}

impl<T> HermiteParams<T> {
    pub const fn new(p0: T, v0: T, p1: T, v1: T) -> Self {
        Self { p0, v0, p1, v1 }
    }
}

impl<T> HermiteParams<T>
where
    T: Float,
    Hermite: Basis<T>,
{
    /// Evaluates the curve at `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the cubic.
    #[inline]
    pub fn eval(&self, t: T) -> T {
        let [h00, h10, h01, h11] = <Hermite as Basis<T>>::weights(t);
        h00 * self.p0 + h10 * self.v0 + h01 * self.p1 + h11 * self.v1
    }

    /// Evaluates the first derivative of the curve at `t`.
    ///
    /// At `t = 0` this is `v0` and at `t = 1` it is `v1`.
    pub fn velocity(&self, t: T) -> T {
        let [a, b, c, _] = self.coefficients();
        let two = T::one() + T::one();
        let three = two + T::one();
        (three * a * t + two * b) * t + c
    }

    /// Returns the power-form coefficients `[a, b, c, d]` of
    /// *a·t³ + b·t² + c·t + d*.
    pub fn coefficients(&self) -> [T; 4] {
        let m = <Hermite as Basis<T>>::MATRIX;
        let cv = [self.p0, self.v0, self.p1, self.v1];
        m.map(|row| {
            cv.iter()
                .zip(row.iter())
                .fold(T::zero(), |total, (cv, basis)| total + *cv * *basis)
        })
    }

    /// Returns these boundary conditions with every parameter multiplied
    /// by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self {
            p0: self.p0 * k,
            v0: self.v0 * k,
            p1: self.p1 * k,
            v1: self.v1 * k,
        }
    }
}

/// Evaluates the cubic Hermite curve described by `params` at every
/// value in `t`.
///
/// The result has the same length and order as `t`. Evaluation is
/// element-wise and pure; non-finite inputs yield non-finite outputs.
///
/// # Examples
/// ```
/// use hermite_easing::{evaluate_hermite, HermiteParams};
///
/// let smooth = HermiteParams::new(0.0, 0.0, 1.0, 0.0);
/// assert_eq!(evaluate_hermite(&[0.0, 0.5, 1.0], &smooth), [0.0, 0.5, 1.0]);
/// ```
pub fn evaluate_hermite(t: &[f64], params: &HermiteParams) -> Vec<f64> {
    t.iter().map(|&t| params.eval(t)).collect()
}

/// Like [`evaluate_hermite()`] but reuses `out`.
///
/// `out` is cleared first and ends up with one value per element of `t`.
pub fn evaluate_hermite_into(
    t: &[f64],
    params: &HermiteParams,
    out: &mut Vec<f64>,
) {
    out.clear();
    out.extend(t.iter().map(|&t| params.eval(t)));
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUMP: HermiteParams = HermiteParams::new(0.0, 4.0, 0.0, -4.0);

    #[test]
    fn bump_endpoints_vanish() {
        assert_eq!(evaluate_hermite(&[0.0, 1.0], &BUMP), [0.0, 0.0]);
        assert_eq!(BUMP.eval(0.5), 1.0);
    }

    #[test]
    fn velocity_matches_boundary_tangents() {
        let p = HermiteParams::new(0.0, 3.0, 1.0, -0.25);
        assert_eq!(p.velocity(0.0), 3.0);
        assert_eq!(p.velocity(1.0), -0.25);
    }

    #[test]
    fn coefficients_reproduce_eval() {
        let p = HermiteParams::new(0.0, -0.8, 1.0, -0.8);
        let [a, b, c, d] = p.coefficients();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let horner = ((a * t + b) * t + c) * t + d;
            assert!((horner - p.eval(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let linear = HermiteParams::new(0.0f64, 1.0, 1.0, 1.0);
        assert!((linear.eval(2.0) - 2.0).abs() < 1e-12);
        assert!((linear.eval(-1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_propagates() {
        let smooth = HermiteParams::new(0.0, 0.0, 1.0, 0.0);
        let out = evaluate_hermite(&[f64::NAN, f64::INFINITY], &smooth);
        assert!(out.iter().all(|y| !y.is_finite()));
    }

    #[test]
    fn into_reuses_buffer() {
        let mut out = vec![9.0; 7];
        evaluate_hermite_into(&[0.0, 1.0], &BUMP, &mut out);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn single_precision() {
        let p = HermiteParams::new(0.0f32, 0.0, 1.0, 0.0);
        assert_eq!(p.eval(0.5), 0.5);
    }
}
