use num_traits::Float;

/// A cubic spline basis over the control values `p0`, `v0`, `p1`, `v1`.
pub trait Basis<T: Float> {
    /// Power-form coefficient matrix.
    ///
    /// `MATRIX[row][k]` is the coefficient of *t³⁻ʳᵒʷ* in the weight of
    /// control value `k`.
    const MATRIX: [[T; 4]; 4];

    /// Returns the four basis weights at `t`, in control value order.
    ///
    /// The weights are evaluated term by term rather than through
    /// [`MATRIX`](Basis::MATRIX) so results match the reference
    /// formula bit for bit.
    fn weights(t: T) -> [T; 4];
}

/// The cubic *Hermite* basis.
///
/// * *h₀₀(t) = 2t³ − 3t² + 1*
/// * *h₁₀(t) = t³ − 2t² + t*
/// * *h₀₁(t) = −2t³ + 3t²*
/// * *h₁₁(t) = t³ − t²*
///
/// # Examples
/// ```
/// use hermite_easing::basis::{Basis, Hermite};
///
/// assert_eq!(Hermite::weights(0.5f64), [0.5, 0.125, 0.5, -0.125]);
/// ```
pub struct Hermite;

hermite_basis!(f64);
hermite_basis!(f32);

#[cfg(test)]
mod tests {
    use super::*;

    fn from_matrix(t: f64) -> [f64; 4] {
        let m = <Hermite as Basis<f64>>::MATRIX;
        let mut w = [0.0; 4];
        for (k, weight) in w.iter_mut().enumerate() {
            *weight = ((m[0][k] * t + m[1][k]) * t + m[2][k]) * t + m[3][k];
        }
        w
    }

    #[test]
    fn weights_agree_with_matrix() {
        for i in 0..=64 {
            let t = i as f64 / 64.0;
            let direct = Hermite::weights(t);
            let power = from_matrix(t);
            for k in 0..4 {
                assert!((direct[k] - power[k]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn weights_at_ends() {
        assert_eq!(Hermite::weights(0.0f64), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Hermite::weights(1.0f64), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn position_weights_partition_unity() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let [h00, _, h01, _] = Hermite::weights(t);
            assert!((h00 + h01 - 1.0).abs() < 1e-6);
        }
    }
}
