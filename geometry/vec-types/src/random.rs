//! Random direction sampling.

use rand::Rng;

use crate::Vector;

impl Vector {
    /// Random 2D vector with length in `[0, 1]`, or rescaled to `length`.
    ///
    /// Samples uniformly in the unit disk by rejection. `rand01` is any
    /// source of uniform values in `[0, 1)`; pass a closure over a seeded
    /// generator for reproducibility.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::{Rng, SeedableRng};
    /// use vec_types::Vector;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let v = Vector::random_2d_with(Some(2.0), || rng.gen());
    /// assert!((v.length() - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn random_2d_with(length: Option<f64>, mut rand01: impl FnMut() -> f64) -> Self {
        let mut v = Self::two(rand01() * 2.0 - 1.0, rand01() * 2.0 - 1.0);
        while v.length() > 1.0 {
            v = Self::two(rand01() * 2.0 - 1.0, rand01() * 2.0 - 1.0);
        }
        if let Some(l) = length {
            v.set_length(l);
        }
        v
    }

    /// [`random_2d_with`](Self::random_2d_with) using the thread-local generator.
    #[must_use]
    pub fn random_2d(length: Option<f64>) -> Self {
        let mut rng = rand::thread_rng();
        Self::random_2d_with(length, move || rng.gen())
    }

    /// Random 3D vector with length in `[0, 1]`, or rescaled to `length`.
    ///
    /// Samples uniformly in the unit ball by rejection.
    #[must_use]
    pub fn random_3d_with(length: Option<f64>, mut rand01: impl FnMut() -> f64) -> Self {
        let mut v = Self::three(
            rand01() * 2.0 - 1.0,
            rand01() * 2.0 - 1.0,
            rand01() * 2.0 - 1.0,
        );
        while v.length() > 1.0 {
            v = Self::three(
                rand01() * 2.0 - 1.0,
                rand01() * 2.0 - 1.0,
                rand01() * 2.0 - 1.0,
            );
        }
        if let Some(l) = length {
            v.set_length(l);
        }
        v
    }

    /// [`random_3d_with`](Self::random_3d_with) using the thread-local generator.
    #[must_use]
    pub fn random_3d(length: Option<f64>) -> Self {
        let mut rng = rand::thread_rng();
        Self::random_3d_with(length, move || rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    fn source(seed: u64) -> impl FnMut() -> f64 {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        move || rng.gen()
    }

    #[test]
    fn random_2d_stays_in_unit_disk() {
        let mut rand01 = source(42);
        for _ in 0..100 {
            let v = Vector::random_2d_with(None, &mut rand01);
            assert_eq!(v.dimension(), Dimension::TwoD);
            assert!(v.length() <= 1.0);
        }
    }

    #[test]
    fn random_3d_stays_in_unit_ball() {
        let mut rand01 = source(42);
        for _ in 0..100 {
            let v = Vector::random_3d_with(None, &mut rand01);
            assert_eq!(v.dimension(), Dimension::ThreeD);
            assert!(v.length() <= 1.0);
        }
    }

    #[test]
    fn requested_length_is_exact() {
        let mut rand01 = source(7);
        let v = Vector::random_2d_with(Some(3.0), &mut rand01);
        assert_relative_eq!(v.length(), 3.0, epsilon = 1e-12);

        let v = Vector::random_3d_with(Some(0.5), &mut rand01);
        assert_relative_eq!(v.length(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn same_seed_same_vector() {
        let a = Vector::random_3d_with(None, source(123));
        let b = Vector::random_3d_with(None, source(123));
        assert_eq!(a, b);
    }
}
