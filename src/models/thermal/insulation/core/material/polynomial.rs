use super::{Conductivity, MaterialError};

/// Conductivity given by a polynomial in temperature.
///
/// ```text
/// k(T) = c0 + c1·T + c2·T² + … + cn·Tⁿ
/// ```
///
/// The mean over `[T1, T2]` is the exact integral average:
///
/// ```text
/// k_avg = Σ cᵢ·(T2^(i+1) − T1^(i+1)) / (i+1) / (T2 − T1)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial curve from coefficients ordered `c0, c1, …, cn`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if no coefficients are given or any is not finite.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, MaterialError> {
        if coefficients.is_empty() {
            return Err(MaterialError::NoCoefficients);
        }
        MaterialError::check_finite(&coefficients)?;
        Ok(Self { coefficients })
    }

    /// Creates a temperature-independent curve.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if `k` is not finite.
    pub fn constant(k: f64) -> Result<Self, MaterialError> {
        Self::new(vec![k])
    }

    /// Returns the coefficients ordered from the constant term upward.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Conductivity for Polynomial {
    fn conductivity(&self, t: f64) -> f64 {
        // Horner's rule, highest order first.
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    fn mean_conductivity(&self, t1: f64, t2: f64) -> f64 {
        if t1 == t2 {
            return self.conductivity(t1);
        }

        let integral: f64 = (1..)
            .zip(&self.coefficients)
            .map(|(power, c)| c * (t2.powi(power) - t1.powi(power)) / f64::from(power))
            .sum();

        integral / (t2 - t1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constant_mean_is_the_constant() {
        let material = Polynomial::constant(0.3).unwrap();

        for (t1, t2) in [(200.0, 0.0), (-40.0, 75.0), (1000.0, 999.5)] {
            assert_relative_eq!(material.mean_conductivity(t1, t2), 0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_mean_is_midpoint_value() {
        let material = Polynomial::new(vec![0.25, 5e-4]).unwrap();

        // For a linear curve the integral mean equals k at the midpoint.
        let expected = material.conductivity(150.0);
        assert_relative_eq!(
            material.mean_conductivity(100.0, 200.0),
            expected,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            material.mean_conductivity(200.0, 100.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn quadratic_mean_matches_integral() {
        let material = Polynomial::new(vec![0.2, 1e-4, 2e-7]).unwrap();

        // ∫0^300 (0.2 + 1e-4 T + 2e-7 T²) dT = 60 + 4.5 + 1.8
        let expected = (60.0 + 4.5 + 1.8) / 300.0;
        assert_relative_eq!(
            material.mean_conductivity(0.0, 300.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn equal_temperatures_use_point_value() {
        let material = Polynomial::new(vec![0.2, 1e-3]).unwrap();
        assert_relative_eq!(
            material.mean_conductivity(100.0, 100.0),
            0.3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_bad_coefficients() {
        assert_eq!(Polynomial::new(vec![]), Err(MaterialError::NoCoefficients));
        assert!(matches!(
            Polynomial::new(vec![0.2, f64::NAN]),
            Err(MaterialError::NonFinite { index: 1, .. })
        ));
    }
}
