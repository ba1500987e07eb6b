use crate::support::constraint::{Constrained, NonZero};

use super::{Conductivity, MaterialError};

/// Conductivity whose logarithm is linear in temperature.
///
/// ```text
/// ln k(T) = a + b·T
/// k_avg   = (e^(a + b·T2) − e^(a + b·T1)) / (b·(T2 − T1))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    a: f64,
    b: Constrained<f64, NonZero>,
}

impl Exponential {
    /// Creates an exponential curve `ln k = a + b·T`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if `a` is not finite or `b` is zero, infinite, or NaN.
    pub fn new(a: f64, b: f64) -> Result<Self, MaterialError> {
        MaterialError::check_finite(&[a, b])?;
        Ok(Self {
            a,
            b: NonZero::new(b)?,
        })
    }

    fn slope(&self) -> f64 {
        self.b.into_inner()
    }
}

impl Conductivity for Exponential {
    fn conductivity(&self, t: f64) -> f64 {
        (self.a + self.slope() * t).exp()
    }

    fn mean_conductivity(&self, t1: f64, t2: f64) -> f64 {
        if t1 == t2 {
            return self.conductivity(t1);
        }
        (self.conductivity(t2) - self.conductivity(t1)) / (self.slope() * (t2 - t1))
    }
}
