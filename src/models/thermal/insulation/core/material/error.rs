use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while defining a conductivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MaterialError {
    /// A polynomial curve was given no coefficients.
    #[error("polynomial conductivity requires at least one coefficient")]
    NoCoefficients,

    /// A curve parameter is infinite or NaN.
    #[error("curve parameter {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The exponential slope is zero or NaN.
    #[error("invalid exponential slope")]
    Slope(#[from] ConstraintError),

    /// The lower breakpoint of a piecewise curve exceeds the upper one.
    #[error("breakpoints out of order: lower={lower}, upper={upper}")]
    Breakpoints { lower: f64, upper: f64 },
}

impl MaterialError {
    /// Checks that every parameter is finite, reporting the first offender.
    pub(super) fn check_finite(values: &[f64]) -> Result<(), Self> {
        match values.iter().position(|value| !value.is_finite()) {
            Some(index) => Err(Self::NonFinite {
                index,
                value: values[index],
            }),
            None => Ok(()),
        }
    }
}
