use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::models::thermal::insulation::core::InputError;

/// Errors that can occur while solving an insulation heat balance.
///
/// No partial results are returned; every variant means the temperature
/// profile should not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The inputs were rejected before iterating.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// A material returned a zero, negative, or NaN conductivity for the
    /// temperatures reached during iteration.
    #[error("layer {layer} conductivity is non-physical: {conductivity}")]
    NonPhysicalConductivity { layer: usize, conductivity: f64 },

    /// The iteration limit was reached without converging.
    ///
    /// This usually points to a modeling problem, such as a conductivity curve
    /// that is unstable over the temperatures involved.
    #[error("heat balance did not converge: residual={residual:?}")]
    MaxIters {
        /// Summed interface temperature change during the final pass.
        residual: TemperatureInterval,

        /// Passes performed.
        iters: usize,
    },

    /// An observer stopped the iteration.
    #[error("stopped by observer after {iters} iterations")]
    Stopped { iters: usize },
}
