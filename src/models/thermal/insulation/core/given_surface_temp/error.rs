use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::models::thermal::insulation::core::SolveError;

/// Errors that can occur while sizing insulation for a target surface temperature.
#[derive(Debug, Error)]
pub enum GivenSurfaceTempError {
    /// The target is not strictly between the ambient and service temperatures.
    #[error("target surface temperature {target:?} is not reachable")]
    Unreachable { target: ThermodynamicTemperature },

    /// The thickness bracket is empty or not strictly positive.
    #[error("invalid thickness bracket: {min:?} to {max:?}")]
    Bracket { min: Length, max: Length },

    /// A heat balance solve failed.
    #[error("heat balance solve failed")]
    Solve(#[from] SolveError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best surface temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
