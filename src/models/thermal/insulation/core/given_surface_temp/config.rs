use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::inch,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

use crate::models::thermal::insulation::core::SolverConfig;

/// Solver configuration for sizing the outermost layer.
#[derive(Debug, Clone, Copy)]
pub struct GivenSurfaceTempConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the outer layer thickness.
    pub thickness_tol: Length,

    /// Absolute tolerance for the surface temperature residual (achieved - target).
    pub temp_tol: TemperatureInterval,

    /// Thinnest outer layer considered.
    pub min_thickness: Length,

    /// Thickest outer layer considered.
    pub max_thickness: Length,

    /// Settings for each inner heat balance.
    pub solver: SolverConfig,
}

impl Default for GivenSurfaceTempConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            thickness_tol: Length::new::<inch>(1e-6),
            temp_tol: TemperatureInterval::new::<delta_fahrenheit>(1e-4),
            min_thickness: Length::new::<inch>(0.01),
            max_thickness: Length::new::<inch>(24.0),
            solver: SolverConfig::default(),
        }
    }
}

impl GivenSurfaceTempConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.thickness_tol.get::<inch>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_fahrenheit>(),
        }
    }

    /// Returns the thickness bracket in inches.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [
            self.min_thickness.get::<inch>(),
            self.max_thickness.get::<inch>(),
        ]
    }
}
