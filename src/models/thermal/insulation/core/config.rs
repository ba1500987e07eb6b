use uom::si::{
    f64::TemperatureInterval, temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

/// Fixed-point iteration settings for the heat balance.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Maximum number of full passes over the layer stack.
    pub max_iters: usize,

    /// Convergence threshold for the summed change in interface temperatures
    /// over one pass.
    pub tolerance: TemperatureInterval,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 2000,
            tolerance: TemperatureInterval::new::<delta_fahrenheit>(1e-5),
        }
    }
}

impl SolverConfig {
    /// Tolerance in °F, the unit the iteration works in.
    pub(super) fn tolerance_f(&self) -> f64 {
        self.tolerance.get::<delta_fahrenheit>()
    }
}
