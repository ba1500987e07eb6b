//! ASTM C-680 heat balance for multi-layer insulation.
//!
//! An insulation system is a stack of layers on a flat wall or around a pipe,
//! exposed on the outside to ambient air through a surface coefficient.
//! Layer conductivities depend on temperature, so the interface temperatures
//! and heat flow are found together by fixed-point iteration.

mod config;
mod given_surface_temp;
mod input;
mod material;
mod results;
mod solve;
mod surface;

#[cfg(test)]
mod test_support;

pub use config::SolverConfig;
pub use given_surface_temp::{GivenSurfaceTempConfig, GivenSurfaceTempError};
pub use input::{Conditions, Geometry, InputError, Layer, LayerStack};
pub use material::{
    Conductivity, Exponential, MaterialError, PiecewiseLinear, Polynomial, Segment,
};
pub use results::{HeatFlow, LayerResult, Results};
pub use solve::{Action, Event, SolveError};
pub use surface::{
    ExternalSurface, FlatOrientation, Orientation, PipeOrientation, SurfaceCorrelation,
};

use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, StrictlyPositive};

use given_surface_temp::given_surface_temp;
use solve::solve;

/// Entry point for solving an insulation system.
///
/// Holds everything about the installation that does not change with
/// operating conditions, so one system can be solved repeatedly or shared
/// between threads.
#[derive(Debug, Clone)]
pub struct InsulationSystem {
    geometry: Geometry,
    layers: LayerStack,
    surface: ExternalSurface,
}

impl InsulationSystem {
    /// Creates insulation on a flat wall.
    #[must_use]
    pub fn flat(layers: LayerStack, surface: ExternalSurface) -> Self {
        Self {
            geometry: Geometry::Flat,
            layers,
            surface,
        }
    }

    /// Creates insulation around a pipe with the given outer diameter.
    #[must_use]
    pub fn pipe(
        outer_diameter: Constrained<Length, StrictlyPositive>,
        layers: LayerStack,
        surface: ExternalSurface,
    ) -> Self {
        Self {
            geometry: Geometry::Pipe { outer_diameter },
            layers,
            surface,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    #[must_use]
    pub fn surface(&self) -> &ExternalSurface {
        &self.surface
    }

    /// Returns a copy of this system with the outermost layer's thickness replaced.
    #[must_use]
    pub fn with_outer_thickness(&self, thickness: Constrained<Length, StrictlyPositive>) -> Self {
        Self {
            geometry: self.geometry,
            layers: self.layers.with_outer_thickness(thickness),
            surface: self.surface,
        }
    }

    /// Solves the heat balance for the given operating conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the inputs are invalid, a material produces
    /// a non-physical conductivity, or the iteration does not converge.
    pub fn solve(
        &self,
        conditions: &Conditions,
        config: SolverConfig,
    ) -> Result<Results, SolveError> {
        self.solve_with_observer(conditions, config, |_| None)
    }

    /// Solves the heat balance, calling `observer` after every pass that has
    /// not yet converged.
    ///
    /// Returning [`Action::Stop`] abandons the solve with
    /// [`SolveError::Stopped`]. An observer that never stops does not change
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] as for [`InsulationSystem::solve`], or
    /// [`SolveError::Stopped`] if the observer stops the iteration.
    pub fn solve_with_observer(
        &self,
        conditions: &Conditions,
        config: SolverConfig,
        observer: impl FnMut(&Event<'_>) -> Option<Action>,
    ) -> Result<Results, SolveError> {
        solve(
            conditions,
            &self.geometry,
            &self.layers,
            &self.surface,
            config,
            observer,
        )
    }

    /// Sizes the outermost layer so the outer surface reaches `target`.
    ///
    /// Iterates on the outermost layer's thickness within the configured
    /// bracket; all other layers are kept as given.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenSurfaceTempError`] if the target is not between the
    /// service and ambient temperatures, a heat balance fails, or the solver
    /// fails to converge.
    pub fn given_surface_temp(
        &self,
        conditions: &Conditions,
        target: ThermodynamicTemperature,
        config: GivenSurfaceTempConfig,
    ) -> Result<Results, GivenSurfaceTempError> {
        given_surface_temp(self, conditions, target, config)
    }
}
