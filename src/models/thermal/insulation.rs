//! Insulation heat loss models.
//!
//! This module provides [`twine_core::Model`] implementations for steady-state
//! heat loss through multi-layer insulation following ASTM C-680.
//! The computational core is in the internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use twine_core::Model;
//! use twine_insulation::models::thermal::insulation::{
//!     Conditions, ExternalSurface, FlatInsulation, HeatFlow, Layer, LayerStack, Polynomial,
//! };
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::inch,
//!     thermodynamic_temperature::degree_fahrenheit,
//! };
//!
//! let material = Arc::new(Polynomial::constant(0.3).unwrap());
//! let layers = LayerStack::new(vec![
//!     Layer::new(Length::new::<inch>(1.0), material).unwrap(),
//! ])
//! .unwrap();
//!
//! let wall = FlatInsulation::new(layers, ExternalSurface::fixed(2.0).unwrap());
//! let conditions = Conditions::new(
//!     ThermodynamicTemperature::new::<degree_fahrenheit>(200.0),
//!     ThermodynamicTemperature::new::<degree_fahrenheit>(0.0),
//! )
//! .unwrap();
//!
//! let results = wall.call(&conditions).unwrap();
//! assert!(matches!(results.heat_flow, HeatFlow::PerArea(q) if (q - 52.173_913).abs() < 1e-4));
//! ```

pub(crate) mod core;

pub use self::core::{
    Action, Conditions, Conductivity, Event, Exponential, ExternalSurface, FlatOrientation,
    Geometry, GivenSurfaceTempConfig, GivenSurfaceTempError, HeatFlow, InputError,
    InsulationSystem, Layer, LayerResult, LayerStack, MaterialError, Orientation,
    PiecewiseLinear, PipeOrientation, Polynomial, Results, Segment, SolveError, SolverConfig,
    SurfaceCorrelation,
};

use twine_core::Model;
use uom::si::f64::Length;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Insulation on a flat wall.
///
/// Heat flow is reported per square foot of wall.
#[derive(Debug, Clone)]
pub struct FlatInsulation {
    system: InsulationSystem,
    config: SolverConfig,
}

impl FlatInsulation {
    /// Creates a flat wall model with the default solver configuration.
    #[must_use]
    pub fn new(layers: LayerStack, surface: ExternalSurface) -> Self {
        Self {
            system: InsulationSystem::flat(layers, surface),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the underlying insulation system.
    #[must_use]
    pub fn system(&self) -> &InsulationSystem {
        &self.system
    }
}

impl Model for FlatInsulation {
    type Input = Conditions;
    type Output = Results;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.system.solve(input, self.config)
    }
}

/// Insulation around a pipe.
///
/// Heat flow is reported per foot of pipe.
#[derive(Debug, Clone)]
pub struct PipeInsulation {
    system: InsulationSystem,
    config: SolverConfig,
}

impl PipeInsulation {
    /// Creates a pipe model with the default solver configuration.
    ///
    /// The outer diameter is that of the bare pipe, before any insulation.
    #[must_use]
    pub fn new(
        outer_diameter: Constrained<Length, StrictlyPositive>,
        layers: LayerStack,
        surface: ExternalSurface,
    ) -> Self {
        Self {
            system: InsulationSystem::pipe(outer_diameter, layers, surface),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the underlying insulation system.
    #[must_use]
    pub fn system(&self) -> &InsulationSystem {
        &self.system
    }
}

impl Model for PipeInsulation {
    type Input = Conditions;
    type Output = Results;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.system.solve(input, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{f64::consts::PI, sync::Arc};

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{ThermodynamicTemperature, Velocity},
        length::inch,
        thermodynamic_temperature::degree_fahrenheit,
        velocity::mile_per_hour,
    };

    fn fahrenheit(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(value)
    }

    fn one_inch(k: f64) -> LayerStack {
        let material = Arc::new(Polynomial::constant(k).unwrap());
        LayerStack::new(vec![
            Layer::new(Length::new::<inch>(1.0), material).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn flat_reports_per_area() {
        let wall = FlatInsulation::new(one_inch(0.3), ExternalSurface::fixed(2.0).unwrap());
        let conditions = Conditions::new(fahrenheit(200.0), fahrenheit(0.0)).unwrap();

        let results = wall.call(&conditions).unwrap();

        assert!(matches!(results.heat_flow, HeatFlow::PerArea(_)));
        assert_relative_eq!(
            results.heat_flow.value(),
            200.0 / (0.5 + 1.0 / 0.3),
            epsilon = 1e-9
        );
    }

    #[test]
    fn pipe_reports_per_length() {
        let surface = SurfaceCorrelation::new(
            Velocity::new::<mile_per_hour>(0.0),
            0.9,
            PipeOrientation::Horizontal,
        )
        .unwrap();
        let pipe = PipeInsulation::new(
            StrictlyPositive::new(Length::new::<inch>(2.375)).unwrap(),
            one_inch(0.3),
            surface.into(),
        );
        let conditions = Conditions::new(fahrenheit(350.0), fahrenheit(75.0)).unwrap();

        let results = pipe.call(&conditions).unwrap();

        let HeatFlow::PerLength(per_foot) = results.heat_flow else {
            panic!("Expected per-length heat flow, got: {:?}", results.heat_flow);
        };
        assert_relative_eq!(
            per_foot,
            results.surface_flux * PI * 4.375 / 12.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn config_is_applied() {
        let wall = FlatInsulation::new(one_inch(0.3), ExternalSurface::fixed(2.0).unwrap())
            .with_config(SolverConfig {
                max_iters: 1,
                ..SolverConfig::default()
            });
        let conditions = Conditions::new(fahrenheit(200.0), fahrenheit(0.0)).unwrap();

        assert!(matches!(
            wall.call(&conditions),
            Err(SolveError::MaxIters { iters: 1, .. })
        ));
    }
}
