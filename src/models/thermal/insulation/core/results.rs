//! Results of an insulation heat balance.

use uom::si::f64::{Length, ThermodynamicTemperature};

use super::{Conditions, ExternalSurface, Geometry};

/// Steady-state heat loss, with the basis made explicit.
///
/// Positive values mean heat flows from the service side to ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    /// Heat flux through a flat wall, Btu/(h·ft²).
    PerArea(f64),

    /// Heat loss per foot of pipe, Btu/(h·ft).
    PerLength(f64),
}

impl HeatFlow {
    /// Returns the value regardless of basis.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::PerArea(q) | Self::PerLength(q) => q,
        }
    }
}

/// One row of the per-layer table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerResult {
    pub thickness: Length,

    /// Mean conductivity over the layer, Btu·in/(h·ft²·°F).
    pub conductivity: f64,

    /// Thermal resistance referenced to the outer surface, h·ft²·°F/Btu.
    pub resistance: f64,

    /// Temperature on the service side of the layer.
    pub inside: ThermodynamicTemperature,

    /// Temperature on the ambient side of the layer.
    pub outside: ThermodynamicTemperature,
}

/// Converged heat balance of an insulation system.
///
/// Inputs are echoed back so a report can be produced from the results alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub conditions: Conditions,
    pub geometry: Geometry,
    pub surface: ExternalSurface,

    /// Total heat loss: per area for flat walls, per foot for pipes.
    pub heat_flow: HeatFlow,

    /// Heat flux through the outer surface, Btu/(h·ft²).
    pub surface_flux: f64,

    /// Outer-surface coefficient from the final pass, Btu/(h·ft²·°F).
    pub surface_coefficient: f64,

    /// Surface plus layer resistances, h·ft²·°F/Btu.
    pub total_resistance: f64,

    /// Per-layer results, innermost first.
    pub layers: Vec<LayerResult>,

    /// Passes needed to converge.
    pub iters: usize,
}

impl Results {
    /// Returns the interface temperatures from the service side outward.
    ///
    /// The list has one more entry than there are layers; the first is the
    /// service temperature and the last is the outer surface.
    #[must_use]
    pub fn interface_temperatures(&self) -> Vec<ThermodynamicTemperature> {
        std::iter::once(self.conditions.service())
            .chain(self.layers.iter().map(|layer| layer.outside))
            .collect()
    }

    /// Returns the outer-surface temperature.
    #[must_use]
    pub fn surface_temperature(&self) -> ThermodynamicTemperature {
        self.layers
            .last()
            .map_or(self.conditions.service(), |layer| layer.outside)
    }
}
