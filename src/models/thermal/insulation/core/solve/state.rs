use std::f64::consts::PI;

use crate::models::thermal::insulation::core::{
    Geometry, InputError, LayerStack, input::Diameters, surface::SurfaceModel,
};

use super::SolveError;

/// Working arrays of one solve, in °F, Btu·in/(h·ft²·°F), and h·ft²·°F/Btu.
///
/// `t` has one more entry than there are layers: `t[0]` is the service
/// temperature and `t[i + 1]` is the outside of layer `i`.
#[derive(Debug, Clone)]
pub(super) struct State {
    pub(super) t: Vec<f64>,
    pub(super) k: Vec<f64>,
    pub(super) r: Vec<f64>,
    pub(super) r_total: f64,
    pub(super) q: f64,
    pub(super) h: f64,
}

/// Fixed quantities shared by every pass.
pub(super) struct Network<'a> {
    pub(super) layers: &'a LayerStack,
    pub(super) geometry: &'a Geometry,
    pub(super) diameters: Diameters,
    pub(super) surface: SurfaceModel,
    pub(super) service: f64,
    pub(super) ambient: f64,
}

impl State {
    /// Starts from a linear temperature drop split by thickness fraction.
    pub(super) fn new(network: &Network<'_>) -> Self {
        let layers = network.layers.layers();
        let total: f64 = layers.iter().map(|layer| layer.thickness_in()).sum();
        let drop = network.service - network.ambient;

        let mut t = Vec::with_capacity(layers.len() + 1);
        t.push(network.service);
        let mut current = network.service;
        for layer in layers {
            current -= layer.thickness_in() / total * drop;
            t.push(current);
        }

        Self {
            t,
            k: vec![0.0; layers.len()],
            r: vec![0.0; layers.len()],
            r_total: 0.0,
            q: 0.0,
            h: 0.0,
        }
    }

    /// Checks every layer's conductivity over the starting profile.
    pub(super) fn check_initial(&self, network: &Network<'_>) -> Result<(), InputError> {
        for (i, layer) in network.layers.layers().iter().enumerate() {
            let k = layer.material().mean_conductivity(self.t[i], self.t[i + 1]);
            if !is_physical(k) {
                return Err(InputError::NonPositiveConductivity {
                    layer: i,
                    conductivity: k,
                });
            }
        }
        Ok(())
    }

    /// Performs one Gauss-Seidel pass and returns the summed temperature change.
    ///
    /// Resistances come from the current profile; the profile is then
    /// updated layer by layer, each layer using the just-updated inside
    /// temperature of the layer before it.
    pub(super) fn pass(&mut self, network: &Network<'_>) -> Result<f64, SolveError> {
        let n = network.layers.len();

        self.h = network.surface.coefficient(self.t[n], network.ambient);
        self.r_total = 1.0 / self.h;

        for (i, layer) in network.layers.layers().iter().enumerate() {
            let k = layer.material().mean_conductivity(self.t[i], self.t[i + 1]);
            if !is_physical(k) {
                return Err(SolveError::NonPhysicalConductivity {
                    layer: i,
                    conductivity: k,
                });
            }

            self.k[i] = k;
            self.r[i] = match network.geometry {
                Geometry::Flat => layer.thickness_in() / k,
                Geometry::Pipe { .. } => {
                    let diameters = &network.diameters;
                    let ratio = (diameters.outer[i] / diameters.inner[i]).ln();
                    diameters.outermost() / 2.0 * ratio / k
                }
            };
            self.r_total += self.r[i];
        }

        self.q = (network.service - network.ambient) / self.r_total;

        let mut residual = 0.0;
        for i in 0..n {
            let next = self.t[i] - self.q * self.r[i];
            residual += (self.t[i + 1] - next).abs();
            self.t[i + 1] = next;
        }

        Ok(residual)
    }

    /// Heat loss per foot of pipe, from the outer-surface flux.
    pub(super) fn per_length(&self, network: &Network<'_>) -> f64 {
        self.q * PI * network.diameters.outermost() / 12.0
    }
}

fn is_physical(k: f64) -> bool {
    k.is_finite() && k > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::insulation::core::{
        ExternalSurface, Layer,
        test_support::{constant, inches},
    };

    fn network<'a>(layers: &'a LayerStack, geometry: &'a Geometry, h: f64) -> Network<'a> {
        Network {
            layers,
            geometry,
            diameters: Diameters::new(geometry, layers),
            surface: ExternalSurface::fixed(h).unwrap().resolve(None).unwrap(),
            service: 300.0,
            ambient: 100.0,
        }
    }

    #[test]
    fn initial_profile_is_split_by_thickness() {
        let layers = LayerStack::new(vec![
            Layer::new(inches(1.0), constant(0.3)).unwrap(),
            Layer::new(inches(3.0), constant(0.3)).unwrap(),
        ])
        .unwrap();
        let geometry = Geometry::Flat;
        let state = State::new(&network(&layers, &geometry, 2.0));

        assert_relative_eq!(state.t[0], 300.0);
        assert_relative_eq!(state.t[1], 250.0, epsilon = 1e-12);
        assert_relative_eq!(state.t[2], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn pass_updates_in_place() {
        let layers = LayerStack::new(vec![
            Layer::new(inches(1.0), constant(0.5)).unwrap(),
            Layer::new(inches(1.0), constant(0.25)).unwrap(),
        ])
        .unwrap();
        let geometry = Geometry::Flat;
        let network = network(&layers, &geometry, 1.0);
        let mut state = State::new(&network);

        let residual = state.pass(&network).unwrap();

        // R = [2, 4], surface 1, so Q = 200 / 7.
        let q = 200.0 / 7.0;
        assert_relative_eq!(state.q, q, epsilon = 1e-12);
        assert_relative_eq!(state.t[1], 300.0 - 2.0 * q, epsilon = 1e-12);
        assert_relative_eq!(state.t[2], 300.0 - 6.0 * q, epsilon = 1e-12);
        assert_relative_eq!(
            residual,
            (200.0 - state.t[1]).abs() + (100.0 - state.t[2]).abs(),
            epsilon = 1e-12
        );
    }
}
