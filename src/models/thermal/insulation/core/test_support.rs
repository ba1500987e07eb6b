use std::sync::Arc;

use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::inch,
    thermodynamic_temperature::degree_fahrenheit,
};

use super::{Conductivity, Layer, LayerStack, Polynomial};

pub(super) fn constant(k: f64) -> Arc<dyn Conductivity> {
    Arc::new(Polynomial::constant(k).expect("conductivity should be finite"))
}

pub(super) fn inches(value: f64) -> Length {
    Length::new::<inch>(value)
}

pub(super) fn fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}

pub(super) fn single_layer(thickness: f64, material: Arc<dyn Conductivity>) -> LayerStack {
    let layer = Layer::new(inches(thickness), material).expect("thickness should be positive");
    LayerStack::new(vec![layer]).expect("stack should not be empty")
}

/// Material whose conductivity drops sharply once the layer mean exceeds 150 °F.
///
/// A single flat layer between 200 °F and 0 °F flips between two profiles
/// and never settles.
#[derive(Debug)]
pub(super) struct Collapsing;

impl Conductivity for Collapsing {
    fn conductivity(&self, t: f64) -> f64 {
        if t > 150.0 { 1e-3 } else { 10.0 }
    }

    fn mean_conductivity(&self, t1: f64, t2: f64) -> f64 {
        self.conductivity(0.5 * (t1 + t2))
    }
}
