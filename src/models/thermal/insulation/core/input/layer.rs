use std::sync::Arc;

use uom::si::{f64::Length, length::inch};

use crate::{
    models::thermal::insulation::core::Conductivity,
    support::constraint::{Constrained, StrictlyPositive},
};

use super::InputError;

/// One insulation layer: a thickness and a shared material.
///
/// Materials are reference counted so one material definition can be reused
/// by several layers, stacks, and threads.
#[derive(Debug, Clone)]
pub struct Layer {
    thickness: Constrained<Length, StrictlyPositive>,
    material: Arc<dyn Conductivity>,
}

impl Layer {
    /// Creates a layer.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not finite and strictly positive.
    pub fn new(thickness: Length, material: Arc<dyn Conductivity>) -> Result<Self, InputError> {
        if !thickness.is_finite() {
            return Err(InputError::NonFinite {
                input: "layer thickness",
            });
        }
        let thickness = StrictlyPositive::new(thickness).map_err(InputError::Thickness)?;
        Ok(Self::from_constrained(thickness, material))
    }

    /// Creates a layer from a pre-validated thickness.
    #[must_use]
    pub fn from_constrained(
        thickness: Constrained<Length, StrictlyPositive>,
        material: Arc<dyn Conductivity>,
    ) -> Self {
        Self {
            thickness,
            material,
        }
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness.into_inner()
    }

    #[must_use]
    pub fn material(&self) -> &dyn Conductivity {
        self.material.as_ref()
    }

    /// Returns a copy of this layer with a different thickness.
    #[must_use]
    pub fn with_thickness(&self, thickness: Constrained<Length, StrictlyPositive>) -> Self {
        Self::from_constrained(thickness, Arc::clone(&self.material))
    }

    pub(crate) fn thickness_in(&self) -> f64 {
        self.thickness().get::<inch>()
    }
}

/// Layers ordered from the service side (innermost) outward.
///
/// A stack always holds at least one layer.
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Creates a stack from layers ordered innermost first.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoLayers`] if `layers` is empty.
    pub fn new(layers: Vec<Layer>) -> Result<Self, InputError> {
        if layers.is_empty() {
            return Err(InputError::NoLayers);
        }
        Ok(Self { layers })
    }

    /// Returns the layers, innermost first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks for an empty stack.
    ///
    /// [`LayerStack::new`] rejects empty stacks, so this is always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the outermost layer.
    #[must_use]
    pub fn outermost(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Returns the combined thickness of all layers.
    #[must_use]
    pub fn total_thickness(&self) -> Length {
        self.layers.iter().map(Layer::thickness).sum()
    }

    /// Returns a copy of this stack with the outermost layer's thickness replaced.
    #[must_use]
    pub fn with_outer_thickness(&self, thickness: Constrained<Length, StrictlyPositive>) -> Self {
        let mut layers = self.layers.clone();
        let last = layers.len() - 1;
        layers[last] = layers[last].with_thickness(thickness);
        Self { layers }
    }
}
