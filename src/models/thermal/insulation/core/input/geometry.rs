use uom::si::{f64::Length, length::inch};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{InputError, LayerStack};

/// Shape of the insulated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Flat equipment wall; layer resistance is `thickness / k`.
    Flat,

    /// Pipe insulated on its outside; layer resistance accounts for the
    /// growing circumference of each layer.
    Pipe {
        outer_diameter: Constrained<Length, StrictlyPositive>,
    },
}

impl Geometry {
    /// Creates pipe geometry from the bare pipe's outer diameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `outer_diameter` is not finite and strictly positive.
    pub fn pipe(outer_diameter: Length) -> Result<Self, InputError> {
        if !outer_diameter.is_finite() {
            return Err(InputError::NonFinite {
                input: "pipe diameter",
            });
        }
        Ok(Self::Pipe {
            outer_diameter: StrictlyPositive::new(outer_diameter).map_err(InputError::Diameter)?,
        })
    }

    #[must_use]
    pub fn is_pipe(&self) -> bool {
        matches!(self, Self::Pipe { .. })
    }

    /// Bare pipe outer diameter in inches, zero for flat geometry.
    fn base_diameter(&self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Pipe { outer_diameter } => outer_diameter.into_inner().get::<inch>(),
        }
    }
}

/// Inner and outer diameter of every layer, in inches.
///
/// For flat geometry the diameters start from zero and are not used by the
/// resistance calculation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Diameters {
    pub(crate) inner: Vec<f64>,
    pub(crate) outer: Vec<f64>,
}

impl Diameters {
    pub(crate) fn new(geometry: &Geometry, layers: &LayerStack) -> Self {
        let mut inner = Vec::with_capacity(layers.len());
        let mut outer = Vec::with_capacity(layers.len());

        let mut diameter = geometry.base_diameter();
        for layer in layers.layers() {
            inner.push(diameter);
            diameter += 2.0 * layer.thickness_in();
            outer.push(diameter);
        }

        Self { inner, outer }
    }

    /// Outer diameter of the outermost layer.
    pub(crate) fn outermost(&self) -> f64 {
        self.outer[self.outer.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::insulation::core::{
        Layer,
        test_support::{constant, inches},
    };

    fn stack(thicknesses: &[f64]) -> LayerStack {
        LayerStack::new(
            thicknesses
                .iter()
                .map(|&t| Layer::new(inches(t), constant(0.3)).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn pipe_diameters_grow_outward() {
        let geometry = Geometry::pipe(inches(2.0)).unwrap();
        let diameters = Diameters::new(&geometry, &stack(&[0.5, 1.0, 1.5]));

        for (actual, expected) in diameters.inner.iter().zip([2.0, 3.0, 5.0]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
        for (actual, expected) in diameters.outer.iter().zip([3.0, 5.0, 8.0]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
        assert_relative_eq!(diameters.outermost(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_diameters_start_at_zero() {
        let diameters = Diameters::new(&Geometry::Flat, &stack(&[1.0, 2.0]));

        assert_relative_eq!(diameters.inner[0], 0.0);
        assert_relative_eq!(diameters.outermost(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_pipe_diameter() {
        assert!(matches!(
            Geometry::pipe(inches(0.0)),
            Err(InputError::Diameter(_))
        ));
        assert!(matches!(
            Geometry::pipe(inches(-2.0)),
            Err(InputError::Diameter(_))
        ));
        assert!(Geometry::pipe(inches(4.5)).unwrap().is_pipe());
        assert!(!Geometry::Flat.is_pipe());
    }

    #[test]
    fn rejects_non_finite_pipe_diameter() {
        for diameter in [f64::INFINITY, f64::NAN] {
            assert_eq!(
                Geometry::pipe(inches(diameter)),
                Err(InputError::NonFinite {
                    input: "pipe diameter"
                })
            );
        }
    }
}
