use thiserror::Error;

use crate::{models::thermal::insulation::core::Orientation, support::constraint::ConstraintError};

/// Problems with solve inputs, detected before iterating.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// The layer stack has no layers.
    #[error("at least one insulation layer is required")]
    NoLayers,

    /// Service and ambient temperatures are equal, so there is no heat flow to solve for.
    #[error("service and ambient temperatures are equal")]
    NoTemperatureDifference,

    /// A boundary temperature is infinite, NaN, or below absolute zero.
    #[error("invalid {boundary} temperature")]
    Temperature { boundary: &'static str },

    /// A legacy orientation code is not recognized.
    #[error("unknown {kind} orientation code: {code}")]
    UnknownOrientation { kind: &'static str, code: i8 },

    /// The surface orientation does not match the geometry.
    #[error("{orientation:?} does not apply to {geometry} geometry")]
    OrientationMismatch {
        orientation: Orientation,
        geometry: &'static str,
    },

    /// A layer material gives a non-positive conductivity over the initial
    /// temperature estimate.
    #[error("layer {layer} has non-positive conductivity: {conductivity}")]
    NonPositiveConductivity { layer: usize, conductivity: f64 },

    /// A length, speed, or coefficient is infinite or NaN.
    #[error("{input} must be finite")]
    NonFinite { input: &'static str },

    /// A layer thickness violates its constraint.
    #[error("invalid layer thickness")]
    Thickness(#[source] ConstraintError),

    /// The pipe diameter violates its constraint.
    #[error("invalid pipe diameter")]
    Diameter(#[source] ConstraintError),

    /// A surface coefficient, wind speed, or emittance violates its constraint.
    #[error("invalid outer surface")]
    Surface(#[source] ConstraintError),
}
