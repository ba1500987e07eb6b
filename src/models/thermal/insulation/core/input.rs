//! Inputs to an insulation heat balance.

mod conditions;
mod error;
mod geometry;
mod layer;

pub use conditions::Conditions;
pub use error::InputError;
pub use geometry::Geometry;
pub use layer::{Layer, LayerStack};

pub(crate) use geometry::Diameters;
