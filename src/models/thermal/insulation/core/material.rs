//! Temperature-dependent thermal conductivity of insulation materials.
//!
//! C-680 evaluates each layer at the mean conductivity between its inside and
//! outside temperatures, integrated over that interval rather than sampled at
//! the midpoint. A material is anything implementing [`Conductivity`]; three
//! curve forms are provided:
//!
//! - [`Polynomial`]: `k(T) = c0 + c1·T + c2·T² + …`, averaged exactly.
//! - [`Exponential`]: `ln k(T) = a + b·T`, averaged exactly.
//! - [`PiecewiseLinear`]: three linear segments, averaged by quadrature.
//!
//! Temperatures are in °F and conductivities in Btu·in/(h·ft²·°F), the basis
//! in which published C-680 curve coefficients are given.

mod error;
mod exponential;
mod piecewise_linear;
mod polynomial;

use std::fmt::Debug;

pub use error::MaterialError;
pub use exponential::Exponential;
pub use piecewise_linear::{PiecewiseLinear, Segment};
pub use polynomial::Polynomial;

/// Conductivity curve of an insulation material.
///
/// Implementations must be pure functions of their arguments so a single
/// material can be shared between layers and between concurrent solves.
pub trait Conductivity: Debug + Send + Sync {
    /// Returns the conductivity at temperature `t`.
    fn conductivity(&self, t: f64) -> f64;

    /// Returns the mean conductivity over the interval between `t1` and `t2`.
    ///
    /// The arguments may be given in either order.
    /// When `t1 == t2` the interval is empty and implementations return the
    /// conductivity at that temperature, which is the limit of the mean.
    fn mean_conductivity(&self, t1: f64, t2: f64) -> f64;
}
