//! Extensions to [`uom`].
//!
//! Public inputs and outputs of this crate use [`uom`] quantities for
//! temperatures and lengths. This module holds the small extensions the
//! insulation models need on top of [`uom`].
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and returns a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_fahrenheit};
//! use twine_insulation::support::units::TemperatureDifference;
//!
//! let service = ThermodynamicTemperature::new::<degree_fahrenheit>(350.0);
//! let ambient = ThermodynamicTemperature::new::<degree_fahrenheit>(80.0);
//! let drop = service.minus(ambient);
//! assert!((drop.get::<temperature_interval::degree_fahrenheit>() - 270.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
