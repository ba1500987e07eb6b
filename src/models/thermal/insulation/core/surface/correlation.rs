//! Empirical outer-surface coefficient of C-680.
//!
//! The coefficient combines natural/forced convection and linearized
//! radiation to the surroundings:
//!
//! ```text
//! T_film = (T_amb + T_s)/2 + 459.69                       [°R]
//! ΔT     = max(|T_amb − T_s|, 1)
//! h_conv = C · D^−0.2 · T_film^−0.181 · ΔT^0.266 · √(1 + 1.277·V)
//! h_rad  = ε · σ · (T_amb,R⁴ − T_s,R⁴) / (T_amb − T_s)
//! ```
//!
//! `C` depends on orientation, `D` is the characteristic length, and `V` is
//! the wind speed in mph.

use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::inch,
    thermodynamic_temperature::degree_fahrenheit,
    velocity::mile_per_hour,
};

use crate::{
    models::thermal::insulation::core::InputError,
    support::constraint::{Constrained, NonNegative, UnitInterval},
};

use super::Orientation;

/// Offset from °F to °R.
const RANKINE_OFFSET: f64 = 459.69;

/// Stefan-Boltzmann constant, Btu/(h·ft²·°R⁴).
const STEFAN_BOLTZMANN: f64 = 0.1713e-8;

/// Smallest surface-to-ambient difference used in the convective term, °F.
const MIN_DELTA_T: f64 = 1.0;

/// Characteristic length of flat surfaces and cap for pipes.
const MAX_LENGTH_SCALE: f64 = 24.0;

/// Coefficient substituted when the combined value comes out negative.
const NEGATIVE_FALLBACK: f64 = 1.61;

/// Wind, emittance, and orientation of an outer surface whose coefficient
/// is computed from the C-680 correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCorrelation {
    wind_speed: Constrained<Velocity, NonNegative>,
    emittance: Constrained<f64, UnitInterval>,
    orientation: Orientation,
}

impl SurfaceCorrelation {
    /// Creates correlation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `wind_speed` is not finite and non-negative, or
    /// `emittance` is outside `[0, 1]`.
    pub fn new(
        wind_speed: Velocity,
        emittance: f64,
        orientation: impl Into<Orientation>,
    ) -> Result<Self, InputError> {
        if !wind_speed.is_finite() {
            return Err(InputError::NonFinite { input: "wind speed" });
        }
        Ok(Self {
            wind_speed: NonNegative::new(wind_speed).map_err(InputError::Surface)?,
            emittance: UnitInterval::new(emittance).map_err(InputError::Surface)?,
            orientation: orientation.into(),
        })
    }

    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed.into_inner()
    }

    #[must_use]
    pub fn emittance(&self) -> f64 {
        self.emittance.into_inner()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Computes the surface coefficient in Btu/(h·ft²·°F).
    ///
    /// `outer_diameter` is the insulated outer diameter for a pipe, or `None`
    /// for a flat surface.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OrientationMismatch`] if the orientation does not
    /// belong to the surface shape.
    pub fn coefficient(
        &self,
        outer_diameter: Option<Length>,
        surface: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Result<f64, InputError> {
        let film = self.film(outer_diameter.map(|d| d.get::<inch>()))?;
        Ok(film.coefficient(
            surface.get::<degree_fahrenheit>(),
            ambient.get::<degree_fahrenheit>(),
        ))
    }

    /// Fixes the temperature-independent part of the correlation.
    ///
    /// `outer_diameter` is in inches, `None` for a flat surface.
    pub(crate) fn film(&self, outer_diameter: Option<f64>) -> Result<Film, InputError> {
        let (factor, length_scale) = match (self.orientation, outer_diameter) {
            (Orientation::Pipe(orientation), Some(diameter)) => (
                orientation.convection_factor(),
                (diameter * 12.0).min(MAX_LENGTH_SCALE),
            ),
            (Orientation::Flat(orientation), None) => {
                (orientation.convection_factor(), MAX_LENGTH_SCALE)
            }
            (orientation, diameter) => {
                return Err(InputError::OrientationMismatch {
                    orientation,
                    geometry: if diameter.is_some() { "pipe" } else { "flat" },
                });
            }
        };

        Ok(Film {
            factor,
            length_scale,
            wind: self.wind_speed().get::<mile_per_hour>(),
            emittance: self.emittance(),
        })
    }
}

/// Correlation with geometry and surface properties fixed, leaving only the
/// temperature dependence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Film {
    factor: f64,
    length_scale: f64,
    wind: f64,
    emittance: f64,
}

impl Film {
    /// Returns the coefficient for surface and ambient temperatures in °F.
    pub(crate) fn coefficient(&self, surface: f64, ambient: f64) -> f64 {
        combine(
            self.convective(surface, ambient),
            self.radiative(surface, ambient),
        )
    }

    fn convective(&self, surface: f64, ambient: f64) -> f64 {
        let t_film = (ambient + surface) / 2.0 + RANKINE_OFFSET;
        let delta_t = (ambient - surface).abs().max(MIN_DELTA_T);

        self.factor
            * self.length_scale.powf(-0.2)
            * t_film.powf(-0.181)
            * delta_t.powf(0.266)
            * (1.0 + 1.277 * self.wind).sqrt()
    }

    fn radiative(&self, surface: f64, ambient: f64) -> f64 {
        if ambient == surface {
            return 0.0;
        }
        let t_amb = ambient + RANKINE_OFFSET;
        let t_s = surface + RANKINE_OFFSET;
        self.emittance * STEFAN_BOLTZMANN * (t_amb.powi(4) - t_s.powi(4)) / (ambient - surface)
    }
}

fn combine(convective: f64, radiative: f64) -> f64 {
    let h = convective + radiative;
    if h < 0.0 { NEGATIVE_FALLBACK } else { h }
}
