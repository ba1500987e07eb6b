//! Outer-surface heat transfer coefficient.

mod correlation;
mod orientation;

pub use correlation::SurfaceCorrelation;
pub use orientation::{FlatOrientation, Orientation, PipeOrientation};

pub(crate) use correlation::Film;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::InputError;

/// How the outer-surface coefficient is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExternalSurface {
    /// A fixed coefficient in Btu/(h·ft²·°F).
    Fixed(Constrained<f64, StrictlyPositive>),

    /// The C-680 correlation, re-evaluated every iteration from the current
    /// outer-surface temperature.
    Correlation(SurfaceCorrelation),
}

impl ExternalSurface {
    /// Creates a fixed surface coefficient in Btu/(h·ft²·°F).
    ///
    /// # Errors
    ///
    /// Returns an error if `coefficient` is not finite and strictly positive.
    pub fn fixed(coefficient: f64) -> Result<Self, InputError> {
        if !coefficient.is_finite() {
            return Err(InputError::NonFinite {
                input: "surface coefficient",
            });
        }
        Ok(Self::Fixed(
            StrictlyPositive::new(coefficient).map_err(InputError::Surface)?,
        ))
    }

    /// Resolves the coefficient model for a given outer diameter (inches),
    /// `None` for a flat surface.
    pub(super) fn resolve(&self, outer_diameter: Option<f64>) -> Result<SurfaceModel, InputError> {
        match self {
            Self::Fixed(h) if !h.into_inner().is_finite() => Err(InputError::NonFinite {
                input: "surface coefficient",
            }),
            Self::Fixed(h) => Ok(SurfaceModel::Fixed(h.into_inner())),
            Self::Correlation(correlation) => {
                Ok(SurfaceModel::Film(correlation.film(outer_diameter)?))
            }
        }
    }
}

impl From<SurfaceCorrelation> for ExternalSurface {
    fn from(correlation: SurfaceCorrelation) -> Self {
        Self::Correlation(correlation)
    }
}

/// Surface coefficient model with geometry already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum SurfaceModel {
    Fixed(f64),
    Film(Film),
}

impl SurfaceModel {
    /// Returns the coefficient for the current surface and ambient
    /// temperatures in °F.
    pub(super) fn coefficient(&self, surface: f64, ambient: f64) -> f64 {
        match self {
            Self::Fixed(h) => *h,
            Self::Film(film) => film.coefficient(surface, ambient),
        }
    }
}
