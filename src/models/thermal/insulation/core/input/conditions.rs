use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::InputError;

/// Service and ambient temperatures on either side of the insulation.
///
/// The two temperatures are guaranteed to differ.
/// Service below ambient (cold piping) is allowed; heat then flows inward
/// and the reported heat flow is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    service: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
}

impl Conditions {
    /// Constructs validated boundary conditions.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if either temperature is not a finite absolute
    /// temperature, or if the two are equal.
    pub fn new(
        service: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Result<Self, InputError> {
        check_absolute(service, "service")?;
        check_absolute(ambient, "ambient")?;

        if service == ambient {
            return Err(InputError::NoTemperatureDifference);
        }

        Ok(Self { service, ambient })
    }

    /// Returns the service (pipe or equipment) temperature.
    #[must_use]
    pub fn service(&self) -> ThermodynamicTemperature {
        self.service
    }

    /// Returns the ambient air temperature.
    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        self.ambient
    }
}

fn check_absolute(
    temperature: ThermodynamicTemperature,
    boundary: &'static str,
) -> Result<(), InputError> {
    let absolute = temperature.get::<kelvin>();
    if absolute.is_finite() && absolute >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Temperature { boundary })
    }
}
