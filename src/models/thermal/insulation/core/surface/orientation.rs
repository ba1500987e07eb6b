use crate::models::thermal::insulation::core::InputError;

/// Orientation of an insulated pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeOrientation {
    Vertical,
    Horizontal,
}

/// Orientation of an insulated flat surface, described by heat flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatOrientation {
    /// Vertical surface; heat flows horizontally.
    VerticalSurface,
    /// Horizontal surface with heat flowing downward.
    HeatFlowDown,
    /// Horizontal surface with heat flowing upward.
    HeatFlowUp,
}

/// Orientation used by the surface correlation.
///
/// Pipe and flat orientations are separate types so a pipe orientation can't
/// be mistaken for a flat one; pairing either with the wrong geometry is
/// rejected before the solve starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Pipe(PipeOrientation),
    Flat(FlatOrientation),
}

impl PipeOrientation {
    /// Natural convection coefficient for this orientation.
    pub(super) fn convection_factor(self) -> f64 {
        match self {
            Self::Vertical => 1.016,
            Self::Horizontal => 1.235,
        }
    }
}

impl FlatOrientation {
    /// Natural convection coefficient for this orientation.
    pub(super) fn convection_factor(self) -> f64 {
        match self {
            Self::VerticalSurface => 1.394,
            Self::HeatFlowDown => 0.89,
            Self::HeatFlowUp => 1.79,
        }
    }
}

impl From<PipeOrientation> for Orientation {
    fn from(orientation: PipeOrientation) -> Self {
        Self::Pipe(orientation)
    }
}

impl From<FlatOrientation> for Orientation {
    fn from(orientation: FlatOrientation) -> Self {
        Self::Flat(orientation)
    }
}

/// Converts the legacy numeric code (`1` vertical, `2` horizontal).
impl TryFrom<i8> for PipeOrientation {
    type Error = InputError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Vertical),
            2 => Ok(Self::Horizontal),
            code => Err(InputError::UnknownOrientation { kind: "pipe", code }),
        }
    }
}

/// Converts the legacy numeric code
/// (`1` vertical surface, `2` heat flow down, `3` heat flow up).
impl TryFrom<i8> for FlatOrientation {
    type Error = InputError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::VerticalSurface),
            2 => Ok(Self::HeatFlowDown),
            3 => Ok(Self::HeatFlowUp),
            code => Err(InputError::UnknownOrientation { kind: "flat", code }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes() {
        assert_eq!(
            PipeOrientation::try_from(2),
            Ok(PipeOrientation::Horizontal)
        );
        assert_eq!(
            FlatOrientation::try_from(3),
            Ok(FlatOrientation::HeatFlowUp)
        );

        // The same code means different things for pipes and flat surfaces.
        assert_eq!(PipeOrientation::try_from(1), Ok(PipeOrientation::Vertical));
        assert_eq!(
            FlatOrientation::try_from(1),
            Ok(FlatOrientation::VerticalSurface)
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            PipeOrientation::try_from(3),
            Err(InputError::UnknownOrientation {
                kind: "pipe",
                code: 3
            })
        );
        assert!(FlatOrientation::try_from(0).is_err());
        assert!(FlatOrientation::try_from(-1).is_err());
    }
}
