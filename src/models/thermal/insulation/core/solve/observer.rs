/// Snapshot of the heat balance after one unconverged pass.
///
/// Values are in the iteration's working units: °F, Btu/(h·ft²), and
/// Btu/(h·ft²·°F).
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub(super) iter: usize,
    pub(super) residual: f64,
    pub(super) surface_flux: f64,
    pub(super) surface_coefficient: f64,
    pub(super) temperatures: &'a [f64],
}

impl Event<'_> {
    /// One-based pass number.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Summed absolute change of the interface temperatures during this pass.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// Heat flux through the outer surface computed during this pass.
    #[must_use]
    pub fn surface_flux(&self) -> f64 {
        self.surface_flux
    }

    /// Surface coefficient used during this pass.
    #[must_use]
    pub fn surface_coefficient(&self) -> f64 {
        self.surface_coefficient
    }

    /// Interface temperatures after this pass, service side first.
    #[must_use]
    pub fn temperatures(&self) -> &[f64] {
        self.temperatures
    }
}

/// Observer response to an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the solve.
    Stop,
}
