//! Problem formulation for sizing the outermost layer.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::inch,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

use crate::{
    models::thermal::insulation::core::{
        Conditions, InputError, InsulationSystem, Results, SolveError, SolverConfig,
    },
    support::{constraint::StrictlyPositive, units::TemperatureDifference},
};

/// Model adapter for thickness sizing.
///
/// Wraps the heat balance and exposes the outermost layer thickness as the
/// sole input variable.
pub(super) struct GivenSurfaceTempModel<'a> {
    system: &'a InsulationSystem,
    conditions: &'a Conditions,
    config: SolverConfig,
}

impl<'a> GivenSurfaceTempModel<'a> {
    pub(super) fn new(
        system: &'a InsulationSystem,
        conditions: &'a Conditions,
        config: SolverConfig,
    ) -> Self {
        Self {
            system,
            conditions,
            config,
        }
    }
}

impl Model for GivenSurfaceTempModel<'_> {
    type Input = Length;
    type Output = Results;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let thickness = StrictlyPositive::new(*input).map_err(InputError::Thickness)?;
        self.system
            .with_outer_thickness(thickness)
            .solve(self.conditions, self.config)
    }
}

/// Equation problem definition for thickness sizing.
///
/// The residual is `surface - target`, sign-flipped for cold service so that
/// an outer layer that is too thin always gives a positive residual.
pub(super) struct GivenSurfaceTempProblem {
    target: ThermodynamicTemperature,
    sign: f64,
}

impl GivenSurfaceTempProblem {
    pub(super) fn new(target: ThermodynamicTemperature, conditions: &Conditions) -> Self {
        let sign = if conditions.service() > conditions.ambient() {
            1.0
        } else {
            -1.0
        };
        Self { target, sign }
    }
}

impl EquationProblem<1> for GivenSurfaceTempProblem {
    type Input = Length;
    type Output = Results;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<inch>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let excess = output.surface_temperature().minus(self.target);
        Ok([self.sign * excess.get::<delta_fahrenheit>()])
    }
}
