//! Iterative sizing for a target outer-surface temperature.
//!
//! Typical uses are personnel protection, where the surface must stay below a
//! touch-safe temperature, and condensation control on cold lines, where it
//! must stay above the dew point. The thickness of the outermost layer is
//! varied until the heat balance lands on the target.

mod config;
mod error;
mod problem;

pub use config::GivenSurfaceTempConfig;
pub use error::GivenSurfaceTempError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

use super::{Conditions, InsulationSystem, Results};

use problem::{GivenSurfaceTempModel, GivenSurfaceTempProblem};

/// Sizes the outermost layer so the outer surface reaches `target`.
///
/// # Errors
///
/// Returns [`GivenSurfaceTempError`] if the target or bracket is invalid,
/// a heat balance fails, or the solver fails to converge.
pub(super) fn given_surface_temp(
    system: &InsulationSystem,
    conditions: &Conditions,
    target: ThermodynamicTemperature,
    config: GivenSurfaceTempConfig,
) -> Result<Results, GivenSurfaceTempError> {
    let (service, ambient) = (conditions.service(), conditions.ambient());
    let (low, high) = if service > ambient {
        (ambient, service)
    } else {
        (service, ambient)
    };
    if !(target > low && target < high) {
        return Err(GivenSurfaceTempError::Unreachable { target });
    }

    let [min, max] = config.bracket();
    if !(min > 0.0 && max > min) {
        return Err(GivenSurfaceTempError::Bracket {
            min: config.min_thickness,
            max: config.max_thickness,
        });
    }

    let model = GivenSurfaceTempModel::new(system, conditions, config.solver);

    let problem = GivenSurfaceTempProblem::new(target, conditions);

    let solution = bisection::solve(
        &model,
        &problem,
        [min, max],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed heat balance is treated as insulation that is too thin,
            // steering bisection toward thicker layers.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenSurfaceTempError::MaxIters {
            residual: TemperatureInterval::new::<delta_fahrenheit>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}
