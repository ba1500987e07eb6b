//! Fixed-point heat balance solver.
//!
//! Conductivity depends on temperature and, in correlation mode, so does the
//! surface coefficient. The solver therefore alternates between evaluating
//! the resistance network on the current temperature profile and updating
//! the profile from the resulting heat flux until the profile stops moving.

mod error;
mod observer;
mod state;

pub use error::SolveError;
pub use observer::{Action, Event};

use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::inch,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

use super::{
    Conditions, ExternalSurface, Geometry, HeatFlow, InputError, LayerResult, LayerStack,
    Results, SolverConfig, input::Diameters,
};

use state::{Network, State};

/// Solves the heat balance, reporting each unconverged pass to `observer`.
///
/// # Errors
///
/// Returns [`SolveError`] if the inputs are invalid, a material produces a
/// non-physical conductivity, the iteration limit is reached, or the observer
/// stops the solve.
pub(super) fn solve(
    conditions: &Conditions,
    geometry: &Geometry,
    layers: &LayerStack,
    surface: &ExternalSurface,
    config: SolverConfig,
    mut observer: impl FnMut(&Event<'_>) -> Option<Action>,
) -> Result<Results, SolveError> {
    check_finite(geometry, layers)?;

    let diameters = Diameters::new(geometry, layers);
    let outer_diameter = geometry.is_pipe().then(|| diameters.outermost());

    let network = Network {
        layers,
        geometry,
        surface: surface.resolve(outer_diameter)?,
        diameters,
        service: conditions.service().get::<degree_fahrenheit>(),
        ambient: conditions.ambient().get::<degree_fahrenheit>(),
    };

    let mut state = State::new(&network);
    state.check_initial(&network)?;

    let tolerance = config.tolerance_f();
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters {
        residual = state.pass(&network)?;

        if residual < tolerance {
            return Ok(results(conditions, surface, &network, &state, iter));
        }

        let event = Event {
            iter,
            residual,
            surface_flux: state.q,
            surface_coefficient: state.h,
            temperatures: &state.t,
        };
        if let Some(Action::Stop) = observer(&event) {
            return Err(SolveError::Stopped { iters: iter });
        }
    }

    Err(SolveError::MaxIters {
        residual: TemperatureInterval::new::<delta_fahrenheit>(residual),
        iters: config.max_iters,
    })
}

/// Rejects infinite lengths, which pre-validated constructors let through.
fn check_finite(geometry: &Geometry, layers: &LayerStack) -> Result<(), InputError> {
    let diameter_is_finite = match geometry {
        Geometry::Flat => true,
        Geometry::Pipe { outer_diameter } => outer_diameter.into_inner().is_finite(),
    };
    if !diameter_is_finite {
        return Err(InputError::NonFinite {
            input: "pipe diameter",
        });
    }

    if layers
        .layers()
        .iter()
        .any(|layer| !layer.thickness().is_finite())
    {
        return Err(InputError::NonFinite {
            input: "layer thickness",
        });
    }

    Ok(())
}

fn results(
    conditions: &Conditions,
    surface: &ExternalSurface,
    network: &Network<'_>,
    state: &State,
    iters: usize,
) -> Results {
    let fahrenheit = ThermodynamicTemperature::new::<degree_fahrenheit>;

    let layers = network
        .layers
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| LayerResult {
            thickness: Length::new::<inch>(layer.thickness_in()),
            conductivity: state.k[i],
            resistance: state.r[i],
            inside: fahrenheit(state.t[i]),
            outside: fahrenheit(state.t[i + 1]),
        })
        .collect();

    let heat_flow = match network.geometry {
        Geometry::Flat => HeatFlow::PerArea(state.q),
        Geometry::Pipe { .. } => HeatFlow::PerLength(state.per_length(network)),
    };

    Results {
        conditions: *conditions,
        geometry: *network.geometry,
        surface: *surface,
        heat_flow,
        surface_flux: state.q,
        surface_coefficient: state.h,
        total_resistance: state.r_total,
        layers,
        iters,
    }
}
