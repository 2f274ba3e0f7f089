//! Firing solution for one launch/target pair across a list of charges.

use mortar_core::charge::ChargePreset;
use mortar_core::vector::Point3;
use mortar_geometry::{BearingMode, bearings, horizontal_range};
use mortar_solver::{BallisticConstants, SolverError, solve_arc};
use serde::Serialize;
use thiserror::Error;

/// Solution for a single charge. Both fields are absent when no arc is feasible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeSolution {
    pub charge_index: u32,
    pub elevation_degrees: Option<f64>,
    pub time_of_flight_seconds: Option<f64>,
}

impl ChargeSolution {
    fn infeasible(charge_index: u32) -> Self {
        Self {
            charge_index,
            elevation_degrees: None,
            time_of_flight_seconds: None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.elevation_degrees.is_some()
    }
}

/// Range, bearing(s), and one solution per requested charge in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub horizontal_range: f64,
    pub bearing_primary_degrees: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing_secondary_degrees: Option<f64>,
    pub solutions: Vec<ChargeSolution>,
}

impl TrajectoryResult {
    /// Solutions that produced an elevation.
    pub fn feasible(&self) -> impl Iterator<Item = &ChargeSolution> {
        self.solutions.iter().filter(|s| s.is_feasible())
    }
}

/// Input rejected before any solving takes place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireControlError {
    #[error("{point} coordinate {axis} is not a finite number")]
    NonFiniteCoordinate { point: &'static str, axis: char },
    #[error("launch and target are too far apart to represent")]
    SeparationOverflow,
    #[error("charge list is empty")]
    EmptyChargeList,
    #[error("charge C{index} has invalid muzzle velocity {velocity}")]
    InvalidCharge { index: u32, velocity: f64 },
    #[error("charge C{0} is not in the charge table")]
    UnknownCharge(u32),
    #[error("invalid ballistic constants: {0}")]
    Constants(#[from] SolverError),
}

/// Reject empty tables and non-positive or non-finite muzzle speeds.
pub(crate) fn validate_charges(charges: &[ChargePreset]) -> Result<(), FireControlError> {
    if charges.is_empty() {
        return Err(FireControlError::EmptyChargeList);
    }
    match charges
        .iter()
        .find(|c| !c.velocity.is_finite() || c.velocity <= 0.0)
    {
        Some(bad) => Err(FireControlError::InvalidCharge {
            index: bad.index,
            velocity: bad.velocity,
        }),
        None => Ok(()),
    }
}

fn validate_point(point: &'static str, p: &Point3) -> Result<(), FireControlError> {
    match p.non_finite_axis() {
        Some(axis) => Err(FireControlError::NonFiniteCoordinate { point, axis }),
        None => Ok(()),
    }
}

/// Compute range, bearing(s), and a per-charge elevation and time of flight.
///
/// Charges are solved independently and reported in the order given. A charge with no
/// feasible arc yields a [`ChargeSolution`] with both fields absent; only malformed input
/// fails the call.
pub fn solve_trajectory(
    launch: Point3,
    target: Point3,
    charges: &[ChargePreset],
    constants: &BallisticConstants,
    mode: BearingMode,
) -> Result<TrajectoryResult, FireControlError> {
    validate_point("launch", &launch)?;
    validate_point("target", &target)?;
    validate_charges(charges)?;

    let range = horizontal_range(&launch, &target);
    let dy = launch.height_delta(&target);
    if !range.is_finite() || !dy.is_finite() {
        return Err(FireControlError::SeparationOverflow);
    }
    let bearing = bearings(&launch, &target, mode);
    if range == 0.0 {
        tracing::debug!("launch and target coincide horizontally, treating as vertical shot");
    }
    tracing::debug!(range, dy, bearing = bearing.primary_deg, "solving firing solution");

    let solutions = charges
        .iter()
        .map(|charge| match solve_arc(range, dy, charge.velocity, constants) {
            Ok(arc) => ChargeSolution {
                charge_index: charge.index,
                elevation_degrees: Some(arc.elevation_deg),
                time_of_flight_seconds: Some(arc.time_of_flight_s),
            },
            Err(reason) => {
                tracing::debug!(charge = charge.index, %reason, "no feasible arc");
                ChargeSolution::infeasible(charge.index)
            }
        })
        .collect();

    Ok(TrajectoryResult {
        horizontal_range: range,
        bearing_primary_degrees: bearing.primary_deg,
        bearing_secondary_degrees: bearing.secondary_deg,
        solutions,
    })
}
