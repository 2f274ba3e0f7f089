//! Per-charge arc solution in a uniform gravity field, no drag.
//!
//! The range equation is solved for elevation, giving a low (flat) and a high (lobbed)
//! root. The high arc is reported when it fits the elevation window, otherwise the low
//! arc, otherwise nothing. Time of flight then comes from the vertical-motion equation.

use std::f64::consts::FRAC_PI_2;

use mortar_core::units::rad_to_deg;
use thiserror::Error;

use crate::BallisticConstants;

/// Discriminants within this fraction of `v⁴` of zero are treated as exactly zero.
const DISCRIMINANT_TOLERANCE: f64 = 1e-12;

/// Why a charge produced no firing solution. Not a failure of the overall solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoSolution {
    #[error("target is out of reach at this muzzle speed")]
    OutOfReach,
    #[error("neither arc lies inside the elevation window")]
    OutsideWindow,
    #[error("time of flight is undefined for the selected arc")]
    UndefinedTimeOfFlight,
    #[error("non-finite intermediate value")]
    NonFinite,
}

/// The two elevation roots of the range equation, in radians.
///
/// At zero horizontal range both roots are the vertical shot (π/2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCandidates {
    pub low_rad: f64,
    pub high_rad: f64,
}

/// Elevation and flight time for the arc reported for one charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSolution {
    pub elevation_deg: f64,
    pub time_of_flight_s: f64,
}

/// `v⁴ − g·(g·R² + 2·dy·v²)`; negative means no real elevation reaches the target.
///
/// Inputs:
/// - `range`: horizontal distance to the target
/// - `dy`: target height minus launch height
/// - `velocity`: muzzle speed
/// - `gravity`: magnitude of gravitational acceleration
pub fn discriminant(range: f64, dy: f64, velocity: f64, gravity: f64) -> f64 {
    let v2 = velocity * velocity;
    v2 * v2 - gravity * (gravity * range * range + 2.0 * dy * v2)
}

/// Both elevation roots for the given geometry, or `None` when the target is out of reach.
pub fn candidate_angles(
    range: f64,
    dy: f64,
    velocity: f64,
    gravity: f64,
) -> Option<ArcCandidates> {
    let v2 = velocity * velocity;
    let mut disc = discriminant(range, dy, velocity, gravity);
    if !disc.is_finite() {
        return None;
    }
    if disc < 0.0 {
        if disc < -DISCRIMINANT_TOLERANCE * v2 * v2 {
            return None;
        }
        tracing::trace!(disc, "clamping near-zero discriminant");
        disc = 0.0;
    }

    if range == 0.0 {
        return Some(ArcCandidates {
            low_rad: FRAC_PI_2,
            high_rad: FRAC_PI_2,
        });
    }

    let root = disc.sqrt();
    let denom = gravity * range;
    let candidates = ArcCandidates {
        low_rad: ((v2 - root) / denom).atan(),
        high_rad: ((v2 + root) / denom).atan(),
    };
    (candidates.low_rad.is_finite() && candidates.high_rad.is_finite()).then_some(candidates)
}

/// Flight time along an arc launched at `elevation_rad`:
/// `t = (v·sinθ + sqrt((v·sinθ)² + 2·g·dy)) / g`.
///
/// Returns `None` when the radicand is negative or the result is not a finite, non-negative time.
pub fn time_of_flight(velocity: f64, elevation_rad: f64, dy: f64, gravity: f64) -> Option<f64> {
    let vertical = velocity * elevation_rad.sin();
    let radicand = vertical * vertical + 2.0 * gravity * dy;
    if radicand.is_nan() || radicand < 0.0 {
        return None;
    }
    let t = (vertical + radicand.sqrt()) / gravity;
    (t.is_finite() && t >= 0.0).then_some(t)
}

/// Horizontal range on level ground for a given speed and elevation: `v²·sin(2θ)/g`.
pub fn level_range(velocity: f64, elevation_rad: f64, gravity: f64) -> f64 {
    velocity * velocity * (2.0 * elevation_rad).sin() / gravity
}

/// Solve one charge: select an in-window arc and compute its time of flight.
pub fn solve_arc(
    range: f64,
    dy: f64,
    velocity: f64,
    constants: &BallisticConstants,
) -> Result<ArcSolution, NoSolution> {
    if !(range.is_finite() && dy.is_finite() && velocity.is_finite()) {
        return Err(NoSolution::NonFinite);
    }
    let gravity = constants.gravity();
    let window = constants.window();

    let candidates =
        candidate_angles(range, dy, velocity, gravity).ok_or(NoSolution::OutOfReach)?;

    let selected = [candidates.high_rad, candidates.low_rad]
        .into_iter()
        .find(|&rad| window.contains(rad_to_deg(rad)))
        .ok_or(NoSolution::OutsideWindow)?;

    let time_of_flight_s = time_of_flight(velocity, selected, dy, gravity)
        .ok_or(NoSolution::UndefinedTimeOfFlight)?;

    Ok(ArcSolution {
        elevation_deg: rad_to_deg(selected),
        time_of_flight_s,
    })
}
