//! Closed-form ballistic solver: elevation and time of flight for a fixed muzzle speed.

pub mod arc;

pub use arc::{
    ArcCandidates, ArcSolution, NoSolution, candidate_angles, discriminant, level_range,
    solve_arc, time_of_flight,
};

use mortar_core::charge::AngleWindow;
use mortar_core::constants::GRAVITY;
use thiserror::Error;

/// Rejections raised while binding the solver's constants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("gravity must be finite and positive, got {0}")]
    InvalidGravity(f64),
    #[error("angle window [{min_deg}, {max_deg}] must satisfy 0 <= min < max < 90")]
    InvalidAngleWindow { min_deg: f64, max_deg: f64 },
}

/// Gravity and elevation window shared by every charge in a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticConstants {
    gravity: f64,
    window: AngleWindow,
}

impl BallisticConstants {
    /// Validate and bind the constants.
    pub fn new(gravity: f64, window: AngleWindow) -> Result<Self, SolverError> {
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(SolverError::InvalidGravity(gravity));
        }
        if !window.is_well_formed() {
            return Err(SolverError::InvalidAngleWindow {
                min_deg: window.min_deg,
                max_deg: window.max_deg,
            });
        }
        Ok(Self { gravity, window })
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn window(&self) -> AngleWindow {
        self.window
    }
}

impl Default for BallisticConstants {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            window: AngleWindow::default(),
        }
    }
}
