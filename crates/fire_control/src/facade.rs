//! Re-exported APIs for consumers of the fire-control crate.

pub use crate::settings::{FireControl, from_config};
pub use crate::solution::{ChargeSolution, FireControlError, TrajectoryResult, solve_trajectory};
pub use mortar_core::charge::{AngleWindow, ChargePreset, default_charges};
pub use mortar_core::vector::Point3;
pub use mortar_geometry::BearingMode;
pub use mortar_solver::{BallisticConstants, NoSolution, SolverError};
