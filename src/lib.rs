//! Firing-solution calculator for indirect-fire weapons.
//!
//! The physics lives in the member crates; this crate re-exports them so front-ends
//! (the CLI today) depend on a single library.

pub use mortar_config as config;
pub use mortar_core as primitives;
pub use mortar_export as export;
pub use mortar_fire_control as fire_control;
pub use mortar_geometry as geometry;
pub use mortar_solver as solver;

pub use mortar_fire_control::{
    BearingMode, ChargePreset, ChargeSolution, FireControl, FireControlError, Point3,
    TrajectoryResult, solve_trajectory,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
