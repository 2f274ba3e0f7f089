//! Fire-control façade: combines geometry and the ballistic solver into one firing solution.

pub mod settings;
pub mod solution;

pub use facade::*;
pub use mortar_geometry as geometry;
pub use mortar_solver as solver;

mod facade;
