//! Fire-control settings bound at construction: constants, charge table, bearing mode.

use mortar_config::BallisticsConfig;
use mortar_core::charge::{AngleWindow, ChargePreset, default_charges};
use mortar_core::vector::Point3;
use mortar_geometry::BearingMode;
use mortar_solver::BallisticConstants;

use crate::solution::{FireControlError, TrajectoryResult, solve_trajectory, validate_charges};

/// Immutable set of constants and charges that every solve runs against.
#[derive(Debug, Clone, PartialEq)]
pub struct FireControl {
    constants: BallisticConstants,
    charges: Vec<ChargePreset>,
    bearing_mode: BearingMode,
}

impl FireControl {
    /// Bind validated constants to a charge table.
    pub fn new(
        constants: BallisticConstants,
        charges: Vec<ChargePreset>,
        bearing_mode: BearingMode,
    ) -> Result<Self, FireControlError> {
        validate_charges(&charges)?;
        Ok(Self {
            constants,
            charges,
            bearing_mode,
        })
    }

    pub fn with_bearing_mode(mut self, bearing_mode: BearingMode) -> Self {
        self.bearing_mode = bearing_mode;
        self
    }

    pub fn constants(&self) -> &BallisticConstants {
        &self.constants
    }

    pub fn charges(&self) -> &[ChargePreset] {
        &self.charges
    }

    pub fn bearing_mode(&self) -> BearingMode {
        self.bearing_mode
    }

    /// Look up charges by index, keeping the caller's order.
    ///
    /// An empty selection means the whole table.
    pub fn select(&self, indices: &[u32]) -> Result<Vec<ChargePreset>, FireControlError> {
        if indices.is_empty() {
            return Ok(self.charges.clone());
        }
        indices
            .iter()
            .map(|&index| {
                self.charges
                    .iter()
                    .find(|c| c.index == index)
                    .copied()
                    .ok_or(FireControlError::UnknownCharge(index))
            })
            .collect()
    }

    /// Solve against the full charge table.
    pub fn solve(
        &self,
        launch: Point3,
        target: Point3,
    ) -> Result<TrajectoryResult, FireControlError> {
        self.solve_with(launch, target, &self.charges)
    }

    /// Solve against an explicit list of charges.
    pub fn solve_with(
        &self,
        launch: Point3,
        target: Point3,
        charges: &[ChargePreset],
    ) -> Result<TrajectoryResult, FireControlError> {
        solve_trajectory(launch, target, charges, &self.constants, self.bearing_mode)
    }
}

impl Default for FireControl {
    fn default() -> Self {
        Self {
            constants: BallisticConstants::default(),
            charges: default_charges(),
            bearing_mode: BearingMode::default(),
        }
    }
}

/// Validate a parsed configuration and bind it into a [`FireControl`] in dual-bearing mode.
pub fn from_config(config: &BallisticsConfig) -> Result<FireControl, FireControlError> {
    let window = AngleWindow::from(config.angle_window);
    let constants = BallisticConstants::new(config.gravity, window)?;
    let charges = config.charges.iter().copied().map(ChargePreset::from).collect();
    FireControl::new(constants, charges, BearingMode::Dual)
}
