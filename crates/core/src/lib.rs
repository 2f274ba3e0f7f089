//! Core constants, units, and shared primitives for the mortar calculator workspace.

/// Built-in ballistic constants. Distances are in studs, times in seconds.
pub mod constants {
    /// Magnitude of gravitational acceleration along the vertical axis (studs/s²).
    pub const GRAVITY: f64 = 196.2;
    /// Muzzle speed for charges C0 through C4 (studs/s).
    pub const CHARGE_VELOCITIES: [f64; 5] = [720.0, 780.0, 840.0, 900.0, 960.0];
    /// Lowest elevation the tube can be laid at (degrees).
    pub const MIN_ELEVATION_DEG: f64 = 44.25;
    /// Highest elevation the tube can be laid at (degrees).
    pub const MAX_ELEVATION_DEG: f64 = 85.25;
}

/// Angle conversion and normalisation helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Wrap an angle in degrees into `[0, 360)`.
    ///
    /// `rem_euclid` can round a tiny negative input up to exactly 360, which is folded back to 0.
    #[inline]
    pub fn normalize_degrees(v: f64) -> f64 {
        let wrapped = v.rem_euclid(360.0);
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }
}

/// Minimal 3D point type; `y` is the vertical axis.
pub mod vector {
    /// A position in world space. `x` and `z` span the horizontal plane.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Point3 {
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Returns the name of the first non-finite axis, if any.
        pub fn non_finite_axis(&self) -> Option<char> {
            [('x', self.x), ('y', self.y), ('z', self.z)]
                .into_iter()
                .find(|(_, v)| !v.is_finite())
                .map(|(axis, _)| axis)
        }

        /// Horizontal displacement `(dx, dz)` from `self` to `other`.
        #[inline]
        pub fn horizontal_delta(&self, other: &Point3) -> (f64, f64) {
            (other.x - self.x, other.z - self.z)
        }

        /// Vertical displacement from `self` to `other`.
        #[inline]
        pub fn height_delta(&self, other: &Point3) -> f64 {
            other.y - self.y
        }
    }

    impl From<[f64; 3]> for Point3 {
        fn from(v: [f64; 3]) -> Self {
            Self::new(v[0], v[1], v[2])
        }
    }

    impl From<Point3> for [f64; 3] {
        fn from(p: Point3) -> Self {
            [p.x, p.y, p.z]
        }
    }
}

/// Charge presets and the elevation window.
pub mod charge {
    use super::constants::{CHARGE_VELOCITIES, MAX_ELEVATION_DEG, MIN_ELEVATION_DEG};

    /// A propellant charge setting: ordinal index and its fixed muzzle speed.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ChargePreset {
        pub index: u32,
        pub velocity: f64,
    }

    impl ChargePreset {
        pub const fn new(index: u32, velocity: f64) -> Self {
            Self { index, velocity }
        }

        /// Display label used by the original tables (`C0`, `C1`, ...).
        pub fn label(&self) -> String {
            format!("C{}", self.index)
        }
    }

    /// The built-in charge table, C0 through C4.
    pub fn default_charges() -> Vec<ChargePreset> {
        CHARGE_VELOCITIES
            .iter()
            .enumerate()
            .map(|(i, &v)| ChargePreset::new(i as u32, v))
            .collect()
    }

    /// Inclusive range of permitted elevation angles, in degrees.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct AngleWindow {
        pub min_deg: f64,
        pub max_deg: f64,
    }

    impl AngleWindow {
        pub const fn new(min_deg: f64, max_deg: f64) -> Self {
            Self { min_deg, max_deg }
        }

        /// True when `angle_deg` lies within the window, both bounds included.
        #[inline]
        pub fn contains(&self, angle_deg: f64) -> bool {
            self.min_deg <= angle_deg && angle_deg <= self.max_deg
        }

        /// Well-formed means finite, `0 <= min < max < 90`.
        pub fn is_well_formed(&self) -> bool {
            self.min_deg.is_finite()
                && self.max_deg.is_finite()
                && self.min_deg >= 0.0
                && self.min_deg < self.max_deg
                && self.max_deg < 90.0
        }
    }

    impl Default for AngleWindow {
        fn default() -> Self {
            Self::new(MIN_ELEVATION_DEG, MAX_ELEVATION_DEG)
        }
    }
}
