//! Horizontal range and compass bearing between a launch point and a target.
//!
//! Bearings are `atan2(dz, dx)` rotated back by 90° and wrapped into `[0, 360)`, so 0° lies
//! along +z and 90° along -x.
use mortar_core::units::{normalize_degrees, rad_to_deg};
use mortar_core::vector::Point3;

/// Bearing reported when launch and target share the same horizontal position.
///
/// `atan2(0, 0)` is taken as 0°, which maps to -90° and wraps to 270°.
pub const COINCIDENT_BEARING_DEG: f64 = 270.0;

/// Whether callers want the reciprocal heading alongside the primary bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearingMode {
    /// Primary bearing only.
    Single,
    /// Primary bearing plus its reciprocal.
    #[default]
    Dual,
}

/// Primary bearing and, in dual mode, the reciprocal heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearings {
    pub primary_deg: f64,
    pub secondary_deg: Option<f64>,
}

/// Distance between the two points projected onto the horizontal (x, z) plane.
pub fn horizontal_range(launch: &Point3, target: &Point3) -> f64 {
    let (dx, dz) = launch.horizontal_delta(target);
    dx.hypot(dz)
}

/// Compass bearing from `launch` towards `target`, in `[0, 360)`.
pub fn bearing(launch: &Point3, target: &Point3) -> f64 {
    let (dx, dz) = launch.horizontal_delta(target);
    if dx == 0.0 && dz == 0.0 {
        return COINCIDENT_BEARING_DEG;
    }
    let mut degrees = rad_to_deg(dz.atan2(dx)) - 90.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    normalize_degrees(degrees)
}

/// Opposite heading: `(bearing + 180) mod 360`.
pub fn reciprocal_bearing(bearing_deg: f64) -> f64 {
    normalize_degrees((bearing_deg + 180.0) % 360.0)
}

/// Compute the bearing(s) requested by `mode`.
pub fn bearings(launch: &Point3, target: &Point3, mode: BearingMode) -> Bearings {
    let primary_deg = bearing(launch, target);
    let secondary_deg = match mode {
        BearingMode::Single => None,
        BearingMode::Dual => Some(reciprocal_bearing(primary_deg)),
    };
    Bearings {
        primary_deg,
        secondary_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    #[test]
    fn range_ignores_vertical_axis() {
        let target = Point3::new(300.0, 750.0, 400.0);
        assert!((horizontal_range(&ORIGIN, &target) - 500.0).abs() < 1e-12);
    }

    #[test]
    fn cardinal_bearings() {
        // +z is 0°, +x is 270° under the rotated convention
        assert!((bearing(&ORIGIN, &Point3::new(0.0, 0.0, 10.0)) - 0.0).abs() < 1e-12);
        assert!((bearing(&ORIGIN, &Point3::new(-10.0, 0.0, 0.0)) - 90.0).abs() < 1e-12);
        assert!((bearing(&ORIGIN, &Point3::new(0.0, 0.0, -10.0)) - 180.0).abs() < 1e-12);
        assert!((bearing(&ORIGIN, &Point3::new(10.0, 0.0, 0.0)) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_use_documented_bearing() {
        let p = Point3::new(12.5, -3.0, 99.0);
        let q = Point3::new(12.5, 40.0, 99.0);
        assert_eq!(bearing(&p, &q), COINCIDENT_BEARING_DEG);
        let b = bearings(&p, &q, BearingMode::Dual);
        assert_eq!(b.secondary_deg, Some(90.0));
    }

    #[test]
    fn single_mode_omits_reciprocal() {
        let b = bearings(&ORIGIN, &Point3::new(5.0, 0.0, 5.0), BearingMode::Single);
        assert!(b.secondary_deg.is_none());
    }

    #[test]
    fn reciprocal_wraps_past_north() {
        assert_eq!(reciprocal_bearing(270.0), 90.0);
        assert_eq!(reciprocal_bearing(0.0), 180.0);
        assert_eq!(reciprocal_bearing(180.0), 0.0);
    }
}
