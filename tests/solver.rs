use mortar_calculator::primitives::charge::{AngleWindow, default_charges};
use mortar_calculator::solver::{
    BallisticConstants, NoSolution, candidate_angles, discriminant, level_range, solve_arc,
};
use proptest::prelude::*;

const G: f64 = 196.2;

#[test]
fn one_kilometre_level_shot_with_charge_three_prefers_high_arc() {
    let constants = BallisticConstants::default();
    let candidates = candidate_angles(1000.0, 0.0, 900.0, G).expect("reachable");
    let sol = solve_arc(1000.0, 0.0, 900.0, &constants).expect("in window");

    assert!((sol.elevation_deg - candidates.high_rad.to_degrees()).abs() < 1e-12);
    assert!((sol.elevation_deg - 82.991_132_542_494).abs() < 1e-9);
    assert!((sol.time_of_flight_s - 9.105_754_848_471).abs() < 1e-9);

    // Level shot: t = 2·v·sinθ/g and the range law both hold.
    let theta = sol.elevation_deg.to_radians();
    assert!((sol.time_of_flight_s - 2.0 * 900.0 * theta.sin() / G).abs() < 1e-9);
    assert!((level_range(900.0, theta, G) - 1000.0).abs() < 1e-6);
}

#[test]
fn zero_discriminant_gives_one_repeated_angle() {
    let gravity = 200.0;
    let velocity = 100.0;
    let range = velocity * velocity / gravity;
    assert_eq!(discriminant(range, 0.0, velocity, gravity), 0.0);

    let c = candidate_angles(range, 0.0, velocity, gravity).expect("tangent");
    assert!((c.low_rad - c.high_rad).abs() < 1e-12);

    let constants = BallisticConstants::new(gravity, AngleWindow::new(44.0, 46.0)).unwrap();
    let sol = solve_arc(range, 0.0, velocity, &constants).expect("45° arc");
    assert!((sol.elevation_deg - 45.0).abs() < 1e-9);
}

#[test]
fn near_zero_negative_discriminant_is_clamped() {
    // Default gravity makes v²/g inexact; the tangent point must still resolve.
    let velocity = 720.0;
    let range = velocity * velocity / G;
    let c = candidate_angles(range, 0.0, velocity, G).expect("tangent within tolerance");
    assert!((c.high_rad.to_degrees() - 45.0).abs() < 1e-3);
}

#[test]
fn both_arcs_outside_window_is_no_solution() {
    let constants = BallisticConstants::default();
    assert_eq!(
        solve_arc(50.0, 0.0, 960.0, &constants),
        Err(NoSolution::OutsideWindow)
    );
}

proptest! {
    #[test]
    fn level_solutions_round_trip_through_range_law(
        range in 1.0f64..4_700.0,
        charge in 0usize..5,
    ) {
        let velocity = default_charges()[charge].velocity;
        let constants = BallisticConstants::default();
        if let Ok(sol) = solve_arc(range, 0.0, velocity, &constants) {
            prop_assert!(constants.window().contains(sol.elevation_deg));
            let reproduced = level_range(velocity, sol.elevation_deg.to_radians(), G);
            prop_assert!((reproduced - range).abs() / range < 1e-3);
            prop_assert!(sol.time_of_flight_s.is_finite() && sol.time_of_flight_s > 0.0);
        }
    }

    #[test]
    fn solver_output_is_never_nan(
        range in 0.0f64..1.0e6,
        dy in -1.0e4f64..1.0e4,
        velocity in 1.0f64..2_000.0,
    ) {
        let constants = BallisticConstants::default();
        if let Ok(sol) = solve_arc(range, dy, velocity, &constants) {
            prop_assert!(sol.elevation_deg.is_finite());
            prop_assert!(sol.time_of_flight_s.is_finite());
            prop_assert!(constants.window().contains(sol.elevation_deg));
        }
    }
}
