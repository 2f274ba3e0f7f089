//! Parsing for `"x, y, z"` coordinate arguments.

use mortar_calculator::Point3;

/// Parse three comma-separated numbers. Surrounding whitespace is ignored.
pub fn parse_point(input: &str) -> Result<Point3, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected three comma-separated values \"x, y, z\", got {} in '{}'",
            parts.len(),
            input
        ));
    }

    let mut values = [0.0_f64; 3];
    for (slot, (axis, part)) in values.iter_mut().zip(["x", "y", "z"].iter().zip(&parts)) {
        let value: f64 = part
            .parse()
            .map_err(|_| format!("{axis} coordinate '{part}' is not a number"))?;
        if !value.is_finite() {
            return Err(format!("{axis} coordinate '{part}' must be finite"));
        }
        *slot = value;
    }
    Ok(Point3::from(values))
}
