use super::math::LIGHT_SPEED;

/// Formats a velocity in m/s to better fit the large speeds supercruise
/// deals with: km/s below 1 Mm/s, Mm/s below 0.1c, multiples of c above.
pub fn format_velocity(vel: f64) -> String {
    if vel < 1_000_000.0 {
        format!("{:.1} km/s", vel / 1_000.0)
    } else if vel < 0.1 * LIGHT_SPEED {
        format!("{:.2} Mm/s", vel / 1_000_000.0)
    } else {
        format!("{:.2} c", vel / LIGHT_SPEED)
    }
}

/// Formats a distance in m with the same breakpoints as [`format_velocity`],
/// with light seconds as the top unit.
pub fn format_distance(dst: f64) -> String {
    let dst = dst.abs();
    if dst < 1_000_000.0 {
        format!("{:.1} km", dst / 1_000.0)
    } else if dst < 0.1 * LIGHT_SPEED {
        format!("{:.2} Mm", dst / 1_000_000.0)
    } else {
        format!("{:.2} Ls", dst / LIGHT_SPEED)
    }
}
