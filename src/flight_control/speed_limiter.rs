use super::common::Vec3D;
use crate::host::CelestialBody;

/// Strategy for the dynamically computed cruise velocity ceiling. The two
/// curves produce materially different behavior near massive bodies and are
/// deliberately kept apart behind this one interface.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LimiterPolicy {
    /// Damps the ceiling by the summed square-rooted gravitational
    /// acceleration of all nearby non-star bodies. `limiter_factor` sets the
    /// steepness of the curve near zero influence.
    GravityDamping { limiter_factor: f64 },
    /// Scales the ceiling by the vessel's distance relative to the nearest
    /// body's sphere of influence, shrunk by `brake_factor` and shaped by
    /// `exponent`.
    SoiRatio { brake_factor: f64, exponent: f64 },
}

impl LimiterPolicy {
    /// Per-body gravitational accelerations at or below this value do not
    /// contribute to the damping sum.
    pub const NEGLIGIBLE_INFLUENCE: f64 = 1e-8;

    /// Determines the highest allowed cruise velocity for the current
    /// vessel position.
    ///
    /// Pure with respect to world state; an empty body list yields
    /// `max_speed`. The result is always within `[min_speed, max_speed]`.
    ///
    /// # Arguments
    /// - `vessel_pos`: The vessel's world position.
    /// - `bodies`: Snapshot of all gravitating bodies.
    /// - `min_speed`, `max_speed`: The cruise speed band.
    ///
    /// # Returns
    /// - The velocity ceiling in m/s.
    pub fn speed_limit(
        &self,
        vessel_pos: Vec3D<f64>,
        bodies: &[CelestialBody],
        min_speed: f64,
        max_speed: f64,
    ) -> f64 {
        match *self {
            Self::GravityDamping { limiter_factor } => {
                Self::gravity_damping_limit(vessel_pos, bodies, min_speed, max_speed, limiter_factor)
            }
            Self::SoiRatio {
                brake_factor,
                exponent,
            } => Self::soi_ratio_limit(vessel_pos, bodies, min_speed, max_speed, brake_factor, exponent),
        }
    }

    fn gravity_damping_limit(
        vessel_pos: Vec3D<f64>,
        bodies: &[CelestialBody],
        min_speed: f64,
        max_speed: f64,
        limiter_factor: f64,
    ) -> f64 {
        let x: f64 = bodies
            .iter()
            .filter(|body| !body.is_star())
            .filter_map(|body| {
                let sqr_dist = (vessel_pos - body.pos()).sqr_magnitude();
                if sqr_dist == 0.0 {
                    return None;
                }
                let rel_acc = body.grav_parameter() / sqr_dist;
                (rel_acc > Self::NEGLIGIBLE_INFLUENCE).then(|| rel_acc.sqrt())
            })
            .sum();
        let factor = 1.0 - (1.0 + limiter_factor) * x / (x + limiter_factor);
        (max_speed * factor).clamp(min_speed, max_speed)
    }

    fn soi_ratio_limit(
        vessel_pos: Vec3D<f64>,
        bodies: &[CelestialBody],
        min_speed: f64,
        max_speed: f64,
        brake_factor: f64,
        exponent: f64,
    ) -> f64 {
        let factor = bodies
            .iter()
            .filter(|body| !body.is_star())
            .map(|body| {
                let dist = (vessel_pos - body.pos()).abs();
                dist / (body.sphere_of_influence() * brake_factor)
            })
            .fold(f64::INFINITY, f64::min);
        if factor.is_infinite() {
            return max_speed;
        }
        (max_speed * factor.clamp(0.0, 1.0).powf(exponent)).clamp(min_speed, max_speed)
    }
}

impl Default for LimiterPolicy {
    fn default() -> Self {
        Self::GravityDamping {
            limiter_factor: 0.001,
        }
    }
}
