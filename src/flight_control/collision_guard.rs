use super::common::Vec3D;
use crate::host::{BodyId, CelestialBody};

/// Result of probing a projected vessel position against the known bodies.
#[derive(Debug, Clone, Copy)]
pub struct ProximityCheck {
    allowed: bool,
    nearest: Option<BodyId>,
    sqr_distance: f64,
}

impl ProximityCheck {
    pub fn allowed(&self) -> bool { self.allowed }

    pub fn nearest(&self) -> Option<BodyId> { self.nearest }

    pub fn sqr_distance(&self) -> f64 { self.sqr_distance }
}

/// Probes the projected next position against every known body. The sole
/// collision avoidance in the system; must run each tick before the position
/// is committed.
///
/// The nearest body is selected by squared distance. The move is allowed iff
/// that squared distance strictly exceeds
/// `(min_orbital_distance + margin)^2`; sitting exactly on the boundary
/// counts as an impact.
///
/// # Arguments
/// - `projected`: The candidate position for this tick.
/// - `bodies`: Snapshot of all gravitating bodies.
/// - `margin`: Extra clearance in m on top of each body's minimum orbital
///   distance.
///
/// # Returns
/// - A [`ProximityCheck`]; with no bodies the move is always allowed.
pub fn check_projected_position(
    projected: Vec3D<f64>,
    bodies: &[CelestialBody],
    margin: f64,
) -> ProximityCheck {
    let closest = bodies
        .iter()
        .map(|body| (body, (projected - body.pos()).sqr_magnitude()))
        .min_by(|(_, a), (_, b)| a.total_cmp(b));
    match closest {
        None => ProximityCheck {
            allowed: true,
            nearest: None,
            sqr_distance: f64::INFINITY,
        },
        Some((body, sqr_distance)) => {
            let floor = body.min_orbital_distance() + margin;
            ProximityCheck {
                allowed: sqr_distance > floor * floor,
                nearest: Some(body.id()),
                sqr_distance,
            }
        }
    }
}
