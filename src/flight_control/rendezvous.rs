use super::common::math::line_intersects_sphere;
use super::common::units::format_distance;
use super::common::Vec3D;
use crate::host::{CelestialBody, TargetLock};

/// Outcome of the per-tick rendezvous evaluation.
#[derive(Debug, Clone)]
pub struct RendezvousReport {
    eligible: bool,
    distance: Option<f64>,
    display: String,
}

impl RendezvousReport {
    pub fn eligible(&self) -> bool { self.eligible }

    pub fn distance(&self) -> Option<f64> { self.distance }

    /// Formatted target distance for the HUD.
    pub fn display(&self) -> &str { &self.display }

    fn no_target() -> Self {
        Self {
            eligible: false,
            distance: None,
            display: String::from("No Target"),
        }
    }
}

/// Determines whether the vessel may "lock" and drop out directly alongside
/// the selected target.
///
/// Eligible iff a target is locked, it is within `lock_range`, it orbits the
/// same reference body as the vessel, and the straight segment between
/// vessel and target stays clear of the reference body's exclusion sphere.
/// The last condition keeps a rendezvous from locking through a planet.
///
/// # Arguments
/// - `vessel_pos`: The vessel's world position.
/// - `target`: The locked target, if any.
/// - `reference_body`: The vessel's current reference body.
/// - `lock_range`: Maximum lock distance in m.
///
/// # Returns
/// - A [`RendezvousReport`] carrying eligibility and the HUD distance text.
pub fn rendezvous_check(
    vessel_pos: Vec3D<f64>,
    target: Option<&TargetLock>,
    reference_body: &CelestialBody,
    lock_range: f64,
) -> RendezvousReport {
    let Some(target) = target else {
        return RendezvousReport::no_target();
    };
    let distance = vessel_pos.euclid_distance(&target.pos);
    let in_range = distance <= lock_range && target.reference_body == reference_body.id();
    let eligible = in_range
        && !line_intersects_sphere(
            vessel_pos,
            target.pos,
            reference_body.pos(),
            reference_body.min_orbital_distance(),
        );
    RendezvousReport {
        eligible,
        distance: Some(distance),
        display: format_distance(distance),
    }
}
