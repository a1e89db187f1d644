use super::reference_orbit::ReferenceOrbit;
use crate::flight_control::common::Vec3D;
use crate::flight_control::common::math::random_orthogonal;
use crate::host::{CelestialBody, VesselState};

/// Magnitude of the attitude probe vector projected into the orbit plane.
const ATTITUDE_OFFSET: f64 = 100.0;

/// Computes the velocity delta that swaps the supercruise pseudo velocity
/// for one tangent to a plausible circular orbit at the vessel's current
/// radius, so ambient physics can resume without a violent correction.
///
/// A reference circular orbit at the current radius reuses the pre-cruise
/// orbital orientation. The vessel's forward axis, projected onto the plane
/// perpendicular to the outward radial, picks the tangent direction; the
/// tangent is scaled to the orbit's circular speed. The resulting speed
/// matches a circular orbit at this radius, long-term stability of the
/// orbit is not guaranteed.
///
/// # Arguments
/// - `state`: The vessel state at the moment of disengage.
/// - `body`: The vessel's reference body.
/// - `sim_time`: Current simulation time in seconds.
///
/// # Returns
/// - The world-space velocity delta to apply to the vessel.
pub fn circularized_velocity_delta(
    state: &VesselState,
    body: &CelestialBody,
    sim_time: f64,
) -> Vec3D<f64> {
    let normal = state.pos - body.pos();
    let orbit = ReferenceOrbit::circular(body, normal.abs(), &state.orbit_hints, sim_time);
    let offset = state.forward * ATTITUDE_OFFSET;
    let lambda = offset.dot(normal) / normal.sqr_magnitude();
    let mut tangential = offset - normal * lambda;
    if tangential.sqr_magnitude() < 1e-12 {
        // Forward axis pointing straight along the radial leaves no usable
        // projection, pick an arbitrary tangent instead
        tangential = random_orthogonal(&mut rand::rng(), normal);
    }
    let tangential_velocity = tangential.normalize() * orbit.circular_speed();
    tangential_velocity - state.vel
}
