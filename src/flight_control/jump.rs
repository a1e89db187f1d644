use super::common::math::{LIGHT_SPEED, near_collinear, random_orthogonal};
use super::orbit::ReferenceOrbit;
use crate::config::DriveConfig;
use crate::host::{CelestialBody, OrbitHints, VesselState};
use rand::Rng;
use strum_macros::{Display, EnumIter};

/// Why a leap request was refused. Each variant maps to a distinct user
/// message; a refused leap never mutates any state.
#[derive(Debug, Clone, Copy, PartialEq, Display, EnumIter)]
pub enum JumpError {
    /// Too deep in the current body's gravity well.
    MassLocked,
    MassLimitExceeded,
    InvalidTarget,
    TargetTooSmall,
    NotAligned,
    ChargeNotReady,
    InsufficientFuel { required: f64 },
}

impl JumpError {
    pub fn user_message(&self, fuel_resource: &str) -> String {
        match self {
            Self::MassLocked => String::from("Mass Locked, cannot engage!"),
            Self::MassLimitExceeded => String::from("Vessel exceeds Mass Limit, cannot engage!"),
            Self::InvalidTarget => String::from("Cannot Leap, Invalid Target"),
            Self::TargetTooSmall => String::from("Cannot Leap, Target too small"),
            Self::NotAligned => String::from("Align with Target Destination"),
            Self::ChargeNotReady => String::from("Drive needs to be charged!"),
            Self::InsufficientFuel { required } => {
                format!("Insufficient Fuel for Jump, need {required:.0} {fuel_resource}")
            }
        }
    }
}

/// Propellant cost of a leap across `distance` meters, billed per light
/// second of straight-line distance with a flat floor.
///
/// Monotonically non-decreasing in distance, never below the configured
/// minimum.
pub fn fuel_cost(distance: f64, config: &DriveConfig) -> f64 {
    config.min_jump_fuel.max((distance / LIGHT_SPEED) * config.fuel_per_ls)
}

/// Checks every leap precondition in order, without touching any state.
///
/// # Returns
/// - The validated target body, or the first failed precondition.
pub(crate) fn check_preconditions<'a>(
    config: &DriveConfig,
    state: &VesselState,
    altitude: f64,
    clearance_floor: f64,
    target: Option<&'a CelestialBody>,
) -> Result<&'a CelestialBody, JumpError> {
    if altitude < clearance_floor {
        return Err(JumpError::MassLocked);
    }
    if state.mass > config.mass_limit {
        return Err(JumpError::MassLimitExceeded);
    }
    let target = target.ok_or(JumpError::InvalidTarget)?;
    if target.id() == state.reference_body
        || !(config.allow_non_stellar_targets || target.is_star())
    {
        return Err(JumpError::InvalidTarget);
    }
    if target.mass() < config.min_jump_target_mass {
        return Err(JumpError::TargetTooSmall);
    }
    if config.require_alignment {
        let jump_vector = target.pos() - state.pos;
        if !near_collinear(state.forward, jump_vector, config.alignment_threshold_deg) {
            return Err(JumpError::NotAligned);
        }
    }
    Ok(target)
}

/// Relocates the vessel onto a circular parking orbit at twice the target's
/// minimum orbital distance, pointing outward along the new radial.
pub(crate) fn leap_to<R: Rng>(
    state: &mut VesselState,
    target: &CelestialBody,
    sim_time: f64,
    rng: &mut R,
) {
    let orbit = ReferenceOrbit::circular(
        target,
        2.0 * target.min_orbital_distance(),
        &OrbitHints::default(),
        sim_time,
    );
    state.pos = target.pos() + orbit.position_at(sim_time);
    state.vel = orbit.velocity_at(sim_time);
    state.reference_body = target.id();
    state.orbit_hints = OrbitHints::default();
    let radial = (state.pos - target.pos()).normalize();
    state.forward = radial;
    state.up = random_orthogonal(rng, radial);
}
