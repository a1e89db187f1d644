use crate::flight_control::common::math::LIGHT_SPEED;
use crate::flight_control::speed_limiter::LimiterPolicy;

/// Tunables of a single leap drive module. Deserializable so hosts can ship
/// per-part configurations; every field falls back to the stock drive.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Maximum vessel mass the drive can push, in tonnes.
    pub mass_limit: f64,
    /// Minimum mass of a jump destination in kg. Keeps targets whose gravity
    /// is too weak to anchor an arrival orbit off the menu.
    pub min_jump_target_mass: f64,
    /// Flat cruise propellant drain in units per second, independent of speed.
    pub sc_fuel_rate: f64,
    /// Base cost of any jump; in-system hops would otherwise be near free.
    pub min_jump_fuel: f64,
    /// Jump propellant cost per light second of straight-line distance.
    pub fuel_per_ls: f64,
    pub fuel_resource: String,
    /// When set, any sufficiently massive body is a jump target, not just stars.
    pub allow_non_stellar_targets: bool,
    /// Whether a jump requires pointing at the destination first.
    pub require_alignment: bool,
    pub alignment_threshold_deg: f64,
    /// Re-engage supercruise right after arriving from a jump.
    pub auto_cruise_on_jump: bool,
    /// Floor of the cruise speed band in m/s.
    pub min_speed: f64,
    /// Ceiling of the cruise speed band in m/s.
    pub max_speed: f64,
    /// Exponential ramp constant per second for the velocity control loop.
    pub ramp_rate: f64,
    pub limiter: LimiterPolicy,
    /// Maximum distance at which a rendezvous target can be locked, in m.
    pub lock_range: f64,
    /// Radius of the hand-off sphere around a locked target, in m.
    pub rendezvous_distance: f64,
    /// Extra altitude margin on top of the minimum orbital clearance, in m.
    pub clearance_margin: f64,
    /// Fastest speed at which disengaging does not damage the vessel, in m/s.
    pub max_safe_disengage_speed: f64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            mass_limit: f64::MAX,
            min_jump_target_mass: 0.0,
            sc_fuel_rate: 0.0,
            min_jump_fuel: 0.0,
            fuel_per_ls: 0.0,
            fuel_resource: String::from("LiquidFuel"),
            allow_non_stellar_targets: true,
            require_alignment: true,
            alignment_threshold_deg: 5.0,
            auto_cruise_on_jump: true,
            min_speed: 30_000.0,
            max_speed: 2.0 * LIGHT_SPEED,
            ramp_rate: 0.5,
            limiter: LimiterPolicy::default(),
            lock_range: 300_000.0,
            rendezvous_distance: 8_000.0,
            clearance_margin: 10_000.0,
            max_safe_disengage_speed: 1_000_000.0,
        }
    }
}
