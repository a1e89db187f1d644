use super::body::{BodyId, CelestialBody};
use super::notify::{Notifier, ScreenMessage, Severity};
use super::vessel::VesselState;
use crate::fatal;

/// Host time-warp modes. `Low` (physical warp) is compatible with cruising,
/// `High` (on-rails warp) is not and gets suppressed each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpMode {
    High,
    Low,
}

/// The host's time acceleration state.
#[derive(Debug, Clone, Copy)]
pub struct TimeWarp {
    rate_index: u8,
    mode: WarpMode,
}

impl TimeWarp {
    pub fn rate_index(&self) -> u8 { self.rate_index }

    pub fn mode(&self) -> WarpMode { self.mode }

    pub fn set_rate_index(&mut self, index: u8) { self.rate_index = index; }

    pub fn set_mode(&mut self, mode: WarpMode) { self.mode = mode; }

    pub fn is_accelerated(&self) -> bool { self.rate_index != 0 }
}

impl Default for TimeWarp {
    fn default() -> Self {
        Self {
            rate_index: 0,
            mode: WarpMode::High,
        }
    }
}

/// Host cheat toggles mirrored by the flight core.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheatFlags {
    pub infinite_propellant: bool,
    pub no_crash_damage: bool,
}

/// The cruise velocity readout on the host HUD.
#[derive(Debug, Clone, Default)]
pub struct SpeedDisplay {
    pub title: String,
    pub reading: String,
}

/// The simulated host environment: the gravitating bodies, the simulation
/// clock, time-warp state, cheat flags and the notification sink. Bodies are
/// a consistent snapshot for the duration of one tick.
#[derive(Debug, Default)]
pub struct World {
    bodies: Vec<CelestialBody>,
    sim_time: f64,
    warp: TimeWarp,
    cheats: CheatFlags,
    notifier: Notifier,
    stage_lock: bool,
    speed_display: SpeedDisplay,
}

impl World {
    pub fn new() -> Self { Self::default() }

    /// Registers a body and returns its id.
    pub fn add_body(&mut self, mut body: CelestialBody) -> BodyId {
        let id = self.bodies.len();
        body.assign_id(id);
        self.bodies.push(body);
        id
    }

    pub fn bodies(&self) -> &[CelestialBody] { &self.bodies }

    pub fn body(&self, id: BodyId) -> &CelestialBody {
        self.bodies.get(id).unwrap_or_else(|| fatal!("Unknown body id {id}"))
    }

    pub fn body_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// Altitude of the vessel above its reference body's surface.
    pub fn altitude_of(&self, state: &VesselState) -> f64 {
        self.body(state.reference_body).altitude_at(state.pos)
    }

    pub fn sim_time(&self) -> f64 { self.sim_time }

    pub fn advance(&mut self, dt: f64) { self.sim_time += dt; }

    pub fn warp(&self) -> &TimeWarp { &self.warp }

    pub fn warp_mut(&mut self) -> &mut TimeWarp { &mut self.warp }

    pub fn is_time_accelerated(&self) -> bool { self.warp.is_accelerated() }

    /// Drops the host back to the normal time rate.
    pub fn request_normal_rate(&mut self) { self.warp.set_rate_index(0); }

    pub fn cheats(&self) -> CheatFlags { self.cheats }

    pub fn cheats_mut(&mut self) -> &mut CheatFlags { &mut self.cheats }

    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        self.notifier.post(text, severity);
    }

    pub fn drain_notifications(&mut self) -> Vec<ScreenMessage> { self.notifier.drain() }

    pub fn last_notification(&self) -> Option<&ScreenMessage> { self.notifier.last() }

    /// Blocks staging input while cruising.
    pub fn lock_staging(&mut self) { self.stage_lock = true; }

    pub fn release_stage_lock(&mut self) { self.stage_lock = false; }

    pub fn stage_locked(&self) -> bool { self.stage_lock }

    pub fn speed_display(&self) -> &SpeedDisplay { &self.speed_display }

    pub fn speed_display_mut(&mut self) -> &mut SpeedDisplay { &mut self.speed_display }
}
