use super::charge_generator::ChargeGenerator;
use super::collision_guard::check_projected_position;
use super::common::math::{lerp, random_point_on_sphere};
use super::common::units::format_velocity;
use super::jump::{self, JumpError};
use super::orbit::circularized_velocity_delta;
use super::rendezvous::rendezvous_check;
use crate::config::DriveConfig;
use crate::host::{
    BodyId, Hull, ResourceTank, Severity, TargetLock, VesselState, WarpMode, World,
};
use crate::{event, log};
use strum_macros::Display;

/// Everything one drive call may touch on its vessel and host, borrowed for
/// the duration of the call. The vessel resolves these once per call; the
/// drive never goes looking for its components.
pub struct DriveContext<'a> {
    pub state: &'a mut VesselState,
    pub tank: &'a mut ResourceTank,
    pub generator: &'a mut ChargeGenerator,
    pub hull: &'a mut Hull,
    pub target: Option<&'a TargetLock>,
    pub world: &'a mut World,
}

/// Sub-state of an active cruise. `ReadyToDisengage` only reframes the HUD
/// and the disengage path, the control loop runs identically in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CruisePhase {
    Cruising,
    ReadyToDisengage,
}

/// Why a cruise ended. Forced reasons carry a user-facing emergency message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DisengageReason {
    UserToggle,
    NoFuel,
    TooClose,
    ImpactImminent,
    FocusLost,
    Jump,
}

impl DisengageReason {
    fn user_message(self) -> Option<&'static str> {
        match self {
            Self::NoFuel => Some("Emergency Drop: No Fuel"),
            Self::TooClose => Some("Emergency Drop: Too Close"),
            Self::ImpactImminent => Some("Emergency Drop: Impact Imminent"),
            Self::UserToggle | Self::FocusLost | Self::Jump => None,
        }
    }
}

/// Why an engage attempt was refused. A refused engage never creates a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngageError {
    AlreadyCruising,
    MassLimitExceeded,
    MassLocked,
    ChargeNotReady,
}

impl EngageError {
    fn user_message(self) -> Option<&'static str> {
        match self {
            Self::MassLimitExceeded => Some("Vessel exceeds mass limit, cannot engage!"),
            Self::MassLocked => Some("Mass Locked, cannot engage!"),
            Self::ChargeNotReady => Some("Drive needs to be charged!"),
            Self::AlreadyCruising => None,
        }
    }
}

/// The per-cruise working state, created on engage and torn down on
/// disengage. No session ever survives a leap.
#[derive(Debug, Clone)]
pub struct CruiseSession {
    current_speed: f64,
    desired_speed: f64,
    limit_speed: f64,
    phase: CruisePhase,
    target_display: String,
}

impl CruiseSession {
    fn fresh(min_speed: f64) -> Self {
        Self {
            current_speed: min_speed,
            desired_speed: min_speed,
            limit_speed: min_speed,
            phase: CruisePhase::Cruising,
            target_display: String::from("No Target"),
        }
    }

    pub fn current_speed(&self) -> f64 { self.current_speed }

    pub fn desired_speed(&self) -> f64 { self.desired_speed }

    pub fn limit_speed(&self) -> f64 { self.limit_speed }

    pub fn phase(&self) -> CruisePhase { self.phase }

    /// Formatted distance to the locked target for the HUD.
    pub fn target_display(&self) -> &str { &self.target_display }
}

/// The drive fields that survive save/reload. Everything else is transient
/// and rebuilt from these on restore.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DriveSnapshot {
    pub engaged: bool,
    pub current_speed: f64,
    pub desired_speed: f64,
    pub limit_speed: f64,
}

impl DriveSnapshot {
    pub fn encode(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        Ok(bincode::serde::decode_from_slice(bytes, bincode::config::standard())?.0)
    }
}

/// One leap drive module: the supercruise controller state machine plus the
/// hyperspace leap sequencer. `Idle` is simply the absence of a session.
#[derive(Debug)]
pub struct LeapDrive {
    config: DriveConfig,
    session: Option<CruiseSession>,
}

impl LeapDrive {
    pub fn new(config: DriveConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &DriveConfig { &self.config }

    pub fn is_cruising(&self) -> bool { self.session.is_some() }

    pub fn session(&self) -> Option<&CruiseSession> { self.session.as_ref() }

    /// Whether dropping out right now would stay below the structural damage
    /// threshold.
    pub fn safe_disengage(&self) -> bool {
        self.session
            .as_ref()
            .is_none_or(|s| s.current_speed < self.config.max_safe_disengage_speed)
    }

    /// Captures the persisted fields.
    pub fn snapshot(&self) -> DriveSnapshot {
        match &self.session {
            Some(s) => DriveSnapshot {
                engaged: true,
                current_speed: s.current_speed,
                desired_speed: s.desired_speed,
                limit_speed: s.limit_speed,
            },
            None => DriveSnapshot {
                engaged: false,
                current_speed: self.config.min_speed,
                desired_speed: self.config.min_speed,
                limit_speed: self.config.min_speed,
            },
        }
    }

    /// Rebuilds the drive from persisted fields. Values are clamped back
    /// into the legal band, the file may have been edited by hand.
    pub fn restore(&mut self, snapshot: &DriveSnapshot) {
        if !snapshot.engaged {
            self.session = None;
            return;
        }
        let cfg = &self.config;
        let limit = snapshot.limit_speed.clamp(cfg.min_speed, cfg.max_speed);
        let mut session = CruiseSession::fresh(cfg.min_speed);
        session.limit_speed = limit;
        session.current_speed = snapshot.current_speed.clamp(cfg.min_speed, limit);
        session.desired_speed = snapshot.desired_speed.clamp(cfg.min_speed, cfg.max_speed);
        self.session = Some(session);
    }

    /// Multi-line module capability summary for part listings.
    pub fn info(&self) -> String {
        let cfg = &self.config;
        let targets = if cfg.allow_non_stellar_targets {
            format!("Can leap to any body (with Mass > {:.2e} kg)", cfg.min_jump_target_mass)
        } else {
            String::from("Can only leap to stars")
        };
        format!(
            "Max. Vessel Mass: {:.2} t\n\nSupercruise\nMin. Speed: {}\nMax. Speed: {}\nSafe Disengage: < {}\nPropellant: {} {:.3}/sec.\n\nLeaping\n{}\nPropellant: {} minimum {:.1} or {:.1} per light sec. (whichever is greater)",
            cfg.mass_limit,
            format_velocity(cfg.min_speed),
            format_velocity(cfg.max_speed),
            format_velocity(cfg.max_safe_disengage_speed),
            cfg.fuel_resource,
            cfg.sc_fuel_rate,
            targets,
            cfg.fuel_resource,
            cfg.min_jump_fuel,
            cfg.fuel_per_ls,
        )
    }

    /// Flips between `Idle` and `Cruising`, posting the refusal reason if
    /// the engage guards fail.
    pub fn toggle(&mut self, ctx: &mut DriveContext, sibling_cruising: bool) {
        if self.session.is_some() {
            self.disengage(ctx, DisengageReason::UserToggle);
        } else {
            let _ = self.engage(ctx, sibling_cruising);
        }
    }

    /// Attempts the `Idle -> Cruising` transition.
    pub fn engage(
        &mut self,
        ctx: &mut DriveContext,
        sibling_cruising: bool,
    ) -> Result<(), EngageError> {
        let result = self.engage_guarded(ctx, sibling_cruising, false);
        if let Err(err) = result {
            if let Some(msg) = err.user_message() {
                ctx.world.notify(msg, Severity::Alert);
            }
        }
        result
    }

    fn engage_guarded(
        &mut self,
        ctx: &mut DriveContext,
        sibling_cruising: bool,
        bypass_charge_gate: bool,
    ) -> Result<(), EngageError> {
        // At most one active session per vessel, checked at the attempt
        if sibling_cruising || self.session.is_some() {
            return Err(EngageError::AlreadyCruising);
        }
        if ctx.state.mass > self.config.mass_limit {
            return Err(EngageError::MassLimitExceeded);
        }
        let altitude = ctx.world.altitude_of(ctx.state);
        let floor = ctx.world.body(ctx.state.reference_body).clearance_floor();
        if altitude < floor + self.config.clearance_margin {
            return Err(EngageError::MassLocked);
        }
        if !bypass_charge_gate && !ctx.generator.is_full() {
            return Err(EngageError::ChargeNotReady);
        }
        ctx.generator.stop();
        let session = CruiseSession::fresh(self.config.min_speed);
        Self::update_speed_display(&session, ctx.world);
        self.session = Some(session);
        log!("Supercruise engaged");
        Ok(())
    }

    /// Ends the cruise for the given reason. A no-op while idle.
    pub fn disengage(&mut self, ctx: &mut DriveContext, reason: DisengageReason) {
        if let Some(session) = self.session.take() {
            self.finish_session(session, ctx, reason);
        }
    }

    /// Fixed-timestep update. Runs the cruise control loop while a session
    /// exists; any failed guard forces a disengage with its reason.
    pub fn tick(&mut self, ctx: &mut DriveContext, dt: f64) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        match self.cruise_step(&mut session, ctx, dt) {
            Ok(()) => self.session = Some(session),
            Err(reason) => self.finish_session(session, ctx, reason),
        }
    }

    fn cruise_step(
        &self,
        session: &mut CruiseSession,
        ctx: &mut DriveContext,
        dt: f64,
    ) -> Result<(), DisengageReason> {
        let cfg = &self.config;
        if !ctx.state.active {
            return Err(DisengageReason::FocusLost);
        }
        if !ctx.world.cheats().infinite_propellant && !ctx.tank.debit(cfg.sc_fuel_rate * dt) {
            return Err(DisengageReason::NoFuel);
        }
        let altitude = ctx.world.altitude_of(ctx.state);
        let floor = ctx.world.body(ctx.state.reference_body).clearance_floor();
        if altitude < floor + cfg.clearance_margin {
            return Err(DisengageReason::TooClose);
        }

        session.limit_speed = cfg.limiter.speed_limit(
            ctx.state.pos,
            ctx.world.bodies(),
            cfg.min_speed,
            cfg.max_speed,
        );
        session.desired_speed =
            (ctx.state.throttle * session.limit_speed).clamp(cfg.min_speed, cfg.max_speed);
        // Prior speed may come from an edited save, clamp before ramping
        let prior = session.current_speed.clamp(cfg.min_speed, cfg.max_speed);
        session.current_speed = lerp(prior, session.desired_speed, cfg.ramp_rate * dt)
            .clamp(cfg.min_speed, session.limit_speed);

        let projected = ctx.state.pos + ctx.state.forward * (session.current_speed * dt);
        let check = check_projected_position(projected, ctx.world.bodies(), cfg.clearance_margin);
        if !check.allowed() {
            return Err(DisengageReason::ImpactImminent);
        }
        ctx.state.pos = projected;

        let report = rendezvous_check(
            ctx.state.pos,
            ctx.target,
            ctx.world.body(ctx.state.reference_body),
            cfg.lock_range,
        );
        session.phase = if report.eligible() {
            CruisePhase::ReadyToDisengage
        } else {
            CruisePhase::Cruising
        };
        session.target_display = String::from(report.display());

        // Cruise must not compound with the host's own on-rails warp
        if ctx.world.is_time_accelerated() && ctx.world.warp().mode() != WarpMode::Low {
            ctx.world.request_normal_rate();
        }
        ctx.world.lock_staging();
        Self::update_speed_display(session, ctx.world);
        event!(
            "Cruise tick: v={} limit={} tgt={}",
            format_velocity(session.current_speed),
            format_velocity(session.limit_speed),
            session.target_display
        );
        Ok(())
    }

    fn finish_session(
        &mut self,
        session: CruiseSession,
        ctx: &mut DriveContext,
        reason: DisengageReason,
    ) {
        if let Some(msg) = reason.user_message() {
            ctx.world.notify(msg, Severity::Alert);
        }
        log!("Supercruise disengaged ({reason})");
        ctx.generator.stop();
        ctx.world.release_stage_lock();
        let display = ctx.world.speed_display_mut();
        display.title = String::from("Orbit Velocity:");
        display.reading.clear();
        if reason == DisengageReason::Jump {
            // The leap sequencer repositions the vessel itself
            return;
        }
        let mut rng = rand::rng();
        match (session.phase, ctx.target) {
            (CruisePhase::ReadyToDisengage, Some(target)) => {
                ctx.state.pos =
                    random_point_on_sphere(&mut rng, target.pos, self.config.rendezvous_distance);
                ctx.state.vel = target.vel;
            }
            _ => {
                let delta = circularized_velocity_delta(
                    ctx.state,
                    ctx.world.body(ctx.state.reference_body),
                    ctx.world.sim_time(),
                );
                ctx.state.apply_velocity_delta(delta);
            }
        }
        if session.current_speed > self.config.max_safe_disengage_speed
            && !ctx.world.cheats().no_crash_damage
        {
            ctx.world.notify("Unsafe Disengage, too fast!", Severity::Critical);
            let count = 3.max(ctx.hull.part_count() / 20);
            ctx.hull.explode_random_parts(&mut rng, count);
        }
    }

    /// Runs the hyperspace leap sequence. Every failed precondition aborts
    /// with a distinct user message and no state change.
    pub fn commence_jump(
        &mut self,
        ctx: &mut DriveContext,
        target_body: Option<BodyId>,
        sibling_cruising: bool,
    ) -> Result<(), JumpError> {
        let result = self.jump_guarded(ctx, target_body, sibling_cruising);
        if let Err(err) = &result {
            ctx.world.notify(
                err.user_message(&self.config.fuel_resource),
                Severity::Alert,
            );
        }
        result
    }

    fn jump_guarded(
        &mut self,
        ctx: &mut DriveContext,
        target_body: Option<BodyId>,
        sibling_cruising: bool,
    ) -> Result<(), JumpError> {
        let cfg = &self.config;
        let altitude = ctx.world.altitude_of(ctx.state);
        let floor = ctx.world.body(ctx.state.reference_body).clearance_floor();
        let target = target_body.and_then(|id| ctx.world.bodies().get(id));
        let target = jump::check_preconditions(cfg, ctx.state, altitude, floor, target)?;
        let required = jump::fuel_cost((target.pos() - ctx.state.pos).abs(), cfg);
        if !ctx.generator.is_full() {
            return Err(JumpError::ChargeNotReady);
        }
        if !ctx.world.cheats().infinite_propellant && !ctx.tank.debit_checked(required) {
            return Err(JumpError::InsufficientFuel { required });
        }
        let target = target.clone();
        ctx.generator.stop();
        self.disengage(ctx, DisengageReason::Jump);
        let mut rng = rand::rng();
        jump::leap_to(ctx.state, &target, ctx.world.sim_time(), &mut rng);
        log!("Hyperspace leap to {} complete", target.name());
        if self.config.auto_cruise_on_jump {
            // The leap consumed the charge, arriving drives skip the gate
            if let Err(err) = self.engage_guarded(ctx, sibling_cruising, true) {
                log!("Post-leap supercruise not engaged ({err})");
            }
        }
        Ok(())
    }

    fn update_speed_display(session: &CruiseSession, world: &mut World) {
        let display = world.speed_display_mut();
        display.title = match session.phase {
            CruisePhase::Cruising => String::from("Cruise Velocity:"),
            CruisePhase::ReadyToDisengage => String::from("[Disengage]"),
        };
        display.reading = format_velocity(session.current_speed);
    }
}
