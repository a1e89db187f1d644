use super::body::BodyId;
use super::world::World;
use crate::config::DriveConfig;
use crate::flight_control::charge_generator::ChargeGenerator;
use crate::flight_control::common::Vec3D;
use crate::flight_control::jump::JumpError;
use crate::flight_control::leap_drive::{DriveContext, LeapDrive};
use rand::Rng;
use std::collections::HashSet;

/// Orbital orientation remembered across a cruise so the post-disengage
/// circularization can reuse the pre-cruise plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitHints {
    pub lan_deg: f64,
    pub arg_pe_deg: f64,
    pub mean_anomaly_at_epoch: f64,
}

/// The physics-facing state of a vessel, owned by the host and read/written
/// by the flight core during the vessel's own tick.
#[derive(Debug, Clone)]
pub struct VesselState {
    pub pos: Vec3D<f64>,
    pub vel: Vec3D<f64>,
    /// Unit vector along the vessel's longitudinal axis, the travel direction.
    pub forward: Vec3D<f64>,
    pub up: Vec3D<f64>,
    pub angular_vel: Vec3D<f64>,
    /// Total vessel mass in tonnes.
    pub mass: f64,
    pub reference_body: BodyId,
    /// Main throttle in `[0.0, 1.0]`.
    pub throttle: f64,
    /// Whether this vessel holds the host's input focus.
    pub active: bool,
    pub orbit_hints: OrbitHints,
}

impl VesselState {
    pub fn new(pos: Vec3D<f64>, forward: Vec3D<f64>, mass: f64, reference_body: BodyId) -> Self {
        Self {
            pos,
            vel: Vec3D::zero(),
            forward: forward.normalize(),
            up: Vec3D::new(0.0, 0.0, 1.0),
            angular_vel: Vec3D::zero(),
            mass,
            reference_body,
            throttle: 0.0,
            active: true,
            orbit_hints: OrbitHints::default(),
        }
    }

    pub fn apply_velocity_delta(&mut self, delta: Vec3D<f64>) { self.vel = self.vel + delta; }
}

/// A single propellant store with transactional debit semantics.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResourceTank {
    resource: String,
    amount: f64,
    capacity: f64,
}

impl ResourceTank {
    pub fn new(resource: &str, capacity: f64, amount: f64) -> Self {
        Self {
            resource: String::from(resource),
            amount: amount.min(capacity),
            capacity,
        }
    }

    pub fn resource(&self) -> &str { &self.resource }

    pub fn amount(&self) -> f64 { self.amount }

    pub fn capacity(&self) -> f64 { self.capacity }

    /// Drains up to `amount` units.
    ///
    /// # Returns
    /// - `true` iff the full amount was supplied.
    pub fn debit(&mut self, amount: f64) -> bool {
        let drained = amount.min(self.amount);
        self.amount -= drained;
        (drained - amount).abs() < f64::EPSILON * amount.max(1.0)
    }

    /// All-or-nothing debit: checks availability before committing, so a
    /// failed request never drains anything.
    pub fn debit_checked(&mut self, amount: f64) -> bool {
        if self.amount < amount {
            return false;
        }
        self.amount -= amount;
        true
    }

    pub fn refill(&mut self) { self.amount = self.capacity; }
}

/// Part bookkeeping for the unsafe-disengage damage rule.
#[derive(Debug, Clone)]
pub struct Hull {
    part_count: usize,
    destroyed: HashSet<usize>,
}

impl Hull {
    pub fn new(part_count: usize) -> Self {
        Self {
            part_count,
            destroyed: HashSet::new(),
        }
    }

    pub fn part_count(&self) -> usize { self.part_count }

    pub fn destroyed_count(&self) -> usize { self.destroyed.len() }

    pub fn is_intact(&self) -> bool { self.destroyed.is_empty() }

    /// Destroys up to `count` randomly chosen parts.
    pub fn explode_random_parts<R: Rng>(&mut self, rng: &mut R, count: usize) {
        if self.part_count == 0 {
            return;
        }
        for _ in 0..count {
            self.destroyed.insert(rng.random_range(0..self.part_count));
        }
    }
}

/// Snapshot of an external target entity selected for rendezvous. The flight
/// core never owns the target; the host refreshes this each tick.
#[derive(Debug, Clone)]
pub struct TargetLock {
    pub name: String,
    pub pos: Vec3D<f64>,
    pub vel: Vec3D<f64>,
    pub reference_body: BodyId,
}

/// A vessel with its mounted leap drives and the components they depend on.
/// The generator and tank are resolved once at construction and passed into
/// the drives explicitly on every call.
#[derive(Debug)]
pub struct Vessel {
    name: String,
    state: VesselState,
    tank: ResourceTank,
    generator: ChargeGenerator,
    hull: Hull,
    target: Option<TargetLock>,
    drives: Vec<LeapDrive>,
    cancel_angular_momentum: bool,
}

impl Vessel {
    pub fn new(
        name: &str,
        state: VesselState,
        tank: ResourceTank,
        generator: ChargeGenerator,
        part_count: usize,
    ) -> Self {
        Self {
            name: String::from(name),
            state,
            tank,
            generator,
            hull: Hull::new(part_count),
            target: None,
            drives: Vec::new(),
            cancel_angular_momentum: true,
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn state(&self) -> &VesselState { &self.state }

    pub fn state_mut(&mut self) -> &mut VesselState { &mut self.state }

    pub fn tank(&self) -> &ResourceTank { &self.tank }

    pub fn tank_mut(&mut self) -> &mut ResourceTank { &mut self.tank }

    pub fn generator(&self) -> &ChargeGenerator { &self.generator }

    pub fn generator_mut(&mut self) -> &mut ChargeGenerator { &mut self.generator }

    pub fn hull(&self) -> &Hull { &self.hull }

    pub fn target(&self) -> Option<&TargetLock> { self.target.as_ref() }

    pub fn set_target(&mut self, target: Option<TargetLock>) { self.target = target; }

    pub fn set_cancel_angular_momentum(&mut self, cancel: bool) {
        self.cancel_angular_momentum = cancel;
    }

    /// Mounts a drive and returns its index.
    pub fn mount_drive(&mut self, drive: LeapDrive) -> usize {
        self.drives.push(drive);
        self.drives.len() - 1
    }

    pub fn drive(&self, idx: usize) -> &LeapDrive { &self.drives[idx] }

    pub fn drive_mut(&mut self, idx: usize) -> &mut LeapDrive { &mut self.drives[idx] }

    pub fn drives(&self) -> &[LeapDrive] { &self.drives }

    /// Editor-style convenience mirroring the in-flight engage mass gate.
    pub fn within_mass_limit(&self, config: &DriveConfig) -> bool {
        self.state.mass <= config.mass_limit
    }

    /// Whether any mounted drive other than `idx` currently holds a cruise
    /// session. Re-evaluated at every engage attempt, never cached.
    fn sibling_cruising(&self, idx: usize) -> bool {
        self.drives.iter().enumerate().any(|(i, d)| i != idx && d.is_cruising())
    }

    /// Fixed-timestep update: advances the generator and every mounted drive.
    pub fn tick(&mut self, world: &mut World, dt: f64) {
        if self.cancel_angular_momentum {
            self.state.angular_vel = Vec3D::zero();
        }
        self.generator.recharge(dt);
        let Self {
            state,
            tank,
            generator,
            hull,
            target,
            drives,
            ..
        } = self;
        for drive in drives.iter_mut() {
            let mut ctx = DriveContext {
                state: &mut *state,
                tank: &mut *tank,
                generator: &mut *generator,
                hull: &mut *hull,
                target: target.as_ref(),
                world: &mut *world,
            };
            drive.tick(&mut ctx, dt);
        }
    }

    /// Toggles supercruise on the drive at `idx`, enforcing the single
    /// cruising drive per vessel rule.
    pub fn toggle_supercruise(&mut self, idx: usize, world: &mut World) {
        let sibling_cruising = self.sibling_cruising(idx);
        let Self {
            state,
            tank,
            generator,
            hull,
            target,
            drives,
            ..
        } = self;
        let mut ctx = DriveContext {
            state,
            tank,
            generator,
            hull,
            target: target.as_ref(),
            world,
        };
        drives[idx].toggle(&mut ctx, sibling_cruising);
    }

    /// Runs the hyperspace jump sequence on the drive at `idx`.
    pub fn commence_jump(
        &mut self,
        idx: usize,
        target_body: Option<BodyId>,
        world: &mut World,
    ) -> Result<(), JumpError> {
        let sibling_cruising = self.sibling_cruising(idx);
        let Self {
            state,
            tank,
            generator,
            hull,
            target,
            drives,
            ..
        } = self;
        let mut ctx = DriveContext {
            state,
            tank,
            generator,
            hull,
            target: target.as_ref(),
            world,
        };
        drives[idx].commence_jump(&mut ctx, target_body, sibling_cruising)
    }
}
