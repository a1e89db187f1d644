#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod host;
mod logger;

use crate::config::DriveConfig;
use crate::flight_control::common::Vec3D;
use crate::flight_control::common::units::{format_distance, format_velocity};
use crate::flight_control::{ChargeGenerator, DriveSnapshot, LeapDrive};
use crate::host::{BodyId, CelestialBody, ResourceTank, Vessel, VesselState, World};
use itertools::Itertools;

/// Fixed physics timestep in seconds.
const DT: f64 = 0.02;
/// Ticks between HUD printouts.
const HUD_EVERY: usize = 500;

fn main() {
    let (mut world, kerbin, duna) = init_system();
    let mut vessel = init_vessel(&world, kerbin);
    info!(
        "Tracking {} bodies: {}",
        world.bodies().len(),
        world.bodies().iter().map(CelestialBody::name).join(", ")
    );
    info!("{} ready, drive info:\n{}", vessel.name(), vessel.drive(0).info());

    wait_for_charge(&mut vessel, &mut world);
    vessel.state_mut().throttle = 1.0;
    vessel.toggle_supercruise(0, &mut world);
    cruise(&mut vessel, &mut world, 4_000);

    persist_roundtrip(&mut vessel);

    align_with(&mut vessel, &world, duna);
    wait_for_charge(&mut vessel, &mut world);
    match vessel.commence_jump(0, Some(duna), &mut world) {
        Ok(()) => info!("Arrived in the {} system", world.body(duna).name()),
        Err(err) => fatal!("Leap refused: {err}"),
    }
    cruise(&mut vessel, &mut world, 2_000);

    if vessel.drive(0).is_cruising() {
        vessel.toggle_supercruise(0, &mut world);
    }
    let state = vessel.state();
    info!(
        "Final state: altitude {} above {}, orbital velocity {}",
        format_distance(world.altitude_of(state)),
        world.body(state.reference_body).name(),
        format_velocity(state.vel.abs())
    );
    info!(
        "Hull: {}/{} parts intact, tank: {:.1} {} left",
        vessel.hull().part_count() - vessel.hull().destroyed_count(),
        vessel.hull().part_count(),
        vessel.tank().amount(),
        vessel.tank().resource()
    );
}

fn init_system() -> (World, BodyId, BodyId) {
    let mut world = World::new();
    world.add_body(CelestialBody::new(
        "Kerbol",
        Vec3D::zero(),
        1.1723e18,
        2.616e8,
        6.0e8,
        f64::MAX,
        1.757e28,
        true,
    ));
    let kerbin = world.add_body(CelestialBody::new(
        "Kerbin",
        Vec3D::new(1.36e10, 0.0, 0.0),
        3.5316e12,
        6.0e5,
        6.5e5,
        8.4e7,
        5.29e22,
        false,
    ));
    let duna = world.add_body(CelestialBody::new(
        "Duna",
        Vec3D::new(2.07e10, 0.0, 0.0),
        3.0136e11,
        3.2e5,
        3.5e5,
        4.8e7,
        4.515e21,
        false,
    ));
    world.add_body(CelestialBody::new(
        "Eve",
        Vec3D::new(9.83e9, 0.0, 0.0),
        8.1717e12,
        7.0e5,
        7.6e5,
        8.6e7,
        1.224e23,
        false,
    ));
    (world, kerbin, duna)
}

fn init_vessel(world: &World, kerbin: BodyId) -> Vessel {
    let body = world.body(kerbin);
    let pos = body.pos() + Vec3D::new(0.0, body.radius() + 1.0e6, 0.0);
    let state = VesselState::new(pos, Vec3D::new(0.0, 1.0, 0.0), 42.5, kerbin);
    let tank = ResourceTank::new("LiquidFuel", 8_000.0, 8_000.0);
    let generator = ChargeGenerator::new(100.0, 12.5);
    let mut vessel = Vessel::new("KSS Aurora", state, tank, generator, 55);
    let drive_config = DriveConfig {
        sc_fuel_rate: 0.08,
        min_jump_fuel: 80.0,
        fuel_per_ls: 12.0,
        ..DriveConfig::default()
    };
    vessel.mount_drive(LeapDrive::new(drive_config));
    vessel
}

fn wait_for_charge(vessel: &mut Vessel, world: &mut World) {
    // Drive state changes stop the converter, bring it back up first
    vessel.generator_mut().start();
    while !vessel.generator().is_full() {
        vessel.tick(world, DT);
        world.advance(DT);
    }
    info!("Drive charged {}", vessel.generator().charge_bar());
}

fn cruise(vessel: &mut Vessel, world: &mut World, ticks: usize) {
    for i in 0..ticks {
        vessel.tick(world, DT);
        world.advance(DT);
        if !vessel.drive(0).is_cruising() {
            warn!("Cruise ended early after {i} ticks");
            return;
        }
        if i % HUD_EVERY == 0 {
            if let Some(session) = vessel.drive(0).session() {
                let display = world.speed_display();
                log!(
                    "{} {} (limit {}, target {})",
                    display.title,
                    display.reading,
                    format_velocity(session.limit_speed()),
                    session.target_display()
                );
            }
        }
    }
}

fn persist_roundtrip(vessel: &mut Vessel) {
    let snapshot = vessel.drive(0).snapshot();
    let bytes = match snapshot.encode() {
        Ok(bytes) => bytes,
        Err(err) => fatal!("Snapshot encode failed: {err}"),
    };
    let restored = match DriveSnapshot::decode(&bytes) {
        Ok(snap) => snap,
        Err(err) => fatal!("Snapshot decode failed: {err}"),
    };
    vessel.drive_mut(0).restore(&restored);
    info!(
        "Persisted drive state ({} bytes), cruising at {}",
        bytes.len(),
        format_velocity(restored.current_speed)
    );
}

fn align_with(vessel: &mut Vessel, world: &World, target: BodyId) {
    let displacement = world.body(target).pos() - vessel.state().pos;
    vessel.state_mut().forward = displacement.normalize();
    info!(
        "Aligned with {}, {} out",
        world.body(target).name(),
        format_distance(displacement.abs())
    );
}
