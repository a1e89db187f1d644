use crate::flight_control::common::Vec3D;
use crate::host::{BodyId, CelestialBody, OrbitHints};

/// A circular zero-inclination reference orbit around one body. Used to
/// restore a plausible trajectory after a cruise and to park arrivals after
/// a leap; it is a kinematic primitive, not an integrated orbit.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ReferenceOrbit {
    body: BodyId,
    radius: f64,
    lan_deg: f64,
    arg_pe_deg: f64,
    mean_anomaly_at_epoch: f64,
    /// Simulation time the orbit was sampled at, in seconds.
    epoch: f64,
    grav_parameter: f64,
}

impl ReferenceOrbit {
    /// Builds a circular orbit of the given radius around `body`, reusing
    /// the orientation carried in `hints`.
    pub fn circular(body: &CelestialBody, radius: f64, hints: &OrbitHints, epoch: f64) -> Self {
        Self {
            body: body.id(),
            radius,
            lan_deg: hints.lan_deg,
            arg_pe_deg: hints.arg_pe_deg,
            mean_anomaly_at_epoch: hints.mean_anomaly_at_epoch,
            epoch,
            grav_parameter: body.grav_parameter(),
        }
    }

    pub fn body(&self) -> BodyId { self.body }

    pub fn radius(&self) -> f64 { self.radius }

    /// Instantaneous speed of a circular orbit at this radius.
    pub fn circular_speed(&self) -> f64 { (self.grav_parameter / self.radius).sqrt() }

    /// Mean angular rate in rad/s.
    pub fn mean_motion(&self) -> f64 {
        (self.grav_parameter / self.radius.powi(3)).sqrt()
    }

    pub fn period(&self) -> f64 { std::f64::consts::TAU / self.mean_motion() }

    /// Orbital phase angle at simulation time `t`, in radians.
    fn phase_at(&self, t: f64) -> f64 {
        (self.lan_deg + self.arg_pe_deg).to_radians()
            + self.mean_anomaly_at_epoch
            + self.mean_motion() * (t - self.epoch)
    }

    /// Position relative to the body center at simulation time `t`.
    pub fn position_at(&self, t: f64) -> Vec3D<f64> {
        let phase = self.phase_at(t);
        Vec3D::new(phase.cos(), phase.sin(), 0.0) * self.radius
    }

    /// Velocity of the orbiting point at simulation time `t`.
    pub fn velocity_at(&self, t: f64) -> Vec3D<f64> {
        let phase = self.phase_at(t);
        Vec3D::new(-phase.sin(), phase.cos(), 0.0) * self.circular_speed()
    }
}
