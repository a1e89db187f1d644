use crate::flight_control::common::Vec3D;

/// Index of a body inside the world's body list.
pub type BodyId = usize;

/// A gravitating body, read-only to the flight core. The host owns the list
/// and may move bodies between ticks; within one tick the data is treated as
/// a consistent snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CelestialBody {
    id: BodyId,
    name: String,
    pos: Vec3D<f64>,
    /// Standard gravitational parameter GM in m^3/s^2.
    grav_parameter: f64,
    radius: f64,
    /// Minimum survivable orbital distance from the body center.
    min_orbital_distance: f64,
    sphere_of_influence: f64,
    /// Body mass in kg.
    mass: f64,
    is_star: bool,
}

impl CelestialBody {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        pos: Vec3D<f64>,
        grav_parameter: f64,
        radius: f64,
        min_orbital_distance: f64,
        sphere_of_influence: f64,
        mass: f64,
        is_star: bool,
    ) -> Self {
        Self {
            id: 0,
            name: String::from(name),
            pos,
            grav_parameter,
            radius,
            min_orbital_distance,
            sphere_of_influence,
            mass,
            is_star,
        }
    }

    pub(crate) fn assign_id(&mut self, id: BodyId) { self.id = id; }

    pub fn id(&self) -> BodyId { self.id }

    pub fn name(&self) -> &str { &self.name }

    pub fn pos(&self) -> Vec3D<f64> { self.pos }

    pub fn grav_parameter(&self) -> f64 { self.grav_parameter }

    pub fn radius(&self) -> f64 { self.radius }

    pub fn min_orbital_distance(&self) -> f64 { self.min_orbital_distance }

    pub fn sphere_of_influence(&self) -> f64 { self.sphere_of_influence }

    pub fn mass(&self) -> f64 { self.mass }

    pub fn is_star(&self) -> bool { self.is_star }

    /// Altitude above the body surface for the minimum survivable orbit.
    pub fn clearance_floor(&self) -> f64 { self.min_orbital_distance - self.radius }

    /// Altitude of a world-space point above the body surface.
    pub fn altitude_at(&self, point: Vec3D<f64>) -> f64 {
        (point - self.pos).abs() - self.radius
    }
}
