pub mod body;
pub mod notify;
pub mod vessel;
pub mod world;

pub use body::{BodyId, CelestialBody};
pub use notify::{Notifier, ScreenMessage, Severity};
pub use vessel::{Hull, OrbitHints, ResourceTank, TargetLock, Vessel, VesselState};
pub use world::{CheatFlags, TimeWarp, WarpMode, World};
