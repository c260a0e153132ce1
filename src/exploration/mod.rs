//! Autonomous exploration and mission control.

mod explorer;

pub use explorer::{MissionPhase, MissionReport, Navigator};
