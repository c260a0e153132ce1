//! trana-nav: autonomous grid search-and-rescue mission controller.
//!
//! Simulates an agent that explores an unknown rectangular grid with three
//! local proximity sensors (left, right, front), retrieves a stranded
//! occupant and carries it back to the single entrance, while a
//! hardware-safety layer vetoes any command that would collide with a
//! wall, run over the occupant, or trap a carried occupant in a dead end.
//!
//! Subsystems:
//! - [`world::GridWorld`] — ground-truth grid, mutated only by pickup/eject
//! - [`actuator::Actuator`] — validate-then-commit command layer with an
//!   append-only audit log
//! - [`exploration::Navigator`] — explore/collect/return/eject mission
//!   state machine over a sensor-derived partial map
//! - [`planning`] — dead-end-pruned breadth-first route back home

pub mod actuator;
pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod exploration;
pub mod planning;
pub mod world;

pub use actuator::Actuator;
pub use audit::{AuditLog, AuditRecord};
pub use config::TranaConfig;
pub use core::{CargoStatus, CellKind, Command, Heading, Position, SensorReading};
pub use error::{Result, TranaError};
pub use exploration::{MissionPhase, MissionReport, Navigator};
pub use world::GridWorld;
