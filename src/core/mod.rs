//! Shared value types: positions, headings and symbol vocabularies.

mod cell;
mod point;

pub use cell::{CargoStatus, CellKind, Command, SensorReading};
pub use point::{Heading, Position};
