//! Cell, sensor, cargo and command vocabularies.
//!
//! All symbols are closed enums; the `token`/`code` methods give the fixed
//! audit-log wire vocabulary.

use serde::{Deserialize, Serialize};

/// Ground-truth cell symbol in a map file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Empty,
    Human,
    Entrance,
}

impl CellKind {
    /// Parse a map-file symbol. Unrecognized characters are treated as wall.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '.' => CellKind::Empty,
            '@' => CellKind::Human,
            'E' => CellKind::Entrance,
            _ => CellKind::Wall,
        }
    }

    /// Map-file symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => 'X',
            CellKind::Empty => '.',
            CellKind::Human => '@',
            CellKind::Entrance => 'E',
        }
    }
}

/// Tri-state reading reported by a proximity sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorReading {
    Wall,
    Empty,
    Human,
}

impl SensorReading {
    /// Audit-log token.
    pub fn token(self) -> &'static str {
        match self {
            SensorReading::Wall => "PAREDE",
            SensorReading::Empty => "VAZIO",
            SensorReading::Human => "HUMANO",
        }
    }
}

/// Cargo compartment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CargoStatus {
    Empty,
    HoldingHuman,
}

impl CargoStatus {
    /// Audit-log token.
    pub fn token(self) -> &'static str {
        match self {
            CargoStatus::Empty => "SEM CARGA",
            CargoStatus::HoldingHuman => "COM HUMANO",
        }
    }
}

/// Actuator command identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PowerOn,
    Advance,
    Rotate,
    PickUp,
    Eject,
}

impl Command {
    /// Audit-log command code. Every movement command is a single letter;
    /// only the power-on record uses the long form.
    pub fn code(self) -> &'static str {
        match self {
            Command::PowerOn => "LIGAR",
            Command::Advance => "A",
            Command::Rotate => "G",
            Command::PickUp => "P",
            Command::Eject => "E",
        }
    }
}
