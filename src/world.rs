//! Ground-truth grid world and map-file loading.
//!
//! The world is the simulated environment the actuator validates commands
//! against. Navigation code never reads it directly; every piece of agent
//! knowledge flows through the actuator's sensors.
//!
//! Map files are plain text, one row per line, all rows the same width:
//! `X` wall, `.` empty, `@` occupant (exactly one), `E` entrance (exactly
//! one, on the border).

use crate::core::{CellKind, Heading, Position, SensorReading};
use crate::error::{Result, TranaError};
use std::fmt;
use std::path::Path;

/// Ground-truth rectangular grid.
///
/// Mutated only by [`collect`](GridWorld::collect) and
/// [`eject`](GridWorld::eject); everything else is a read-only query.
pub struct GridWorld {
    cells: Vec<Vec<CellKind>>,
    width: usize,
    height: usize,
    entrance: Position,
    human_origin: Position,
    human_collected: bool,
}

impl GridWorld {
    /// Parse a map from its textual form.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranaError::MapFormat("empty map".to_string()));
        }

        let lines: Vec<&str> = text.lines().collect();
        let width = lines[0].chars().count();
        let height = lines.len();

        let mut cells = Vec::with_capacity(height);
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<CellKind> = line.chars().map(CellKind::from_symbol).collect();
            if symbols.len() != width {
                return Err(TranaError::MapFormat(format!(
                    "row {} has length {}, expected {}",
                    row + 1,
                    symbols.len(),
                    width
                )));
            }
            cells.push(symbols);
        }

        let mut entrance = None;
        let mut human_origin = None;
        for (y, row) in cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match cell {
                    CellKind::Entrance => {
                        if entrance.is_some() {
                            return Err(TranaError::MapFormat(
                                "multiple entrances in map".to_string(),
                            ));
                        }
                        let on_border =
                            x == 0 || x == width - 1 || y == 0 || y == height - 1;
                        if !on_border {
                            return Err(TranaError::MapFormat(
                                "entrance must lie on the grid border".to_string(),
                            ));
                        }
                        entrance = Some(pos);
                    }
                    CellKind::Human => {
                        if human_origin.is_some() {
                            return Err(TranaError::MapFormat(
                                "multiple occupants in map".to_string(),
                            ));
                        }
                        human_origin = Some(pos);
                    }
                    _ => {}
                }
            }
        }

        let entrance = entrance
            .ok_or_else(|| TranaError::MapFormat("no entrance in map".to_string()))?;
        let human_origin = human_origin
            .ok_or_else(|| TranaError::MapFormat("no occupant in map".to_string()))?;

        Ok(Self {
            cells,
            width,
            height,
            entrance,
            human_origin,
            human_collected: false,
        })
    }

    /// Load a map from a text file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn entrance(&self) -> Position {
        self.entrance
    }

    /// Original cell of the occupant (fixed even after collection).
    pub fn human_origin(&self) -> Position {
        self.human_origin
    }

    pub fn human_collected(&self) -> bool {
        self.human_collected
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Cell type at a position. Out of bounds reads as wall; the occupant's
    /// cell reads empty once collected.
    pub fn cell_kind(&self, pos: Position) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Wall;
        }
        let cell = self.cells[pos.y as usize][pos.x as usize];
        if cell == CellKind::Human && self.human_collected && pos == self.human_origin {
            CellKind::Empty
        } else {
            cell
        }
    }

    /// Simulated proximity-sensor reading for a cell.
    pub fn sensor(&self, pos: Position) -> SensorReading {
        match self.cell_kind(pos) {
            CellKind::Wall => SensorReading::Wall,
            CellKind::Human if !self.human_collected => SensorReading::Human,
            _ => SensorReading::Empty,
        }
    }

    /// Whether the agent may occupy a cell: walls block, and so does the
    /// occupant until collected.
    pub fn can_enter(&self, pos: Position) -> bool {
        match self.cell_kind(pos) {
            CellKind::Wall => false,
            CellKind::Human => self.human_collected,
            _ => true,
        }
    }

    /// Collect the occupant. Succeeds only once and only at its original cell.
    pub fn collect(&mut self, pos: Position) -> bool {
        if self.human_collected || pos != self.human_origin {
            return false;
        }
        self.human_collected = true;
        true
    }

    /// Eject the carried occupant. The reference cell keeps reading empty
    /// for sensors; ejection does not relocate it.
    pub fn eject(&mut self) -> bool {
        if !self.human_collected {
            return false;
        }
        self.human_collected = false;
        true
    }

    /// Spawn heading, pointing into the grid from the entrance's border edge.
    /// Corner entrances resolve in top, bottom, left, right precedence.
    pub fn entry_heading(&self) -> Heading {
        if self.entrance.y == 0 {
            Heading::South
        } else if self.entrance.y as usize == self.height - 1 {
            Heading::North
        } else if self.entrance.x == 0 {
            Heading::East
        } else {
            Heading::West
        }
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_A: &str = "XXXEX\nX...X\nX.@.X\nXXXXX";

    #[test]
    fn parse_locates_entrance_and_occupant() {
        let world = GridWorld::parse(SCENARIO_A).unwrap();
        assert_eq!(world.width(), 5);
        assert_eq!(world.height(), 4);
        assert_eq!(world.entrance(), Position::new(3, 0));
        assert_eq!(world.human_origin(), Position::new(2, 2));
        assert_eq!(world.entry_heading(), Heading::South);
    }

    #[test]
    fn sensor_readings() {
        let world = GridWorld::parse(SCENARIO_A).unwrap();
        assert_eq!(world.sensor(Position::new(0, 0)), SensorReading::Wall);
        assert_eq!(world.sensor(Position::new(1, 1)), SensorReading::Empty);
        assert_eq!(world.sensor(Position::new(2, 2)), SensorReading::Human);
        // Out of bounds reads as wall
        assert_eq!(world.sensor(Position::new(-1, 0)), SensorReading::Wall);
        assert_eq!(world.sensor(Position::new(5, 1)), SensorReading::Wall);
    }

    #[test]
    fn collect_only_at_origin_and_only_once() {
        let mut world = GridWorld::parse(SCENARIO_A).unwrap();
        assert!(!world.collect(Position::new(1, 1)));
        assert!(world.collect(Position::new(2, 2)));
        assert!(world.human_collected());
        assert!(!world.collect(Position::new(2, 2)));

        // Collected cell reads empty and becomes enterable
        assert_eq!(world.sensor(Position::new(2, 2)), SensorReading::Empty);
        assert!(world.can_enter(Position::new(2, 2)));
    }

    #[test]
    fn eject_requires_collection() {
        let mut world = GridWorld::parse(SCENARIO_A).unwrap();
        assert!(!world.eject());
        world.collect(Position::new(2, 2));
        assert!(world.eject());
        assert!(!world.human_collected());
    }

    #[test]
    fn uncollected_occupant_blocks_entry() {
        let world = GridWorld::parse(SCENARIO_A).unwrap();
        assert!(!world.can_enter(Position::new(2, 2)));
        assert!(!world.can_enter(Position::new(0, 0)));
        assert!(world.can_enter(Position::new(1, 1)));
        assert!(world.can_enter(Position::new(3, 0)));
    }

    #[test]
    fn entry_heading_for_every_border() {
        let bottom = GridWorld::parse("XXX\nX@X\nXEX").unwrap();
        assert_eq!(bottom.entry_heading(), Heading::North);
        let left = GridWorld::parse("XXX\nE@X\nXXX").unwrap();
        assert_eq!(left.entry_heading(), Heading::East);
        let right = GridWorld::parse("XXX\nX@E\nXXX").unwrap();
        assert_eq!(right.entry_heading(), Heading::West);
    }

    #[test]
    fn rejects_malformed_maps() {
        assert!(matches!(
            GridWorld::parse(""),
            Err(TranaError::MapFormat(_))
        ));
        assert!(matches!(
            GridWorld::parse("XXX\nXX\nXXX"),
            Err(TranaError::MapFormat(_))
        ));
        assert!(matches!(
            GridWorld::parse("XXX\nX@X\nXXX"),
            Err(TranaError::MapFormat(_))
        ));
        assert!(matches!(
            GridWorld::parse("EXX\nX@X\nXXE"),
            Err(TranaError::MapFormat(_))
        ));
        assert!(matches!(
            GridWorld::parse("XEX\nXXX\nXXX"),
            Err(TranaError::MapFormat(_))
        ));
        // Non-border entrance
        assert!(matches!(
            GridWorld::parse("XXX\nXEX\nX@X\nXXX"),
            Err(TranaError::MapFormat(_))
        ));
    }

    #[test]
    fn display_round_trips_symbols() {
        let world = GridWorld::parse(SCENARIO_A).unwrap();
        assert_eq!(world.to_string(), SCENARIO_A);
    }
}
