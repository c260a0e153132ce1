//! Grid position and heading types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Absolute grid position (column `x`, row `y`, origin at the top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbors in fixed N, E, S, W order
    #[inline]
    pub fn neighbors(&self) -> [Position; 4] {
        Heading::ALL.map(|heading| *self + heading.delta())
    }
}

impl Add<(i32, i32)> for Position {
    type Output = Self;

    #[inline]
    fn add(self, (dx, dy): (i32, i32)) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Agent facing direction, ordered clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in fixed cardinal order (N, E, S, W)
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline]
    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Quarter-turn clockwise
    #[inline]
    pub fn rotate_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Quarter-turn counterclockwise
    #[inline]
    pub fn rotate_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Reverse heading
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Unit (dx, dy) for one step; `y` grows downward (row order)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// The heading connecting two cells that differ by one unit on a single
    /// axis. `None` for identical or non-adjacent positions.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        match (dx, dy) {
            (0, -1) => Some(Heading::North),
            (1, 0) => Some(Heading::East),
            (0, 1) => Some(Heading::South),
            (-1, 0) => Some(Heading::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_right_cycles_clockwise() {
        assert_eq!(Heading::North.rotate_right(), Heading::East);
        assert_eq!(Heading::East.rotate_right(), Heading::South);
        assert_eq!(Heading::South.rotate_right(), Heading::West);
        assert_eq!(Heading::West.rotate_right(), Heading::North);
    }

    #[test]
    fn rotate_left_inverts_rotate_right() {
        for heading in Heading::ALL {
            assert_eq!(heading.rotate_right().rotate_left(), heading);
        }
    }

    #[test]
    fn opposite_is_two_quarter_turns() {
        for heading in Heading::ALL {
            assert_eq!(heading.opposite(), heading.rotate_right().rotate_right());
        }
    }

    #[test]
    fn position_add_delta() {
        let pos = Position::new(5, 3) + Heading::North.delta();
        assert_eq!(pos, Position::new(5, 2));
        assert_eq!(pos + Heading::East.delta(), Position::new(6, 2));
    }

    #[test]
    fn neighbors_in_cardinal_order() {
        assert_eq!(
            Position::new(2, 2).neighbors(),
            [
                Position::new(2, 1),
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn heading_between_adjacent_cells() {
        let origin = Position::new(2, 2);
        assert_eq!(
            Heading::between(origin, Position::new(2, 1)),
            Some(Heading::North)
        );
        assert_eq!(
            Heading::between(origin, Position::new(3, 2)),
            Some(Heading::East)
        );
        assert_eq!(Heading::between(origin, origin), None);
        assert_eq!(Heading::between(origin, Position::new(4, 2)), None);
    }
}
