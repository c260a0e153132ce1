//! Route planning over the navigator's known map.
//!
//! Breadth-first search from the agent back to the entrance, restricted to
//! cells known to be empty and pruned of dead ends, so the actuator's
//! post-commit guard can never fire along the way. Unknown cells are never
//! traversable.

use crate::core::{Position, SensorReading};
use crate::error::{Result, TranaError};
use std::collections::{HashMap, HashSet, VecDeque};

/// Known partial map built from sensor polls.
pub type KnownMap = HashMap<Position, SensorReading>;

/// True when a known cell keeps at most one known non-wall neighbor.
/// The entrance is never a dead end.
pub fn is_dead_end(known: &KnownMap, pos: Position, entry: Position) -> bool {
    if pos == entry {
        return false;
    }
    let open = pos
        .neighbors()
        .into_iter()
        .filter(|neighbor| {
            matches!(
                known.get(neighbor),
                Some(reading) if *reading != SensorReading::Wall
            )
        })
        .count();
    open <= 1
}

/// Shortest path from `start` to `entry` through known-empty, non-dead-end
/// cells.
///
/// FIFO expansion with neighbors visited in fixed N, E, S, W order
/// guarantees minimality in the pruned graph. The result includes both
/// endpoints.
pub fn route_home(known: &KnownMap, start: Position, entry: Position) -> Result<Vec<Position>> {
    let mut queue = VecDeque::new();
    let mut seen = HashSet::new();
    let mut parent: HashMap<Position, Position> = HashMap::new();

    queue.push_back(start);
    seen.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == entry {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&previous) = parent.get(&cursor) {
                path.push(previous);
                cursor = previous;
            }
            path.reverse();
            return Ok(path);
        }

        for neighbor in current.neighbors() {
            if seen.contains(&neighbor) {
                continue;
            }
            if known.get(&neighbor) != Some(&SensorReading::Empty) {
                continue;
            }
            if is_dead_end(known, neighbor, entry) {
                continue;
            }
            seen.insert(neighbor);
            parent.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    Err(TranaError::NoPathHome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_from_rows(rows: &[&str]) -> KnownMap {
        let mut known = KnownMap::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let reading = match symbol {
                    '.' => SensorReading::Empty,
                    '@' => SensorReading::Human,
                    'X' => SensorReading::Wall,
                    _ => continue, // '?' marks cells never sensed
                };
                known.insert(Position::new(x as i32, y as i32), reading);
            }
        }
        known
    }

    #[test]
    fn straight_corridor_route() {
        let known = known_from_rows(&["XXXXX", ".....", "XXXXX"]);
        let route = route_home(&known, Position::new(4, 1), Position::new(0, 1)).unwrap();
        assert_eq!(route.len(), 5);
        assert_eq!(route[0], Position::new(4, 1));
        assert_eq!(route[4], Position::new(0, 1));
    }

    #[test]
    fn route_is_shortest_of_two_loops() {
        // Two ways around the block; the southern leg is longer.
        let known = known_from_rows(&[
            "XXXXX", //
            ".....", //
            ".XXX.", //
            ".....", //
            "XXXXX",
        ]);
        let route = route_home(&known, Position::new(4, 1), Position::new(0, 1)).unwrap();
        assert_eq!(route.len(), 5);
        assert!(route.iter().all(|pos| pos.y == 1));
    }

    #[test]
    fn dead_end_cells_are_pruned() {
        // The pocket at (3, 1) has a single open neighbor and must not be
        // routed through even though it is known empty.
        let known = known_from_rows(&[
            "XXXXX", //
            "...X.", //
            "X.XXX", //
            "X...X", //
            "XXXXX",
        ]);
        let entry = Position::new(0, 1);
        assert!(is_dead_end(&known, Position::new(4, 1), entry));
        assert!(!is_dead_end(&known, Position::new(1, 1), entry));
        assert!(!is_dead_end(&known, entry, entry));

        let route = route_home(&known, Position::new(3, 3), entry).unwrap();
        assert!(!route.contains(&Position::new(4, 1)));
        assert_eq!(route.last(), Some(&entry));
    }

    #[test]
    fn unknown_cells_are_not_traversable() {
        // A gap of never-sensed cells splits the corridor.
        let known = known_from_rows(&["XXXXX", "..?..", "XXXXX"]);
        let result = route_home(&known, Position::new(4, 1), Position::new(0, 1));
        assert!(matches!(result, Err(TranaError::NoPathHome)));
    }

    #[test]
    fn human_cells_block_the_route() {
        let known = known_from_rows(&["XXXXX", "..@..", "XXXXX"]);
        let result = route_home(&known, Position::new(4, 1), Position::new(0, 1));
        assert!(matches!(result, Err(TranaError::NoPathHome)));
    }

    #[test]
    fn trivial_route_when_already_home() {
        let known = known_from_rows(&["XXX", ".. ", "XXX"]);
        let entry = Position::new(0, 1);
        let route = route_home(&known, entry, entry).unwrap();
        assert_eq!(route, vec![entry]);
    }
}
