//! Mission state machine: explore, collect, return, eject.
//!
//! The navigator owns the actuator and never queries the world directly;
//! its map is built purely from sensor polls. Phases run strictly forward
//! and any failure aborts the mission in place.

use crate::actuator::Actuator;
use crate::core::{Heading, Position, SensorReading};
use crate::error::{Result, TranaError};
use crate::planning::{route_home, KnownMap};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Mission phases in strict forward order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionPhase {
    Explore,
    Collect,
    Return,
    Eject,
    Done,
}

/// Outcome summary of a mission run.
#[derive(Debug)]
pub struct MissionReport {
    /// Whether the full mission completed.
    pub success: bool,
    /// Distinct cells the agent stood on.
    pub cells_visited: usize,
    /// Cells with a recorded sensor reading.
    pub cells_known: usize,
    /// Exploration moves taken (trail length).
    pub moves: usize,
    pub human_found: bool,
    pub human_collected: bool,
    pub mission_complete: bool,
    /// The aborting failure, if any.
    pub failure: Option<TranaError>,
}

/// Autonomous explore-and-rescue navigator.
pub struct Navigator {
    actuator: Actuator,
    known: KnownMap,
    visited: HashSet<Position>,
    trail: Vec<(Position, Heading)>,
    entry: Position,
    max_iterations: usize,
    phase: MissionPhase,
    human_found: bool,
    human_collected: bool,
    mission_complete: bool,
}

impl Navigator {
    /// Create a navigator around a powered-on actuator and record the spawn
    /// cell's sensors into the map.
    pub fn new(actuator: Actuator, max_iterations: usize) -> Self {
        let entry = actuator.position();
        let mut navigator = Self {
            actuator,
            known: KnownMap::new(),
            visited: HashSet::new(),
            trail: Vec::new(),
            entry,
            max_iterations,
            phase: MissionPhase::Explore,
            human_found: false,
            human_collected: false,
            mission_complete: false,
        };
        navigator.update_map();
        navigator
    }

    pub fn actuator(&self) -> &Actuator {
        &self.actuator
    }

    pub fn into_actuator(self) -> Actuator {
        self.actuator
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    /// Record the three sensor readings at their absolute positions and
    /// mark the current cell visited. Entries are only ever overwritten
    /// with the same value while the agent stands still.
    fn update_map(&mut self) {
        let position = self.actuator.position();
        let heading = self.actuator.heading();
        for direction in [heading.rotate_left(), heading.rotate_right(), heading] {
            let target = position + direction.delta();
            let reading = self.actuator.sensor_towards(direction);
            self.known.insert(target, reading);
        }
        self.visited.insert(position);
        self.known.insert(position, SensorReading::Empty);
    }

    fn traversable(&self, pos: Position) -> bool {
        matches!(
            self.known.get(&pos),
            Some(SensorReading::Empty | SensorReading::Human)
        )
    }

    /// Frontier-priority heading choice: keep going, else left, right,
    /// back. Unvisited cells win; visited ones are a fallback.
    fn choose_heading(&self) -> Option<Heading> {
        let position = self.actuator.position();
        let heading = self.actuator.heading();
        let candidates = [
            heading,
            heading.rotate_left(),
            heading.rotate_right(),
            heading.opposite(),
        ];
        for allow_visited in [false, true] {
            for &candidate in &candidates {
                let target = position + candidate.delta();
                if self.traversable(target)
                    && (allow_visited || !self.visited.contains(&target))
                {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Rotate clockwise until the heading matches, re-mapping after each
    /// quarter-turn.
    fn turn_to(&mut self, target: Heading) -> Result<()> {
        while self.actuator.heading() != target {
            self.actuator.rotate()?;
            self.update_map();
        }
        Ok(())
    }

    fn explore(&mut self) -> Result<()> {
        for _ in 0..self.max_iterations {
            self.update_map();
            if self.actuator.front_sensor() == SensorReading::Human {
                self.human_found = true;
                return Ok(());
            }

            let next = self
                .choose_heading()
                .ok_or_else(|| TranaError::Stuck(self.actuator.position()))?;
            self.turn_to(next)?;

            // The turn may have swung the front sensor onto the occupant;
            // advancing now would run it over.
            if self.actuator.front_sensor() == SensorReading::Human {
                self.human_found = true;
                return Ok(());
            }

            self.actuator.advance()?;
            self.trail
                .push((self.actuator.position(), self.actuator.heading()));
            debug!(
                "explored to {} facing {:?}",
                self.actuator.position(),
                self.actuator.heading()
            );
        }
        Err(TranaError::ExplorationExhausted(self.max_iterations))
    }

    fn collect(&mut self) -> Result<()> {
        self.actuator.pick_up()?;
        self.human_collected = true;
        Ok(())
    }

    fn return_home(&mut self) -> Result<()> {
        let route = route_home(&self.known, self.actuator.position(), self.entry)?;
        debug!("route home: {} cells", route.len());
        for &target in &route {
            let position = self.actuator.position();
            if position == target {
                continue;
            }
            // BFS adjacency guarantees a single-axis unit step.
            let heading = Heading::between(position, target).ok_or(TranaError::NoPathHome)?;
            self.turn_to(heading)?;
            self.actuator.advance()?;
            self.update_map();
        }
        Ok(())
    }

    fn eject(&mut self) -> Result<()> {
        self.actuator.eject()?;
        self.mission_complete = true;
        Ok(())
    }

    fn run_phases(&mut self) -> Result<()> {
        self.phase = MissionPhase::Explore;
        info!("phase 1: exploring for the occupant");
        self.explore()?;

        self.phase = MissionPhase::Collect;
        info!("phase 2: collecting the occupant");
        self.collect()?;

        self.phase = MissionPhase::Return;
        info!("phase 3: returning to the entrance");
        self.return_home()?;

        self.phase = MissionPhase::Eject;
        info!("phase 4: ejecting through the doorway");
        self.eject()?;

        self.phase = MissionPhase::Done;
        Ok(())
    }

    /// Run the full mission, converting any failure into the report.
    pub fn execute(&mut self) -> MissionReport {
        let failure = match self.run_phases() {
            Ok(()) => {
                info!("mission complete");
                None
            }
            Err(e) => {
                error!("mission failed during {:?}: {e}", self.phase);
                Some(e)
            }
        };
        MissionReport {
            success: failure.is_none(),
            cells_visited: self.visited.len(),
            cells_known: self.known.len(),
            moves: self.trail.len(),
            human_found: self.human_found,
            human_collected: self.human_collected,
            mission_complete: self.mission_complete,
            failure,
        }
    }
}
