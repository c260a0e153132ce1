//! Safety-critical actuator layer.
//!
//! Owns the agent's position, heading and cargo state, and validates every
//! commanded action against the ground-truth world before committing it.
//! A rejected command leaves state untouched; a committed command appends
//! exactly one audit record.
//!
//! Two independent dead-end guards protect a carried occupant:
//! - a predictive check before an advance commits, counting the target
//!   cell's open ground-truth exits, and
//! - a post-commit check after advance and rotate, tripping when all three
//!   proximity sensors face walls.
//!
//! They use different heuristics (topological neighbor count vs. the
//! instantaneous sensor triad) and are kept separate on purpose.

use crate::audit::{AuditLog, AuditRecord};
use crate::core::{CargoStatus, Command, Heading, Position, SensorReading};
use crate::error::{Result, TranaError};
use crate::world::GridWorld;
use tracing::debug;

/// Actuator and safety layer for the rescue agent.
pub struct Actuator {
    world: GridWorld,
    log: AuditLog,
    position: Position,
    heading: Heading,
    carrying: bool,
    entry_heading: Heading,
    exit_heading: Heading,
}

impl Actuator {
    /// Power the agent on at the entrance, facing into the grid, and record
    /// the power-on audit line from the spawn-time sensors.
    pub fn power_on(world: GridWorld) -> Self {
        let position = world.entrance();
        let entry_heading = world.entry_heading();
        let mut actuator = Self {
            world,
            log: AuditLog::new(),
            position,
            heading: entry_heading,
            carrying: false,
            entry_heading,
            exit_heading: entry_heading.opposite(),
        };
        actuator.record(Command::PowerOn);
        actuator
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn carrying(&self) -> bool {
        self.carrying
    }

    pub fn cargo_status(&self) -> CargoStatus {
        if self.carrying {
            CargoStatus::HoldingHuman
        } else {
            CargoStatus::Empty
        }
    }

    /// Heading faced at spawn, pointing into the grid.
    pub fn entry_heading(&self) -> Heading {
        self.entry_heading
    }

    /// Opposite of the spawn heading, pointing out through the doorway.
    pub fn exit_heading(&self) -> Heading {
        self.exit_heading
    }

    pub fn audit(&self) -> &AuditLog {
        &self.log
    }

    pub fn into_audit(self) -> AuditLog {
        self.log
    }

    fn at_entrance(&self) -> bool {
        self.position == self.world.entrance()
    }

    /// Read the sensor pointing in an absolute direction.
    ///
    /// At the entrance the doorway reads open: the exit-facing sensor is
    /// forced empty regardless of ground truth, so the spawn cell never
    /// looks like a dead end.
    pub fn sensor_towards(&self, direction: Heading) -> SensorReading {
        if self.at_entrance() && direction == self.exit_heading {
            return SensorReading::Empty;
        }
        self.world.sensor(self.position + direction.delta())
    }

    pub fn left_sensor(&self) -> SensorReading {
        self.sensor_towards(self.heading.rotate_left())
    }

    pub fn right_sensor(&self) -> SensorReading {
        self.sensor_towards(self.heading.rotate_right())
    }

    pub fn front_sensor(&self) -> SensorReading {
        self.sensor_towards(self.heading)
    }

    fn record(&mut self, command: Command) {
        self.log.append(AuditRecord {
            command,
            left: self.left_sensor(),
            right: self.right_sensor(),
            front: self.front_sensor(),
            cargo: self.cargo_status(),
        });
    }

    /// Count the ground-truth non-wall neighbors of a cell. Pure: evaluates
    /// a hypothetical position without touching live state.
    fn open_exit_count(&self, pos: Position) -> usize {
        pos.neighbors()
            .iter()
            .filter(|&&neighbor| self.world.sensor(neighbor) != SensorReading::Wall)
            .count()
    }

    /// Post-commit guard: a carried occupant must never end up boxed in
    /// with all three sensors facing walls. Vacuous at the entrance.
    fn check_boxed_in(&self) -> Result<()> {
        if !self.carrying || self.at_entrance() {
            return Ok(());
        }
        let walls = [self.left_sensor(), self.right_sensor(), self.front_sensor()]
            .iter()
            .filter(|&&reading| reading == SensorReading::Wall)
            .count();
        if walls == 3 {
            return Err(TranaError::DeadEndTrap(self.position));
        }
        Ok(())
    }

    /// Advance one cell in the current heading.
    pub fn advance(&mut self) -> Result<()> {
        if self.carrying && self.at_entrance() {
            return Err(TranaError::InvalidOperation(
                "carrying at the entrance: eject before advancing".to_string(),
            ));
        }

        let target = self.position + self.heading.delta();
        let target_is_entrance = target == self.world.entrance();

        if !self.world.can_enter(target) {
            let alarm = match self.world.sensor(target) {
                SensorReading::Human => TranaError::RunOver(target),
                _ => TranaError::Collision(target),
            };
            debug!("advance vetoed: {alarm}");
            return Err(alarm);
        }

        // Predictive guard: a carried occupant may only be driven into
        // cells that keep at least two open exits.
        if self.carrying && !target_is_entrance && self.open_exit_count(target) <= 1 {
            debug!("advance vetoed: {target} is a dead end");
            return Err(TranaError::DeadEndTrap(target));
        }

        self.position = target;
        if self.carrying && target_is_entrance {
            // Arriving home with cargo always faces back into the grid.
            self.heading = self.entry_heading;
        }
        self.check_boxed_in()?;
        self.record(Command::Advance);
        Ok(())
    }

    /// Rotate a quarter-turn clockwise.
    pub fn rotate(&mut self) -> Result<()> {
        self.heading = self.heading.rotate_right();
        self.check_boxed_in()?;
        self.record(Command::Rotate);
        Ok(())
    }

    /// Pick up the occupant in the cell directly ahead.
    pub fn pick_up(&mut self) -> Result<()> {
        if self.carrying {
            return Err(TranaError::InvalidOperation(
                "already holding the occupant".to_string(),
            ));
        }
        if self.front_sensor() != SensorReading::Human {
            return Err(TranaError::InvalidOperation(
                "no occupant directly ahead to pick up".to_string(),
            ));
        }
        let target = self.position + self.heading.delta();
        if !self.world.collect(target) {
            return Err(TranaError::InvalidOperation(
                "world rejected the pick-up".to_string(),
            ));
        }
        self.carrying = true;
        self.record(Command::PickUp);
        Ok(())
    }

    /// Eject the carried occupant through the doorway. Only valid at the
    /// entrance; rotates (logged quarter-turns) until facing out first.
    pub fn eject(&mut self) -> Result<()> {
        if !self.carrying {
            return Err(TranaError::InvalidOperation(
                "no occupant to eject".to_string(),
            ));
        }
        if !self.at_entrance() {
            return Err(TranaError::InvalidOperation(
                "eject is only possible at the entrance".to_string(),
            ));
        }
        while self.heading != self.exit_heading {
            self.rotate()?;
        }
        if !self.world.eject() {
            return Err(TranaError::InvalidOperation(
                "world rejected the eject".to_string(),
            ));
        }
        self.carrying = false;
        self.record(Command::Eject);
        Ok(())
    }
}
