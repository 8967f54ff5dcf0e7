//! A single vehicle and its per-tick move step.

use tg_core::{VehicleId, VehicleRng};
use tg_grid::{Cell, Grid};

use crate::snapshot::VehicleState;

/// Result of offering a vehicle its one move for a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The drawn neighbor cell was empty; position and speed were updated.
    Moved,
    /// The drawn neighbor cell was occupied; position and speed unchanged.
    Blocked,
}

/// A vehicle: stable identity, current cell, current speed.
#[derive(Debug)]
pub struct Vehicle {
    pub id: VehicleId,
    pub cell: Cell,
    /// `0` until the first successful move, then in `[1, 4]`.
    pub speed: u8,
}

impl Vehicle {
    pub fn new(id: VehicleId, cell: Cell) -> Self {
        Self { id, cell, speed: 0 }
    }

    /// Execute this vehicle's single move for the current tick.
    ///
    /// Draws one uniform candidate from the Moore neighborhood of the
    /// current cell.  If that cell is empty the vehicle moves there and
    /// draws a new speed uniformly from `{1, 2, 3, 4}`; otherwise it stays
    /// put with its speed unchanged.  One draw, no retries: a blocked
    /// vehicle does not look for an alternative cell this tick.
    pub fn try_move(&mut self, grid: &mut Grid, rng: &mut VehicleRng) -> MoveOutcome {
        let options = grid.neighbors(self.cell);
        let Some(&target) = rng.choose(&options) else {
            // Unreachable on any validated grid (every cell has >= 3
            // neighbors at 5x5 and above); kept total for safety.
            return MoveOutcome::Blocked;
        };

        if !grid.is_empty(target) {
            return MoveOutcome::Blocked;
        }

        grid.relocate(self.cell, target);
        self.cell = target;
        self.speed = rng.gen_range(1..=4);
        MoveOutcome::Moved
    }

    /// This vehicle's contribution to a snapshot.
    pub fn state(&self) -> VehicleState {
        VehicleState {
            id: self.id.0,
            x: self.cell.x,
            y: self.cell.y,
            speed: self.speed,
        }
    }
}
