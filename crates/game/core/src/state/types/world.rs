//! Grid model: cells, occupancy, power-up placement, range queries, growth.
//!
//! The grid owns walkability, occupancy, and power-up placement per cell.
//! Actor positions live on the actors themselves; the state-level placement
//! helpers keep both views in lockstep.

use crate::error::GridError;

use super::{EntityId, Position};

/// A consumable pickup sitting on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerUp {
    /// Bonus power granted on pickup.
    pub amount: u32,
    /// Full turn cycles before the pickup despawns.
    pub despawn_in: u32,
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub position: Position,
    pub walkable: bool,
    pub occupant: Option<EntityId>,
    pub power_up: Option<PowerUp>,
}

impl Cell {
    fn open(position: Position) -> Self {
        Self {
            position,
            walkable: true,
            occupant: None,
            power_up: None,
        }
    }

    /// A cell an actor may step onto right now.
    pub fn is_free(&self) -> bool {
        self.walkable && self.occupant.is_none()
    }
}

/// Row-major rectangular grid anchored at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a fully walkable, empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::open(Position::new(x, y))))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y as usize) * (self.width as usize) + position.x as usize)
    }

    /// Cell lookup. Out-of-bounds coordinates resolve to `None`, never panic.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).map(|i| &mut self.cells[i])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All in-bounds cells within Manhattan distance `range` of `origin`,
    /// the origin cell included. With `free_only`, keeps only cells that are
    /// walkable and unoccupied.
    ///
    /// Scan order is x-major: for each dx in `-range..=range`, dy ascending.
    /// Callers that break ties by first encounter depend on this order.
    pub fn cells_in_range(&self, origin: Position, range: u32, free_only: bool) -> Vec<Position> {
        let r = range as i32;
        let mut out = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                if dx.abs() + dy.abs() > r {
                    continue;
                }
                let pos = origin.offset(dx, dy);
                let Some(cell) = self.cell(pos) else { continue };
                if free_only && !cell.is_free() {
                    continue;
                }
                out.push(pos);
            }
        }
        out
    }

    /// The in-bounds cells in the Chebyshev box of the given radius around
    /// `origin`, the origin excluded.
    pub fn neighbors(&self, origin: Position, radius: u32) -> Vec<Position> {
        let r = radius as i32;
        let mut out = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let pos = origin.offset(dx, dy);
                if self.in_bounds(pos) {
                    out.push(pos);
                }
            }
        }
        out
    }

    pub fn set_walkable(&mut self, position: Position, walkable: bool) -> bool {
        match self.cell_mut(position) {
            Some(cell) => {
                cell.walkable = walkable;
                true
            }
            None => false,
        }
    }

    /// Marks a cell occupied. Returns false if out of bounds.
    pub fn set_occupied(&mut self, position: Position, id: EntityId) -> bool {
        match self.cell_mut(position) {
            Some(cell) => {
                cell.occupant = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn clear_occupied(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.occupant = None;
        }
    }

    pub fn occupant(&self, position: Position) -> Option<EntityId> {
        self.cell(position).and_then(|c| c.occupant)
    }

    /// Drops a power-up on a cell. Fails out of bounds or when the cell
    /// already holds one.
    pub fn place_power_up(&mut self, position: Position, power_up: PowerUp) -> bool {
        match self.cell_mut(position) {
            Some(cell) if cell.power_up.is_none() => {
                cell.power_up = Some(power_up);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the power-up at `position`, if any.
    pub fn take_power_up(&mut self, position: Position) -> Option<PowerUp> {
        self.cell_mut(position).and_then(|c| c.power_up.take())
    }

    /// Counts every placed power-up down one turn cycle and removes the ones
    /// that hit zero. Returns the positions that despawned.
    pub fn tick_power_ups(&mut self) -> Vec<Position> {
        let mut expired = Vec::new();
        for cell in &mut self.cells {
            if let Some(power_up) = &mut cell.power_up {
                power_up.despawn_in = power_up.despawn_in.saturating_sub(1);
                if power_up.despawn_in == 0 {
                    cell.power_up = None;
                    expired.push(cell.position);
                }
            }
        }
        expired
    }

    /// Grows the grid to `new_width` x `new_height`, re-centering existing
    /// content. Both dimensions must be at least the current size and one
    /// must strictly grow.
    ///
    /// Returns the offset old content was shifted by, so callers can shift
    /// actor and trap positions to match.
    pub fn expand(&mut self, new_width: u32, new_height: u32) -> Result<Position, GridError> {
        let grows = new_width > self.width || new_height > self.height;
        if new_width < self.width || new_height < self.height || !grows {
            return Err(GridError::NotLarger {
                current: (self.width, self.height),
                requested: (new_width, new_height),
            });
        }

        let offset = Position::new(
            ((new_width - self.width) / 2) as i32,
            ((new_height - self.height) / 2) as i32,
        );

        let mut grown = Grid::new(new_width, new_height);
        for cell in &self.cells {
            let shifted = cell.position + offset;
            // Always in bounds: offset places the old rectangle inside the new one.
            if let Some(target) = grown.cell_mut(shifted) {
                target.walkable = cell.walkable;
                target.occupant = cell.occupant;
                target.power_up = cell.power_up;
            }
        }
        *self = grown;
        Ok(offset)
    }
}
