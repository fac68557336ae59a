use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::grid::{Cell, GridBounds};

/// Random samples tried before falling back to scanning for free cells.
pub const MAX_RANDOM_ATTEMPTS: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cell left on a {width}x{height} board")]
    BoardFull { width: i32, height: i32 },
}

/// The single food item on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn touched(&self, head: Cell) -> bool {
        self.cell == head
    }

    /// Moves the food to a uniformly chosen cell not in `occupied`.
    ///
    /// On a full board the position is left untouched.
    pub fn spawn<R: Rng>(
        &mut self,
        bounds: GridBounds,
        occupied: &[Cell],
        rng: &mut R,
    ) -> Result<Cell, SpawnError> {
        let full = SpawnError::BoardFull { width: bounds.width, height: bounds.height };
        if bounds.cell_count() == 0 {
            return Err(full);
        }
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let cell = Cell::new(rng.gen_range(0..bounds.width), rng.gen_range(0..bounds.height));
            if !occupied.contains(&cell) {
                return Ok(self.place(cell));
            }
        }

        // Crowded board: pick among what is left
        let free: Vec<Cell> = bounds.cells().filter(|c| !occupied.contains(c)).collect();
        match free.choose(rng) {
            Some(&cell) => Ok(self.place(cell)),
            None => Err(full),
        }
    }

    fn place(&mut self, cell: Cell) -> Cell {
        debug!("food spawned at ({}, {})", cell.x, cell.y);
        self.cell = cell;
        cell
    }
}
