use log::debug;
use rand::Rng;

use crate::food::{Food, SpawnError};
use crate::grid::{Cell, Direction, GridBounds};

pub const INITIAL_LENGTH: i32 = 3;

/// What killed the snake.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Result of one [`Snake::move_step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Ate,
    Crashed(Collision),
    /// Food was eaten and the body now covers every free cell.
    BoardFilled,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head first.
    body: Vec<Cell>,
    direction: Direction,
    pending: Direction,
    score: u32,
    death: Option<Collision>,
}

impl Snake {
    /// A three cell vertical snake with its head on the board center, facing up.
    pub fn spawn(bounds: GridBounds) -> Self {
        let head = bounds.center();
        let body = (0..INITIAL_LENGTH).map(|i| Cell::new(head.x, head.y - i)).collect();
        Self::with_body(body, Direction::Up)
    }

    /// A live snake with an explicit body (head first).
    ///
    /// # Panics
    ///
    /// If `body` is empty; a snake always has a head.
    pub fn with_body(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake body must contain at least the head");
        Self { body, direction, pending: direction, score: 0, death: None }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Heading used by the last move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heading the next move will use.
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.death.is_some()
    }

    pub fn death(&self) -> Option<Collision> {
        self.death
    }

    /// Sets the heading for the next move. Reversal filtering is the caller's job.
    pub fn change_direction(&mut self, direction: Direction) {
        self.pending = direction;
    }

    /// Advances one cell.
    ///
    /// A fatal move leaves the body exactly as it was before the move.
    pub fn move_step<R: Rng>(&mut self, bounds: GridBounds, food: &mut Food, rng: &mut R) -> MoveOutcome {
        if let Some(cause) = self.death {
            return MoveOutcome::Crashed(cause);
        }

        self.direction = self.pending;
        let new_head = self.head().step(self.direction);

        let ate = food.touched(new_head);
        let tail = if ate {
            self.score += 1;
            None
        } else {
            self.body.pop()
        };

        let collision = if !bounds.contains(new_head) {
            Some(Collision::Wall)
        } else if self.body.contains(&new_head) {
            Some(Collision::Body)
        } else {
            None
        };

        if let Some(cause) = collision {
            self.death = Some(cause);
            if let Some(tail) = tail {
                self.body.push(tail);
            }
            debug!("snake crashed into {:?} at ({}, {})", cause, new_head.x, new_head.y);
            return MoveOutcome::Crashed(cause);
        }

        self.body.insert(0, new_head);
        if !ate {
            return MoveOutcome::Moved;
        }
        match food.spawn(bounds, &self.body, rng) {
            Ok(_) => MoveOutcome::Ate,
            Err(SpawnError::BoardFull { .. }) => MoveOutcome::BoardFilled,
        }
    }
}
