//! Board coordinates: cells, headings and the fixed-size grid.

/// One board square addressed by column (`x`) and row (`y`).
///
/// Coordinates are signed so a head that stepped off the board can still be
/// represented and rejected by [`GridBounds::contains`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Heading of the snake. `Up` increases the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True when both headings lie on the same axis (equal or opposite).
    pub fn same_axis(self, other: Direction) -> bool {
        self.is_vertical() == other.is_vertical()
    }
}

/// Size of the board in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_moves_towards_higher_rows() {
        assert_eq!(Cell::new(5, 5).step(Direction::Up), Cell::new(5, 6));
        assert_eq!(Cell::new(5, 5).step(Direction::Left), Cell::new(4, 5));
    }

    #[test]
    fn same_axis_pairs() {
        for d in Direction::ALL {
            assert!(d.same_axis(d));
            assert!(d.same_axis(d.opposite()));
        }
        assert!(!Direction::Up.same_axis(Direction::Left));
        assert!(!Direction::Right.same_axis(Direction::Down));
    }

    #[test]
    fn bounds_reject_every_edge() {
        let bounds = GridBounds::new(10, 8);
        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(bounds.contains(Cell::new(9, 7)));
        assert!(!bounds.contains(Cell::new(-1, 3)));
        assert!(!bounds.contains(Cell::new(3, -1)));
        assert!(!bounds.contains(Cell::new(10, 3)));
        assert!(!bounds.contains(Cell::new(3, 8)));
    }

    #[test]
    fn cells_cover_board() {
        let bounds = GridBounds::new(4, 3);
        assert_eq!(bounds.cells().count(), bounds.cell_count());
        assert!(bounds.cells().all(|c| bounds.contains(c)));
    }
}
