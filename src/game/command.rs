/// Direction the snake can travel, one axis-aligned grid step at a time
///
/// Using an enum rather than a raw vector means a diagonal or
/// off-lattice heading cannot even be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// The (dx, dy) step vector for one cell of travel, in pixels
    pub fn step(&self, cell: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -cell),
            Direction::Down => (0, cell),
            Direction::Left => (-cell, 0),
            Direction::Right => (cell, 0),
        }
    }
}

/// A decoded player command, stripped of all key/terminal detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a new heading
    Steer(Direction),
    /// Begin a fresh game from the title or game-over screen
    StartOrRestart,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
