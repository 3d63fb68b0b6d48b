use super::command::Direction;

/// A position in world space, in pixels from the top-left corner
///
/// Every position the simulation stores sits on the cell lattice: both
/// coordinates are exact multiples of the grid's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One grid step in a direction
    pub fn stepped(&self, direction: Direction, cell: i32) -> Self {
        let (dx, dy) = direction.step(cell);
        self.moved_by(dx, dy)
    }
}

/// The playfield: `width` x `height` pixels partitioned into square
/// cells of `cell` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell: i32) -> Self {
        Self {
            width,
            height,
            cell,
        }
    }

    /// Number of whole cells across. Clamped to 1 so spawning always
    /// has at least one candidate cell.
    pub fn cells_x(&self) -> i32 {
        (self.width / self.cell).max(1)
    }

    /// Number of whole cells down, clamped like `cells_x`
    pub fn cells_y(&self) -> i32 {
        (self.height / self.cell).max(1)
    }

    /// Whether a point lies inside the visible area
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// The cell nearest the window center, snapped onto the lattice
    pub fn center(&self) -> Point {
        Point::new(
            self.width / 2 / self.cell * self.cell,
            self.height / 2 / self.cell * self.cell,
        )
    }
}
