use super::command::Direction;
use super::grid::Point;
use super::snapshot::Rgb;

/// Fill color of the head segment
pub const HEAD_COLOR: Rgb = Rgb {
    r: 180,
    g: 255,
    b: 140,
};

/// The snake: an ordered chain of occupied cells, head at index 0
///
/// The chain is never empty after construction. Adjacent segments are
/// one grid step apart, except transiently on the step a grown segment
/// still overlaps the tail it was stacked on.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, head first
    segments: Vec<Point>,
    heading: Direction,
    cell: i32,
    /// Cell the tail vacated on the most recent step; where the next
    /// grown segment goes
    vacated_tail: Option<Point>,
    /// Completed steps, feeds the body color cycle
    steps: usize,
}

impl Snake {
    /// A single-segment snake at `start`, heading right
    pub fn new(start: Point, cell: i32) -> Self {
        Self {
            segments: vec![start],
            heading: Direction::Right,
            cell,
            vacated_tail: None,
            steps: 0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Point {
        self.segments[0]
    }

    /// All occupied cells in body order, head first
    pub fn segments(&self) -> &[Point] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Should never happen in practice
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Adopt a new heading. Reversal filtering is the controller's job;
    /// the snake takes whatever heading it is handed.
    pub fn set_heading(&mut self, direction: Direction) {
        self.heading = direction;
    }

    /// Whether `point` lies on a body segment other than the head
    pub fn hits_body(&self, point: Point) -> bool {
        self.segments[1..].contains(&point)
    }

    /// Advance one grid step: every segment takes over its
    /// predecessor's cell, then the head moves by the heading
    pub fn advance(&mut self) {
        let len = self.segments.len();
        if len == 0 {
            return;
        }

        self.vacated_tail = Some(self.segments[len - 1]);

        for i in (1..len).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].stepped(self.heading, self.cell);

        self.steps += 1;
    }

    /// Append one segment on the cell the tail just vacated, so growth
    /// never shows a position jump. Before the first step the new
    /// segment stacks on the current tail and unfolds as the snake
    /// moves on.
    pub fn grow(&mut self) {
        let Some(&tail) = self.segments.last() else {
            return;
        };
        let at = self.vacated_tail.take().unwrap_or(tail);
        self.segments.push(at);
    }

    /// Fill color of the segment at `index`. The head keeps a fixed
    /// color; body colors cycle with every step so the skin appears to
    /// ripple toward the tail.
    pub fn color_at(&self, index: usize) -> Rgb {
        if index == 0 {
            return HEAD_COLOR;
        }
        let phase = index + self.steps;
        Rgb {
            r: (100 + (phase * 5) % 155) as u8,
            g: (255 - (phase * 3) % 200) as u8,
            b: (100 + (phase * 7) % 155) as u8,
        }
    }
}
