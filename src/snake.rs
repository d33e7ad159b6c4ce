use std::fmt;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
///
/// `x` selects the row and `y` the column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when `other` shares an edge with this position.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Snake body and its last accepted direction.
///
/// The first segment is the head and the last one is the tail. The body is
/// never empty: every constructor takes the head explicitly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: Vec<Point>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Point, direction: Direction) -> Self {
        Self {
            body: vec![start],
            direction,
        }
    }

    /// Creates a straight snake heading in `direction`, its body trailing
    /// behind the head.
    #[must_use]
    pub fn straight(head: Point, length: usize, direction: Direction) -> Self {
        let backwards = direction.opposite();
        let body = std::iter::successors(Some(head), |segment| Some(segment.step(backwards)))
            .take(length.max(1))
            .collect();

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Point>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: segments,
            direction,
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    /// Appends a segment on top of the current tail.
    ///
    /// The next [`Snake::shift_body`] leaves the new segment where it is while
    /// the old tail follows its predecessor, so the visible tail never jumps.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Moves every non-head segment onto its predecessor's cell, tail first.
    ///
    /// Must run before the head moves.
    pub fn shift_body(&mut self) {
        for index in (1..self.body.len()).rev() {
            self.body[index] = self.body[index - 1];
        }
    }

    /// Repositions the head segment in place.
    pub fn move_head_to(&mut self, position: Point) {
        self.body[0] = position;
    }

    /// Returns whether `requested` may replace the current direction.
    #[must_use]
    pub fn validate_direction(&self, requested: Direction) -> bool {
        direction_change_is_valid(self.direction, requested)
    }

    /// Adopts `requested` when it is not a reversal. Returns whether it was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let accepted = self.validate_direction(requested);
        if accepted {
            self.direction = requested;
        }
        accepted
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Point) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Point] {
        &self.body
    }
}
