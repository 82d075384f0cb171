use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a prospective head one step past the wall is
/// representable; the collision check is what rules it out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside a square grid of `grid_size`.
    #[must_use]
    pub fn is_inside(self, grid_size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < grid_size && self.y < grid_size
    }

    /// Returns the neighboring position one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body segments, head first.
///
/// The body never shrinks below one segment. Self-overlap is representable:
/// it is the loss condition the physics check looks for, not something this
/// type prevents.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns a copy of this snake with `head` prepended and the tail kept.
    ///
    /// This is the prospective post-move body the collision check runs
    /// against; on a non-growth tick the caller drops the tail afterwards.
    #[must_use]
    pub fn with_head(&self, head: Position) -> Self {
        let mut body = self.body.clone();
        body.push_front(head);
        Self { body }
    }

    /// Removes the tail segment.
    pub fn drop_tail(&mut self) {
        debug_assert!(self.body.len() > 1);
        let _ = self.body.pop_back();
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
