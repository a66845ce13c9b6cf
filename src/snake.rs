use std::collections::HashSet;
use std::collections::VecDeque;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Segments a freshly spawned snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Mutable snake state: body segments, heading, and growth flag.
///
/// The head is the front of the deque. A requested heading is held in
/// `next_direction` and committed on the next [`advance`](Snake::advance),
/// so input frequency stays decoupled from simulation frequency: only the
/// latest valid request before a tick takes effect.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    segments: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
    growing: bool,
}

impl Snake {
    /// Creates the initial three-segment snake at `spawn`, facing right,
    /// with two trailing body cells to the head's left.
    #[must_use]
    pub fn new(spawn: Position) -> Self {
        Self {
            segments: initial_body(spawn),
            direction: Direction::Right,
            next_direction: Direction::Right,
            growing: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Test scaffolding for setting up collision scenarios.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            segments: VecDeque::from(segments),
            direction,
            next_direction: direction,
            growing: false,
        }
    }

    /// Requests a new heading for the next tick.
    ///
    /// A request that exactly reverses the *committed* direction is ignored,
    /// preventing instant self-collision via a 180° turn. Repeated calls
    /// before a tick overwrite each other; the last valid one wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.next_direction = requested;
    }

    /// Applies one movement step: commits the pending heading, then moves
    /// the head one cell, wrapping at the grid edges.
    ///
    /// Must be called exactly once per tick, before any collision checks.
    pub fn advance(&mut self, bounds: GridSize) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        self.direction = self.next_direction;
        let (dx, dy) = self.direction.vector();
        let new_head = self.head().offset_wrapped(dx, dy, bounds);

        self.segments.push_front(new_head);
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.segments.pop_back();
        }
    }

    /// Queues growth for the next [`advance`](Snake::advance).
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head occupies `position`.
    #[must_use]
    pub fn occupies_head(&self, position: Position) -> bool {
        self.head() == position
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if the head occupies a wall cell.
    #[must_use]
    pub fn has_wall_collision(&self, walls: &HashSet<Position>) -> bool {
        walls.contains(&self.head())
    }

    /// Restores the initial three-segment body at `spawn`, facing right.
    pub fn reset(&mut self, spawn: Position) {
        self.segments = initial_body(spawn);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.growing = false;
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the current committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}

fn initial_body(spawn: Position) -> VecDeque<Position> {
    VecDeque::from([
        spawn,
        Position {
            x: spawn.x - 1,
            y: spawn.y,
        },
        Position {
            x: spawn.x - 2,
            y: spawn.y,
        },
    ])
}
