use std::collections::HashSet;
use std::time::Duration;

use crate::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, SPEED_FAST, SPEED_NORMAL, SPEED_SLOW, SPEED_VERY_SLOW,
};
use crate::grid::Position;

/// One entry of the level catalog, fixed at startup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LevelDef {
    pub id: u32,
    pub name: &'static str,
    /// Tick interval while this level is active.
    pub speed: Duration,
    /// Cumulative score needed to advance past this level.
    pub required_score: u32,
    pub walls: HashSet<Position>,
}

/// Ordered level catalog plus the current progression cursor.
///
/// The cursor only moves forward within a round and is always a valid
/// index; advancing past the last entry is a no-op.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Levels {
    catalog: Vec<LevelDef>,
    current: usize,
}

impl Levels {
    /// The built-in five-level progression on the default 40×30 grid.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_catalog(standard_catalog())
    }

    /// Builds a progression over a custom catalog.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` is empty; there is always a current level.
    #[must_use]
    pub fn from_catalog(catalog: Vec<LevelDef>) -> Self {
        assert!(!catalog.is_empty(), "level catalog must not be empty");
        Self {
            catalog,
            current: 0,
        }
    }

    fn current_def(&self) -> &LevelDef {
        &self.catalog[self.current]
    }

    /// Returns the wall cells of the current level.
    #[must_use]
    pub fn walls(&self) -> &HashSet<Position> {
        &self.current_def().walls
    }

    /// Returns the score needed to advance past the current level.
    #[must_use]
    pub fn required_score(&self) -> u32 {
        self.current_def().required_score
    }

    /// Returns the tick interval of the current level.
    #[must_use]
    pub fn speed(&self) -> Duration {
        self.current_def().speed
    }

    /// Returns the display name of the current level.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.current_def().name
    }

    /// Returns the 1-based level number for display.
    #[must_use]
    pub fn level_number(&self) -> u32 {
        u32::try_from(self.current).unwrap_or(u32::MAX).saturating_add(1)
    }

    fn has_next(&self) -> bool {
        self.current + 1 < self.catalog.len()
    }

    /// Returns true when `score` meets the threshold and a next level exists.
    #[must_use]
    pub fn can_advance(&self, score: u32) -> bool {
        score >= self.required_score() && self.has_next()
    }

    /// Moves to the next level if one exists; returns whether it advanced.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Returns to the first level.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

fn standard_catalog() -> Vec<LevelDef> {
    let width = i32::from(DEFAULT_GRID_WIDTH);
    let height = i32::from(DEFAULT_GRID_HEIGHT);

    vec![
        LevelDef {
            id: 1,
            name: "Beginner",
            speed: SPEED_VERY_SLOW,
            required_score: 10,
            walls: HashSet::new(),
        },
        LevelDef {
            id: 2,
            name: "Novice",
            speed: SPEED_SLOW,
            required_score: 15,
            walls: [(10, 10), (11, 10), (12, 10), (28, 20), (29, 20), (30, 20)]
                .into_iter()
                .map(|(x, y)| Position { x, y })
                .collect(),
        },
        LevelDef {
            id: 3,
            name: "Intermediate",
            speed: SPEED_NORMAL,
            required_score: 20,
            walls: corner_bars(),
        },
        LevelDef {
            id: 4,
            name: "Advanced",
            speed: SPEED_NORMAL,
            required_score: 25,
            walls: broken_cross(width, height),
        },
        LevelDef {
            id: 5,
            name: "Expert",
            speed: SPEED_FAST,
            required_score: 30,
            walls: staircase_maze(),
        },
    ]
}

/// Four horizontal bars near the grid corners.
fn corner_bars() -> HashSet<Position> {
    let mut walls = HashSet::new();
    for y in [5, 25] {
        for x in 5..=8 {
            walls.insert(Position { x, y });
        }
        for x in 30..=33 {
            walls.insert(Position { x, y });
        }
    }
    walls
}

/// A full-width row and full-height column with a gap around the center.
fn broken_cross(width: i32, height: i32) -> HashSet<Position> {
    let mut walls = HashSet::new();
    for x in (0..width).filter(|&x| x < 15 || x > 25) {
        walls.insert(Position { x, y: 15 });
    }
    for y in (0..height).filter(|&y| y < 10 || y > 20) {
        walls.insert(Position { x: 20, y });
    }
    walls
}

/// Staggered vertical runs joined by two horizontal shelves.
fn staircase_maze() -> HashSet<Position> {
    let mut walls = HashSet::new();
    for y in 0..10 {
        walls.insert(Position { x: 10, y });
    }
    for y in 10..20 {
        walls.insert(Position { x: 20, y });
    }
    for y in 20..30 {
        walls.insert(Position { x: 30, y });
    }
    for x in 0..15 {
        walls.insert(Position { x, y: 10 });
    }
    for x in 15..30 {
        walls.insert(Position { x, y: 20 });
    }
    walls
}
