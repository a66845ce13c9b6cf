use std::collections::HashSet;

use rand::Rng;

use crate::grid::{GridSize, Position};
use crate::snake::Snake;

/// Placement attempts before giving up on finding a free cell.
pub const MAX_SPAWN_ATTEMPTS: u32 = 100;

/// The single food item on the board.
///
/// Inactive between consumption and relocation; in normal flow the gap is
/// never observable because `spawn` follows immediately.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    position: Position,
    active: bool,
}

impl Food {
    /// Creates an inactive food; call [`spawn`](Food::spawn) to place it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Position { x: 0, y: 0 },
            active: false,
        }
    }

    /// Creates an active food at `position`. Test scaffolding.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            active: true,
        }
    }

    /// Places the food on a random cell occupied by neither the snake nor
    /// a wall, then activates it.
    ///
    /// Draws uniform random cells, rejecting occupied ones, for at most
    /// [`MAX_SPAWN_ATTEMPTS`] tries. If every draw fails (board nearly
    /// full), the food lands on an arbitrary random cell regardless of
    /// overlap. That trades a rare cosmetic glitch for guaranteed
    /// termination; it is not an error path.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        walls: &HashSet<Position>,
    ) {
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let candidate = random_cell(rng, bounds);
            if !snake.occupies(candidate) && !walls.contains(&candidate) {
                self.position = candidate;
                self.active = true;
                return;
            }
        }

        self.position = random_cell(rng, bounds);
        self.active = true;
    }

    /// Returns true iff the food is active and located at `position`.
    #[must_use]
    pub fn is_at(self, position: Position) -> bool {
        self.active && self.position == position
    }

    /// Returns the current position (meaningful only while active).
    #[must_use]
    pub fn position(self) -> Position {
        self.position
    }

    /// Returns whether the food is currently placed on the board.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Removes the food from the board until the next spawn.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::Food;

    #[test]
    fn spawn_avoids_snake_and_walls_on_a_sparse_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::new(Position { x: 4, y: 3 });
        let walls: HashSet<Position> =
            HashSet::from([Position { x: 0, y: 0 }, Position { x: 7, y: 5 }]);

        for _ in 0..200 {
            let mut food = Food::new();
            food.spawn(&mut rng, bounds, &snake, &walls);

            assert!(food.is_active());
            assert!(!snake.occupies(food.position()));
            assert!(!walls.contains(&food.position()));
        }
    }

    #[test]
    fn spawn_terminates_on_a_full_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        // Snake and walls together cover every cell.
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Direction::Right,
        );
        let walls: HashSet<Position> =
            HashSet::from([Position { x: 0, y: 1 }, Position { x: 1, y: 1 }]);

        let mut food = Food::new();
        food.spawn(&mut rng, bounds, &snake, &walls);

        // Degraded placement: still active, somewhere on the board.
        assert!(food.is_active());
        assert!(food.position().is_within_bounds(bounds));
    }

    #[test]
    fn is_at_requires_active() {
        let position = Position { x: 3, y: 4 };
        let mut food = Food::at(position);

        assert!(food.is_at(position));
        assert!(!food.is_at(Position { x: 3, y: 5 }));

        food.deactivate();
        assert!(!food.is_at(position));
    }
}
