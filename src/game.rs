use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::grid::GridSize;
use crate::level::Levels;
use crate::snake::Snake;

/// What a single tick did, for the presentation layer to react to.
///
/// `LeveledUp` is an eat that also crossed the current level's score
/// threshold; consumers wanting "did the snake eat" should match both.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate,
    LeveledUp,
    GameOver,
}

/// Which collision ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    SelfCollision,
    WallCollision,
}

/// One playthrough: snake, food and level progression plus score and
/// game-over state. Sole mutator of `score` and the terminal flag.
///
/// The round never blocks or performs I/O; a driver calls
/// [`tick`](GameRound::tick) on whatever cadence the current level's
/// speed dictates, and pausing is simply not calling it.
#[derive(Debug, Clone)]
pub struct GameRound {
    pub snake: Snake,
    pub food: Food,
    pub levels: Levels,
    score: u32,
    over: bool,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameRound {
    /// Creates a round on the standard level catalog with an entropy seed.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_levels(bounds, Levels::standard(), rand::random())
    }

    /// Creates a deterministic round for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::new_with_levels(bounds, Levels::standard(), seed)
    }

    /// Creates a deterministic round over a custom level catalog.
    #[must_use]
    pub fn new_with_levels(bounds: GridSize, levels: Levels, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(bounds.center());
        let mut food = Food::new();
        food.spawn(&mut rng, bounds, &snake, levels.walls());

        Self {
            snake,
            food,
            levels,
            score: 0,
            over: false,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one discrete step.
    ///
    /// Order matters: movement, then food, then collisions. The collision
    /// check runs after the food branch, so a move that both eats and
    /// collides still ends the round; eating grants no immunity.
    pub fn tick(&mut self) -> TickOutcome {
        if self.over {
            return TickOutcome::GameOver;
        }

        self.tick_count += 1;
        self.snake.advance(self.bounds);

        let mut outcome = TickOutcome::Moved;
        if self.food.is_active() && self.snake.occupies_head(self.food.position()) {
            self.snake.grow();
            self.score += 1;
            self.food.deactivate();
            self.food
                .spawn(&mut self.rng, self.bounds, &self.snake, self.levels.walls());

            outcome = if self.levels.can_advance(self.score) {
                self.levels.advance();
                TickOutcome::LeveledUp
            } else {
                TickOutcome::Ate
            };
        }

        if self.snake.has_self_collision() {
            self.over = true;
            self.death_reason = Some(DeathReason::SelfCollision);
            return TickOutcome::GameOver;
        }
        if self.snake.has_wall_collision(self.levels.walls()) {
            self.over = true;
            self.death_reason = Some(DeathReason::WallCollision);
            return TickOutcome::GameOver;
        }

        outcome
    }

    /// Restores the round to its initial observable state.
    pub fn reset(&mut self) {
        self.score = 0;
        self.over = false;
        self.death_reason = None;
        self.tick_count = 0;
        self.levels.reset();
        self.snake.reset(self.bounds.center());
        self.food.deactivate();
        self.food
            .spawn(&mut self.rng, self.bounds, &self.snake, self.levels.walls());
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true once the round has ended, until the next reset.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns what ended the round, if it has ended.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Returns the tick interval dictated by the current level.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.levels.speed()
    }

    /// Returns the play-field dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns how many ticks have run since the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use crate::food::Food;
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::level::{LevelDef, Levels};
    use crate::snake::Snake;

    use super::{DeathReason, GameRound, TickOutcome};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 10,
    };

    fn open_levels(thresholds: &[u32]) -> Levels {
        Levels::from_catalog(
            thresholds
                .iter()
                .enumerate()
                .map(|(i, &required_score)| LevelDef {
                    id: u32::try_from(i).expect("catalog fits in u32") + 1,
                    name: "Test",
                    speed: Duration::from_millis(100),
                    required_score,
                    walls: HashSet::new(),
                })
                .collect(),
        )
    }

    fn round_without_food() -> GameRound {
        let mut round = GameRound::new_with_levels(BOUNDS, open_levels(&[100]), 1);
        round.food.deactivate();
        round
    }

    #[test]
    fn plain_move_reports_moved_and_keeps_length() {
        let mut round = round_without_food();

        for _ in 0..20 {
            assert_eq!(round.tick(), TickOutcome::Moved);
            assert_eq!(round.snake.len(), 3);
        }
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn head_wraps_instead_of_crashing_at_the_edge() {
        let mut round = round_without_food();

        // Spawned at the center facing right; run one full lap.
        for _ in 0..usize::from(BOUNDS.width) {
            assert_eq!(round.tick(), TickOutcome::Moved);
        }

        assert_eq!(round.snake.head(), BOUNDS.center());
    }

    #[test]
    fn eating_scores_grows_and_respawns_food() {
        let mut round = round_without_food();
        let head = round.snake.head();
        round.food = Food::at(Position {
            x: head.x + 1,
            y: head.y,
        });

        assert_eq!(round.tick(), TickOutcome::Ate);
        assert_eq!(round.score(), 1);
        // Growth lands on the next advance.
        assert_eq!(round.snake.len(), 3);
        round.food.deactivate();
        round.tick();
        assert_eq!(round.snake.len(), 4);

        assert_eq!(round.score(), 1);
    }

    #[test]
    fn replacement_food_avoids_snake_and_walls() {
        let mut round = GameRound::new_with_levels(BOUNDS, open_levels(&[100]), 5);
        // Stay short of a full row so the straight-line feeding never
        // runs the head into its own tail.
        for _ in 0..8 {
            let head = round.snake.head();
            round.food = Food::at(Position {
                x: head.x + 1,
                y: head.y,
            });
            round.tick();

            assert!(round.food.is_active());
            assert!(!round.snake.occupies(round.food.position()));
        }
    }

    #[test]
    fn level_advances_exactly_once_at_the_threshold() {
        let mut round = GameRound::new_with_levels(BOUNDS, open_levels(&[2, 4, 100]), 2);

        let mut feed = |round: &mut GameRound| {
            let head = round.snake.head();
            round.food = Food::at(Position {
                x: head.x + 1,
                y: head.y,
            });
            round.tick()
        };

        assert_eq!(feed(&mut round), TickOutcome::Ate);
        assert_eq!(round.levels.level_number(), 1);

        assert_eq!(feed(&mut round), TickOutcome::LeveledUp);
        assert_eq!(round.levels.level_number(), 2);

        // Score keeps rising without a premature second advance.
        assert_eq!(feed(&mut round), TickOutcome::Ate);
        assert_eq!(round.levels.level_number(), 2);
        assert_eq!(round.score(), 3);

        assert_eq!(feed(&mut round), TickOutcome::LeveledUp);
        assert_eq!(round.levels.level_number(), 3);
    }

    #[test]
    fn self_collision_ends_the_round() {
        let mut round = round_without_food();
        round.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 5, y: 6 },
                Position { x: 6, y: 6 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 4 },
            ],
            Direction::Right,
        );
        // Advancing right drives the head into the loop's far side.
        assert_eq!(round.tick(), TickOutcome::GameOver);
        assert!(round.is_over());
        assert_eq!(round.death_reason(), Some(DeathReason::SelfCollision));
    }

    #[test]
    fn finished_round_ticks_are_inert() {
        let mut round = round_without_food();
        round.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 5, y: 6 },
                Position { x: 6, y: 6 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 4 },
            ],
            Direction::Right,
        );
        assert_eq!(round.tick(), TickOutcome::GameOver);

        let head = round.snake.head();
        let ticks = round.tick_count();

        assert_eq!(round.tick(), TickOutcome::GameOver);
        assert_eq!(round.snake.head(), head);
        assert_eq!(round.tick_count(), ticks);
    }

    #[test]
    fn wall_collision_ends_the_round() {
        let walls = HashSet::from([Position { x: 7, y: 5 }]);
        let levels = Levels::from_catalog(vec![LevelDef {
            id: 1,
            name: "Walled",
            speed: Duration::from_millis(100),
            required_score: 100,
            walls,
        }]);
        let mut round = GameRound::new_with_levels(BOUNDS, levels, 3);
        round.food.deactivate();
        round.snake = Snake::new(Position { x: 5, y: 5 });

        assert_eq!(round.tick(), TickOutcome::Moved);
        assert_eq!(round.tick(), TickOutcome::GameOver);
        assert_eq!(round.death_reason(), Some(DeathReason::WallCollision));
    }

    #[test]
    fn eating_grants_no_immunity_from_collision() {
        let walls = HashSet::from([Position { x: 7, y: 5 }]);
        let levels = Levels::from_catalog(vec![LevelDef {
            id: 1,
            name: "Walled",
            speed: Duration::from_millis(100),
            required_score: 100,
            walls,
        }]);
        let mut round = GameRound::new_with_levels(BOUNDS, levels, 4);
        round.snake = Snake::new(Position { x: 6, y: 5 });
        // Food sits on the wall cell the head is about to enter.
        round.food = Food::at(Position { x: 7, y: 5 });

        assert_eq!(round.tick(), TickOutcome::GameOver);
        assert!(round.is_over());
        // The eat still happened before the collision was detected.
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut round = GameRound::new_with_seed(BOUNDS, 9);
        for _ in 0..5 {
            round.tick();
        }

        round.reset();
        let snake_after_first = round.snake.clone();
        let level_after_first = round.levels.level_number();
        let score_after_first = round.score();
        let over_after_first = round.is_over();

        round.reset();

        assert_eq!(round.snake, snake_after_first);
        assert_eq!(round.levels.level_number(), level_after_first);
        assert_eq!(round.score(), score_after_first);
        assert_eq!(round.is_over(), over_after_first);
        assert_eq!(round.score(), 0);
        assert!(!round.is_over());
        assert_eq!(round.tick_count(), 0);
        assert!(round.food.is_active());
    }
}
