use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::WIN_SCORE;
use crate::food;
use crate::input::{Direction, DirectionQueue};
use crate::physics;
use crate::snake::{Position, Snake};

/// Current high-level gameplay phase.
///
/// `Victory` and `Defeat` are terminal: once entered, only [`GameState::reset`]
/// starts a new round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Playing,
    Victory,
    Defeat,
}

/// Complete mutable game state for one round.
///
/// The outside world drives it through exactly three operations —
/// [`queue_direction`](Self::queue_direction), [`tick`](Self::tick), and
/// [`reset`](Self::reset) — and reads the public fields between ticks.
/// Nothing here schedules itself; the host owns the clock.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub phase: Phase,
    pub tick_count: u64,
    direction: Option<Direction>,
    queue: DirectionQueue,
    grid_size: i32,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid_size: i32) -> Self {
        Self::with_rng(grid_size, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid_size: i32, seed: u64) -> Self {
        Self::with_rng(grid_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid_size: i32, mut rng: StdRng) -> Self {
        debug_assert!(grid_size > 0, "grid size must be positive");

        let start = center_cell(grid_size);
        let snake = Snake::new(start);
        // The start cell doubles as `previous` here; it is occupied by the
        // snake anyway, so the exclusion degenerates to "off the snake".
        let food = food::place_food(&mut rng, grid_size, &snake, start);

        Self {
            snake,
            food,
            score: 0,
            phase: Phase::Playing,
            tick_count: 0,
            direction: None,
            queue: DirectionQueue::new(),
            grid_size,
            rng,
        }
    }

    /// Offers a direction change to the input queue.
    ///
    /// Subject to the queue's admission rule (no duplicates, no instant
    /// reversals); ignored outside the `Playing` phase. Returns whether the
    /// direction was admitted.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.queue.push(direction)
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Consumes at most one queued direction, moves the snake, and applies
    /// collision, growth, scoring, and phase transitions. A no-op outside
    /// the `Playing` phase. Before any direction has ever been queued the
    /// snake stays put.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        self.tick_count += 1;

        if let Some(next) = self.queue.pop() {
            self.direction = Some(next);
        }
        let Some(direction) = self.direction else {
            return;
        };

        let new_head = self.snake.head().stepped(direction);
        let prospective = self.snake.with_head(new_head);

        if physics::check_collision(&prospective, self.grid_size) {
            // The board stays exactly as it was on the losing tick.
            self.phase = Phase::Defeat;
            return;
        }

        if new_head == self.food {
            let eaten = self.food;
            self.snake = prospective;
            self.score += 1;
            self.food = food::place_food(&mut self.rng, self.grid_size, &self.snake, eaten);

            // Compare the score computed this tick, not a stale copy.
            if self.score >= WIN_SCORE {
                self.phase = Phase::Victory;
            }
        } else {
            let mut moved = prospective;
            moved.drop_tail();
            self.snake = moved;
        }
    }

    /// Starts a new round: initial snake and food, zero score, empty queue.
    ///
    /// The RNG stream carries over, so a seeded session stays reproducible
    /// across resets.
    pub fn reset(&mut self) {
        let start = center_cell(self.grid_size);
        self.snake = Snake::new(start);
        self.food = food::place_food(&mut self.rng, self.grid_size, &self.snake, start);
        self.score = 0;
        self.phase = Phase::Playing;
        self.tick_count = 0;
        self.direction = None;
        self.queue.clear();
    }

    /// Returns the direction currently applied to movement, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the side length of the square board.
    #[must_use]
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }
}

fn center_cell(grid_size: i32) -> Position {
    Position {
        x: grid_size / 2,
        y: grid_size / 2,
    }
}
