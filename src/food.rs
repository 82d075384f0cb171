use rand::Rng;

use crate::snake::{Position, Snake};

/// Picks a fresh food cell by rejection sampling.
///
/// Uniformly samples cells in `[0, grid_size)²` until one is neither on the
/// snake nor equal to `previous` (so food visibly relocates after being
/// eaten). Terminates almost surely while a free cell exists; the caller is
/// expected to keep the board far from full, which the score-based win
/// condition guarantees.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: i32,
    snake: &Snake,
    previous: Position,
) -> Position {
    debug_assert!(grid_size > 0, "grid size must be positive");
    debug_assert!(
        snake.len() < (grid_size * grid_size) as usize,
        "no free cell left for food on the {grid_size}×{grid_size} board",
    );

    loop {
        let candidate = Position {
            x: rng.gen_range(0..grid_size),
            y: rng.gen_range(0..grid_size),
        };

        if !snake.occupies(candidate) && candidate != previous {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::snake::{Position, Snake};

    use super::place_food;

    #[test]
    fn food_never_lands_on_snake_or_previous_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let previous = Position { x: 4, y: 4 };

        for _ in 0..200 {
            let food = place_food(&mut rng, 8, &snake, previous);
            assert!(!snake.occupies(food));
            assert_ne!(food, previous);
        }
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        // 2×2 board: snake on two cells, previous food on a third.
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
        ]);
        let previous = Position { x: 0, y: 1 };

        for _ in 0..20 {
            let food = place_food(&mut rng, 2, &snake, previous);
            assert_eq!(food, Position { x: 1, y: 1 });
        }
    }

    #[test]
    fn seeded_rng_gives_a_reproducible_cell() {
        let snake = Snake::new(Position { x: 10, y: 10 });
        let previous = Position { x: 10, y: 10 };

        let first = place_food(&mut StdRng::seed_from_u64(42), 20, &snake, previous);
        let second = place_food(&mut StdRng::seed_from_u64(42), 20, &snake, previous);

        assert_eq!(first, second);
    }
}
