use crate::snake::Snake;

/// Reports whether a prospective snake body is in a losing position.
///
/// `snake` must already have the prospective new head prepended to the full
/// pre-move body, tail included. That makes stepping into the current tail
/// cell a collision even on a tick where the tail would otherwise vacate.
///
/// Returns true when the head lies outside `[0, grid_size)` on either axis,
/// or when the head coincides with any other segment. An empty snake or a
/// non-positive grid size is a caller bug.
#[must_use]
pub fn check_collision(snake: &Snake, grid_size: i32) -> bool {
    debug_assert!(grid_size > 0, "grid size must be positive");
    debug_assert!(!snake.is_empty(), "collision check needs a head segment");

    let head = snake.head();
    if !head.is_inside(grid_size) {
        return true;
    }

    snake.segments().skip(1).any(|segment| *segment == head)
}

#[cfg(test)]
mod tests {
    use crate::snake::{Position, Snake};

    use super::check_collision;

    #[test]
    fn head_inside_empty_board_is_safe() {
        let snake = Snake::new(Position { x: 10, y: 10 });
        assert!(!check_collision(&snake, 20));
    }

    #[test]
    fn head_past_any_wall_collides() {
        for head in [
            Position { x: -1, y: 5 },
            Position { x: 20, y: 5 },
            Position { x: 5, y: -1 },
            Position { x: 5, y: 20 },
        ] {
            let snake = Snake::new(head);
            assert!(check_collision(&snake, 20), "expected collision at {head:?}");
        }
    }

    #[test]
    fn corner_cells_are_inside() {
        for head in [
            Position { x: 0, y: 0 },
            Position { x: 19, y: 0 },
            Position { x: 0, y: 19 },
            Position { x: 19, y: 19 },
        ] {
            let snake = Snake::new(head);
            assert!(!check_collision(&snake, 20));
        }
    }

    #[test]
    fn head_overlapping_a_body_segment_collides() {
        let snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
            Position { x: 5, y: 5 },
        ]);

        assert!(check_collision(&snake, 20));
    }

    #[test]
    fn head_on_the_tail_cell_collides() {
        // Prospective body after stepping onto the old tail: the tail is
        // still part of the body the check sees, so this loses.
        let snake = Snake::from_segments(vec![
            Position { x: 3, y: 3 },
            Position { x: 4, y: 3 },
            Position { x: 4, y: 4 },
            Position { x: 3, y: 4 },
            Position { x: 3, y: 3 },
        ]);

        assert!(check_collision(&snake, 20));
    }

    #[test]
    fn adjacent_but_distinct_segments_are_safe() {
        let snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 6, y: 5 },
            Position { x: 7, y: 5 },
        ]);

        assert!(!check_collision(&snake, 20));
    }
}
