use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell offset `(dx, dy)` for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the host loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
}

/// FIFO of pending direction changes, filtered at enqueue time.
///
/// The admission rule compares each candidate against the most recently
/// admitted direction: an identical direction is dropped (no point queueing
/// it twice), and the exact 180° reverse is dropped (it would fold the head
/// straight back into the neck on the next tick). The reference direction
/// survives dequeues, so a reversal stays rejected even once the queue has
/// drained.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
    last_admitted: Option<Direction>,
}

impl DirectionQueue {
    /// Creates an empty queue with no admission history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a direction; returns whether it was admitted.
    pub fn push(&mut self, direction: Direction) -> bool {
        if let Some(last) = self.last_admitted {
            if direction == last || direction == last.opposite() {
                return false;
            }
        }

        self.pending.push_back(direction);
        self.last_admitted = Some(direction);
        true
    }

    /// Removes and returns the oldest pending direction.
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Drops all pending directions and the admission history.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.last_admitted = None;
    }

    /// Returns the number of pending directions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Polls the terminal for one input event, waiting at most `timeout`.
///
/// Returns `Ok(None)` when the timeout expires or the event is not a key
/// press this game cares about.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    Ok(map_key(key.code))
}

/// Maps a key code to a game input: arrows or WASD to move, `p`/space to
/// pause, enter to confirm, `q`/escape to quit.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{map_key, Direction, DirectionQueue, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn first_direction_is_always_admitted() {
        let mut queue = DirectionQueue::new();

        assert!(queue.push(Direction::Left));
        assert_eq!(queue.pop(), Some(Direction::Left));
    }

    #[test]
    fn reversal_of_last_admitted_is_rejected() {
        let mut queue = DirectionQueue::new();

        assert!(queue.push(Direction::Right));
        assert!(!queue.push(Direction::Left));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(Direction::Right));
    }

    #[test]
    fn duplicate_of_last_admitted_is_rejected() {
        let mut queue = DirectionQueue::new();

        assert!(queue.push(Direction::Up));
        assert!(!queue.push(Direction::Up));

        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn perpendicular_directions_are_admitted_in_order() {
        let mut queue = DirectionQueue::new();

        assert!(queue.push(Direction::Right));
        assert!(queue.push(Direction::Up));
        assert!(queue.push(Direction::Left));

        assert_eq!(queue.pop(), Some(Direction::Right));
        assert_eq!(queue.pop(), Some(Direction::Up));
        assert_eq!(queue.pop(), Some(Direction::Left));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn reversal_stays_rejected_after_queue_drains() {
        let mut queue = DirectionQueue::new();

        queue.push(Direction::Down);
        assert_eq!(queue.pop(), Some(Direction::Down));
        assert!(queue.is_empty());

        // The snake is still moving down; an instant reversal must not
        // sneak in just because the buffer happens to be empty.
        assert!(!queue.push(Direction::Up));
        assert!(queue.push(Direction::Left));
    }

    #[test]
    fn clear_forgets_admission_history() {
        let mut queue = DirectionQueue::new();

        queue.push(Direction::Right);
        queue.clear();

        assert!(queue.is_empty());
        assert!(queue.push(Direction::Left));
    }

    #[test]
    fn movement_keys_map_to_directions() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Char('d')),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(map_key(KeyCode::Enter), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }
}
