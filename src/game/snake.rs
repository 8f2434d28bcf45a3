use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// The body holds every cell the snake occupies, in traversal order: the
/// tail is at the front of the deque and the head at the back.  The body is
/// never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) body: VecDeque<Position>,

    /// The direction the snake moves in on the next tick
    pub(super) direction: Direction,
}

impl Snake {
    /// Create the starting snake for an arena of `size` cells per side:
    /// three cells on the middle row, centered horizontally, head at the
    /// east end, moving right.  Requires `size` of at least
    /// [`MIN_ARENA_SIZE`][consts::MIN_ARENA_SIZE].
    pub(super) fn spawn(size: u16) -> Snake {
        let row = size / 2;
        let mid = size / 2;
        let body = VecDeque::from_iter((mid - 1..=mid + 1).map(|x| Position::new(x, row)));
        Snake {
            body,
            direction: Direction::Right,
        }
    }

    pub(super) fn head(&self) -> Position {
        *self.body.back().expect("snake body should never be empty")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Append a new head cell, growing the body by one
    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    /// Drop the tail cell after a normal (non-growing) move
    pub(super) fn pop_tail(&mut self) {
        let _ = self.body.pop_front();
    }
}
