use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Step `pos` one cell in this direction within a square arena of `size`
    /// cells per side.  Returns `None` if the step would leave the arena.
    pub(super) fn advance(self, pos: Position, size: u16) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => {
                y = y.checked_sub(1)?;
            }
            Direction::Down => {
                y = y.checked_add(1).filter(|&v| v < size)?;
            }
            Direction::Left => {
                x = x.checked_sub(1)?;
            }
            Direction::Right => {
                x = x.checked_add(1).filter(|&v| v < size)?;
            }
        }
        Some(Position { x, y })
    }

    pub(super) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
