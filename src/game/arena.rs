use super::snake::Snake;
use crate::consts;
use rand::{
    distr::{Bernoulli, Distribution},
    Rng,
};
use ratatui::layout::{Position, Positions, Rect, Size};
use std::collections::{HashSet, VecDeque};

/// The fixed square grid the game is played on: its side length plus the
/// static obstacle cells.  Built once at game start and never mutated
/// afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Arena {
    size: u16,
    obstacles: HashSet<Position>,
}

impl Arena {
    pub(super) fn new(size: u16) -> Arena {
        Arena {
            size,
            obstacles: HashSet::new(),
        }
    }

    pub(super) fn size(&self) -> u16 {
        self.size
    }

    pub(super) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    /// True iff `pos` lies on the grid
    pub(super) fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Checkerboard parity of a cell.  Purely a rendering concern; nothing
    /// in the simulation depends on it.
    pub(super) fn cell_parity(pos: Position) -> bool {
        pos.x % 2 == pos.y % 2
    }

    /// All cells of the grid in row-major order
    pub(super) fn positions(&self) -> Positions {
        Rect::from((Position::ORIGIN, Size::new(self.size, self.size))).positions()
    }

    /// All cells not occupied by an obstacle or by `body`, in row-major
    /// order.  Empty iff the snake covers every open cell.
    pub(super) fn free_cells<'a>(
        &'a self,
        body: &'a VecDeque<Position>,
    ) -> impl Iterator<Item = Position> + 'a {
        self.positions()
            .filter(move |p| !self.obstacles.contains(p) && !body.contains(p))
    }

    pub(super) fn set_obstacles(&mut self, obstacles: HashSet<Position>) {
        self.obstacles = obstacles;
    }

    /// Scatter random obstacles over the grid, then sweep the spawn body and
    /// a corridor in front of the head and behind the tail clear so a fresh
    /// game is not lost before the player can react.
    pub(super) fn scatter_obstacles<R: Rng>(&mut self, rng: R, snake: &Snake) {
        let dist = Bernoulli::new(consts::OBSTACLE_PROBABILITY)
            .expect("OBSTACLE_PROBABILITY should be between 0 and 1");
        self.obstacles = self
            .positions()
            .zip(dist.sample_iter(rng))
            .filter_map(|(pos, hit)| hit.then_some(pos))
            .collect();
        for &pos in snake.body() {
            self.obstacles.remove(&pos);
        }
        let forwards = snake.direction;
        for pos in std::iter::successors(Some(snake.head()), |&p| forwards.advance(p, self.size))
            .take(consts::FORWARDS_CLEARANCE)
        {
            self.obstacles.remove(&pos);
        }
        let backwards = snake.direction.opposite();
        for pos in
            std::iter::successors(snake.body().front().copied(), |&p| {
                backwards.advance(p, self.size)
            })
            .take(consts::BACKWARDS_CLEARANCE)
        {
            self.obstacles.remove(&pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(4, 4), true)]
    #[case(Position::new(5, 4), false)]
    #[case(Position::new(4, 5), false)]
    #[case(Position::new(5, 5), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Arena::new(5).contains(pos), inside);
    }

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(1, 0), false)]
    #[case(Position::new(0, 1), false)]
    #[case(Position::new(1, 1), true)]
    #[case(Position::new(2, 1), false)]
    fn test_cell_parity(#[case] pos: Position, #[case] parity: bool) {
        assert_eq!(Arena::cell_parity(pos), parity);
    }

    #[test]
    fn positions_are_row_major() {
        let cells = Arena::new(2).positions().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn free_cells_excludes_body_and_obstacles() {
        let mut arena = Arena::new(3);
        arena.set_obstacles(HashSet::from([Position::new(2, 0)]));
        let body = VecDeque::from([Position::new(0, 1), Position::new(1, 1)]);
        let free = arena.free_cells(&body).collect::<Vec<_>>();
        assert_eq!(
            free,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn free_cells_empty_when_board_covered() {
        let arena = Arena::new(2);
        let body = VecDeque::from_iter(arena.positions());
        assert_eq!(arena.free_cells(&body).count(), 0);
    }

    #[test]
    fn scatter_keeps_spawn_and_clearance_clear() {
        let snake = Snake::spawn(20);
        let mut arena = Arena::new(20);
        arena.scatter_obstacles(ChaCha12Rng::seed_from_u64(RNG_SEED), &snake);
        for &pos in snake.body() {
            assert!(!arena.obstacles().contains(&pos), "obstacle on spawn {pos:?}");
        }
        for &pos in arena.obstacles() {
            assert!(arena.contains(pos), "obstacle out of bounds {pos:?}");
        }
        // head is at (11, 10): the forward corridor runs to (17, 10), the
        // backward one from the tail at (9, 10) to (7, 10)
        for x in 7..=17 {
            assert!(
                !arena.obstacles().contains(&Position::new(x, 10)),
                "obstacle in corridor at ({x}, 10)"
            );
        }
    }
}
