use super::arena::Arena;
use super::direction::Direction;
use super::snake::Snake;
use crate::config::{ConfigError, GameConfig};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// Where the game is in its lifecycle.  `Won` and `Lost` are terminal for
/// the simulation clock but not for the process: a direction input restarts
/// the game from either.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Status {
    /// Fresh game, snake at its spawn, waiting for the first direction input
    Ready,
    Running,
    Won,
    Lost,
}

/// The simulation state machine.  Owns the arena, the snake, the food cell,
/// and the status; [`advance()`][Engine::advance] and
/// [`steer()`][Engine::steer] are the only entry points that mutate them.
/// The RNG is injected so food placement is deterministic under test.
#[derive(Clone, Debug)]
pub(super) struct Engine<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) arena: Arena,
    pub(super) snake: Snake,
    pub(super) food: Option<Position>,
    pub(super) status: Status,
}

impl<R: Rng> Engine<R> {
    /// Build an engine from `config`, rejecting configurations that could
    /// not produce a playable game.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arena cannot hold the spawn, the speed is zero,
    /// an obstacle falls outside the arena or on the spawn, or no cell is
    /// left free for food.
    pub(super) fn new_with_rng(config: &GameConfig, mut rng: R) -> Result<Engine<R>, ConfigError> {
        config.validate()?;
        let snake = Snake::spawn(config.size);
        let mut arena = Arena::new(config.size);
        if config.random_obstacles {
            arena.scatter_obstacles(&mut rng, &snake);
        } else if !config.obstacles.is_empty() {
            for &pos in &config.obstacles {
                if !arena.contains(pos) {
                    return Err(ConfigError::obstacle_out_of_bounds(pos));
                }
                if snake.contains(pos) {
                    return Err(ConfigError::obstacle_on_spawn(pos));
                }
            }
            arena.set_obstacles(config.obstacles.clone());
        }
        if arena.free_cells(snake.body()).next().is_none() {
            return Err(ConfigError::NoOpenCell);
        }
        let mut engine = Engine {
            rng,
            arena,
            snake,
            food: None,
            status: Status::Ready,
        };
        engine.place_food();
        Ok(engine)
    }

    /// Run one simulation tick.  Does nothing unless the game is running.
    ///
    /// The new head cell is classified before the body is touched, so a
    /// losing tick leaves the body exactly as the previous tick rendered it.
    pub(super) fn advance(&mut self) {
        if self.status != Status::Running {
            return;
        }
        let Some(new_head) = self
            .snake
            .direction
            .advance(self.snake.head(), self.arena.size())
        else {
            self.status = Status::Lost;
            return;
        };
        if self.arena.obstacles().contains(&new_head) {
            self.status = Status::Lost;
            return;
        }
        if self.food == Some(new_head) {
            // growth: the tail cell stays put
            self.snake.push_head(new_head);
            self.place_food();
            if self.food.is_none() {
                // the snake covers every open cell
                self.status = Status::Won;
            }
        } else if self.snake.contains(new_head) {
            self.status = Status::Lost;
        } else {
            self.snake.push_head(new_head);
            self.snake.pop_tail();
        }
    }

    /// Request a direction change.  While running, the exact opposite of the
    /// current direction is silently dropped; any other request takes effect
    /// on the next tick.  From `Ready`, `Won`, or `Lost` this restarts the
    /// game with the requested direction and returns `true` so the caller
    /// can advance immediately and rearm its clock.
    pub(super) fn steer(&mut self, requested: Direction) -> bool {
        match self.status {
            Status::Running => {
                if requested != self.snake.direction.opposite() {
                    self.snake.turn(requested);
                }
                false
            }
            Status::Ready | Status::Won | Status::Lost => {
                self.snake = Snake::spawn(self.arena.size());
                self.snake.turn(requested);
                if self.food.is_none_or(|food| self.snake.contains(food)) {
                    self.place_food();
                }
                self.status = Status::Running;
                true
            }
        }
    }

    /// Move the food to a uniformly random free cell, or to `None` when the
    /// snake covers every open cell.
    fn place_food(&mut self) {
        self.food = self
            .arena
            .free_cells(self.snake.body())
            .choose(&mut self.rng);
    }
}

impl<R> Engine<R> {
    pub(super) fn arena(&self) -> &Arena {
        &self.arena
    }

    pub(super) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(super) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(super) fn status(&self) -> Status {
        self.status
    }

    /// Food items eaten so far
    pub(super) fn score(&self) -> usize {
        self.snake.len().saturating_sub(consts::INITIAL_SNAKE_LENGTH)
    }
}
