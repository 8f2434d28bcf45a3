mod arena;
mod direction;
mod engine;
mod snake;
use self::arena::Arena;
use self::direction::Direction;
use self::engine::{Engine, Status};
use crate::app::Screen;
use crate::command::Command;
use crate::config::{ConfigError, GameConfig};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// The game controller: wires key events and the tick clock to the
/// simulation engine and draws one frame per state change.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &GameConfig, rng: R) -> Result<Game<R>, ConfigError> {
        let engine = Engine::new_with_rng(config, rng)?;
        Ok(Game {
            engine,
            tick_period: config.tick_period(),
            next_tick: None,
        })
    }

    /// Wait for the next key event or tick deadline, whichever comes first.
    /// While the game is running a tick fires whenever the deadline passes;
    /// in every other status the clock is disarmed and only input is read.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.engine.status() == Status::Running {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + self.tick_period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.engine.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            self.next_tick = None;
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Q if self.engine.status() != Status::Running => return Some(Screen::Quit),
            Command::Q => (),
            Command::Up => self.apply_steer(Direction::Up),
            Command::Down => self.apply_steer(Direction::Down),
            Command::Left => self.apply_steer(Direction::Left),
            Command::Right => self.apply_steer(Direction::Right),
        }
        None
    }

    fn apply_steer(&mut self, direction: Direction) {
        if self.engine.steer(direction) {
            // A restart moves the snake on the keypress itself; the clock
            // rearms on the next pass through process_input().
            self.engine.advance();
            self.next_tick = None;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.engine.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let size = self.engine.arena().size();
        let board = center_rect(
            board_area,
            Size {
                width: size.saturating_add(2),
                height: size.saturating_add(2),
            },
        );
        Block::bordered().render(board, buf);

        let mut canvas = Canvas {
            area: board.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in self.engine.arena().positions() {
            let style = if Arena::cell_parity(pos) {
                consts::CELL_EVEN_STYLE
            } else {
                consts::CELL_ODD_STYLE
            };
            canvas.paint(pos, style);
        }
        for &pos in self.engine.arena().obstacles() {
            canvas.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        if let Some(food) = self.engine.food() {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &pos in self.engine.snake().body() {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so its glyph wins over the body symbol
        canvas.draw_cell(
            self.engine.snake().head(),
            self.engine.snake().head_symbol(),
            consts::SNAKE_STYLE,
        );

        match self.engine.status() {
            Status::Running => (),
            Status::Ready => {
                Line::raw(" Press an arrow key to start").render(msg2_area, buf);
            }
            Status::Lost | Status::Won => {
                let banner = if self.engine.status() == Status::Lost {
                    " — GAME OVER —"
                } else {
                    " — YOU WIN —"
                };
                Span::from(banner).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press an arrow key to play again — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// Helper for drawing on the board's cell grid.  `area` is the board
/// interior; positions are arena cells.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Merge `style` into a cell without touching its glyph
    fn paint(&mut self, pos: Position, style: Style) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.set_style(style);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let x = self.area.x.checked_add(pos.x)?;
        let y = self.area.y.checked_add(pos.y)?;
        self.buf.cell_mut((x, y))
    }
}
