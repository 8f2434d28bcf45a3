//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Cells per side of the arena when nothing else is configured
pub(crate) const DEFAULT_ARENA_SIZE: u16 = 20;

/// Simulation ticks per second when nothing else is configured.  Five ticks
/// per second gives the snake one cell every 200 ms.
pub(crate) const DEFAULT_SPEED: u32 = 5;

/// Smallest arena that can hold the starting snake.  The spawn is a
/// horizontal run of [`INITIAL_SNAKE_LENGTH`] cells, so anything narrower is
/// rejected at construction.
pub(crate) const MIN_ARENA_SIZE: u16 = 3;

/// Length of the snake before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food cell
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food cell
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Background for cells whose coordinate parity is even; together with
/// [`CELL_ODD_STYLE`] this gives the board its checkerboard pattern.
pub(crate) const CELL_EVEN_STYLE: Style = Style::new().bg(Color::Black);

/// Background for cells whose coordinate parity is odd
pub(crate) const CELL_ODD_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Probability of placing an obstacle in a given cell when random obstacles
/// are requested
pub(crate) const OBSTACLE_PROBABILITY: f64 = 0.03;

/// When scattering random obstacles, keep this many cells in front of the
/// snake's head clear.
pub(crate) const FORWARDS_CLEARANCE: usize = 7;

/// When scattering random obstacles, keep this many cells behind the snake's
/// tail clear.
pub(crate) const BACKWARDS_CLEARANCE: usize = 3;
