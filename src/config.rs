use crate::consts;
use ratatui::layout::Position;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Construction-time game configuration.  A `GameConfig` is plain data;
/// nothing is read from disk or the command line.  Invalid values are
/// rejected by [`GameConfig::validate()`] before the first tick runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameConfig {
    /// Cells per side of the (square) arena
    pub(crate) size: u16,

    /// Simulation speed in ticks per second
    pub(crate) speed: u32,

    /// Scatter random obstacles over the arena at construction
    pub(crate) random_obstacles: bool,

    /// Fixed obstacle cells.  Ignored when `random_obstacles` is set.
    pub(crate) obstacles: HashSet<Position>,
}

impl GameConfig {
    /// Check the parts of the configuration that can be judged without
    /// building the arena.  Obstacle placement is checked against the spawn
    /// when the engine is constructed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arena cannot hold the starting snake or if the
    /// speed is zero.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.size < consts::MIN_ARENA_SIZE {
            return Err(ConfigError::ArenaTooSmall { size: self.size });
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(())
    }

    /// Time between simulation ticks.  Only meaningful on a validated
    /// configuration.
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.speed.max(1)).max(1))
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            size: consts::DEFAULT_ARENA_SIZE,
            speed: consts::DEFAULT_SPEED,
            random_obstacles: false,
            obstacles: HashSet::new(),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("arena size {size} cannot hold the starting snake")]
    ArenaTooSmall { size: u16 },
    #[error("speed must be at least one tick per second")]
    ZeroSpeed,
    #[error("obstacle at ({x}, {y}) lies outside the arena")]
    ObstacleOutOfBounds { x: u16, y: u16 },
    #[error("obstacle at ({x}, {y}) overlaps the starting snake")]
    ObstacleOnSpawn { x: u16, y: u16 },
    #[error("obstacles leave no open cell for food")]
    NoOpenCell,
}

impl ConfigError {
    pub(crate) fn obstacle_out_of_bounds(pos: Position) -> ConfigError {
        ConfigError::ObstacleOutOfBounds { x: pos.x, y: pos.y }
    }

    pub(crate) fn obstacle_on_spawn(pos: Position) -> ConfigError {
        ConfigError::ObstacleOnSpawn { x: pos.x, y: pos.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn undersized_arena_rejected(#[case] size: u16) {
        let config = GameConfig {
            size,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { size: s }) if s == size
        ));
    }

    #[test]
    fn zero_speed_rejected() {
        let config = GameConfig {
            speed: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSpeed)));
    }

    #[test]
    fn default_config_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(1, Duration::from_millis(1000))]
    #[case(5, Duration::from_millis(200))]
    #[case(20, Duration::from_millis(50))]
    #[case(2000, Duration::from_millis(1))]
    fn tick_period_from_speed(#[case] speed: u32, #[case] period: Duration) {
        let config = GameConfig {
            speed,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_period(), period);
    }
}
