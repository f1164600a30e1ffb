use crate::types::{GameMode, INITIAL_MODE, INITIAL_SPEED};

/// Values a reset restores
///
/// The grid size is a build-time constant and is not part of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Boundary policy for new games
    pub mode: GameMode,
    /// Ticks per second requested from the scheduler
    pub speed: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: INITIAL_MODE,
            speed: INITIAL_SPEED,
        }
    }
}

impl GameSettings {
    pub fn new(mode: GameMode, speed: u32) -> Self {
        Self { mode, speed }
    }

    /// Default speed with walls that end the game
    pub fn classic() -> Self {
        Self {
            mode: GameMode::Classic,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.mode, GameMode::NoWalls);
        assert_eq!(settings.speed, 6);
    }

    #[test]
    fn test_classic_settings() {
        let settings = GameSettings::classic();
        assert_eq!(settings.mode, GameMode::Classic);
        assert_eq!(settings.speed, INITIAL_SPEED);
    }
}
