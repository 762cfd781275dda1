//! Game tuning and asset configuration
//!
//! All gameplay constants live in [`GameConfig`]. The defaults reproduce the
//! classic feel (400x600 field, 60 FPS, gravity 0.5, flap -8). A JSON file can
//! override any subset of fields; everything missing falls back to the default.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Default location of the optional tuning file
pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// File paths of every optional asset
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub bird: String,
    pub pipe: String,
    pub flap_sound: String,
    pub score_sound: String,
    pub hit_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            background: "assets/images/background.png".to_string(),
            bird: "assets/images/bird.png".to_string(),
            pipe: "assets/images/pipe.png".to_string(),
            flap_sound: "assets/sounds/flap.wav".to_string(),
            score_sound: "assets/sounds/score.wav".to_string(),
            hit_sound: "assets/sounds/hit.wav".to_string(),
        }
    }
}

/// Gameplay tunables
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical surface width in pixels
    pub field_width: u32,
    /// Logical surface height in pixels
    pub field_height: u32,
    pub fps: u32,

    /// Added to the bird's velocity every tick
    pub gravity: f32,
    /// Velocity the bird is set to on a flap (negative = up)
    pub jump_strength: f32,
    /// Fixed column of the bird's left edge
    pub bird_x: i32,
    pub bird_size: u32,

    /// Leftward scroll per tick
    pub pipe_speed: f32,
    pub pipe_width: u32,
    /// Height of each pipe segment
    pub pipe_height: u32,
    /// Offset from the gap centre down to the top of the lower segment
    pub pipe_gap: i32,
    /// Inclusive band the gap centre is drawn from
    pub gap_min: i32,
    pub gap_max: i32,
    /// A new pipe spawns once the newest one is left of `field_width - spawn_distance`
    pub spawn_distance: f32,

    pub game_over_delay_ms: u64,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            field_width: 400,
            field_height: 600,
            fps: 60,
            gravity: 0.5,
            jump_strength: -8.0,
            bird_x: 50,
            bird_size: 40,
            pipe_speed: 3.0,
            pipe_width: 60,
            pipe_height: 150,
            pipe_gap: 150,
            gap_min: 100,
            gap_max: 400,
            spawn_distance: 300.0,
            game_over_delay_ms: 2000,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                debug!("Loaded game config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No game config at {}, using defaults", path.display());
                GameConfig::default()
            }
            Err(e) => {
                warn!("Ignoring game config {}: {}", path.display(), e);
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(ConfigError::Invalid("field size must be non-zero".to_string()));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }
        if self.bird_size == 0 || self.pipe_width == 0 || self.pipe_height == 0 {
            return Err(ConfigError::Invalid("sprite sizes must be non-zero".to_string()));
        }
        if self.pipe_speed <= 0.0 {
            return Err(ConfigError::Invalid("pipe_speed must be positive".to_string()));
        }
        if self.gap_min > self.gap_max {
            return Err(ConfigError::Invalid(format!(
                "gap_min ({}) is greater than gap_max ({})",
                self.gap_min, self.gap_max
            )));
        }
        if self.spawn_distance <= 0.0 {
            return Err(ConfigError::Invalid("spawn_distance must be positive".to_string()));
        }
        Ok(())
    }

    /// Time budget of a single tick
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn game_over_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.game_over_delay_ms)
    }

    /// Horizontal position left of which the newest pipe triggers a spawn
    pub fn spawn_threshold(&self) -> f32 {
        self.field_width as f32 - self.spawn_distance
    }
}
