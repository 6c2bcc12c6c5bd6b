//! Runtime configuration resource.
//!
//! Manages simulation settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a loader for the INI file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fps = 60
//! frames = 600
//! time_scale = 1.0
//!
//! [pools]
//! config = ./assets/pools.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_FPS: u32 = 60;
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_POOL_CONFIG: &str = "./assets/pools.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the fixed step rate, run length and where the pool table lives.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Simulated frames per second; the fixed step is `1 / fps`.
    pub fps: u32,
    /// Number of frames the headless runtime advances before exiting.
    pub frames: u64,
    pub time_scale: f32,
    /// Path to the JSON pool table.
    pub pool_config_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            frames: DEFAULT_FRAMES,
            time_scale: DEFAULT_TIME_SCALE,
            pool_config_path: PathBuf::from(DEFAULT_POOL_CONFIG),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Seconds per simulated frame.
    pub fn fixed_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [simulation] section
        if let Some(fps) = config.getuint("simulation", "fps").ok().flatten() {
            if fps == 0 {
                warn!("Ignoring fps = 0, keeping {}", self.fps);
            } else {
                self.fps = fps as u32;
            }
        }
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = (scale as f32).max(0.0);
        }

        // [pools] section
        if let Some(path) = config.get("pools", "config") {
            self.pool_config_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: fps={}, frames={}, time_scale={}, pools={:?}",
            self.fps, self.frames, self.time_scale, self.pool_config_path
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("galehollow_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.frames, DEFAULT_FRAMES);
        assert!((config.fixed_delta() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/galehollow.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.fps, DEFAULT_FPS);
    }

    #[test]
    fn test_load_full_file() {
        let path = temp_path("full");
        std::fs::write(
            &path,
            "[simulation]\nfps = 30\nframes = 90\ntime_scale = 2.0\n\n[pools]\nconfig = pools/custom.json\n",
        )
        .unwrap();
        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.fps, 30);
        assert_eq!(loaded.frames, 90);
        assert_eq!(loaded.time_scale, 2.0);
        assert_eq!(loaded.pool_config_path, PathBuf::from("pools/custom.json"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[simulation]\nframes = 12\nfps = 0\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.frames, 12);
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.pool_config_path, PathBuf::from(DEFAULT_POOL_CONFIG));
        let _ = std::fs::remove_file(path);
    }
}
