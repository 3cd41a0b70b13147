// Configuration module for reading Arena.toml
//
// All tunable simulation parameters live here, loaded once at startup with
// a hardcoded fallback when the file is missing or malformed.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub tick_log: TickLogConfig,
}

/// Board and pacing parameters
#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// Side length of the square board
    pub grid_size: usize,
    /// Apple spawn attempts per tick; attempts on occupied cells are skipped
    pub apples_per_tick: u32,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Optional RNG seed for reproducible runs; omit for a random seed
    pub rng_seed: Option<u64>,
}

/// Per-tick JSONL logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TickLogConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Arena.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Arena.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Arena.toml
    pub fn default_hardcoded() -> Self {
        Config {
            game: GameConfig {
                grid_size: 50,
                apples_per_tick: 10,
                tick_interval_ms: 1000,
                rng_seed: None,
            },
            tick_log: TickLogConfig {
                enabled: false,
                log_file_path: "snake_arena_ticks.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Arena.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.game.grid_size, 50);
        assert_eq!(config.game.apples_per_tick, 10);
        assert_eq!(config.game.tick_interval_ms, 1000);
        assert!(config.game.rng_seed.is_none());
        assert!(!config.tick_log.enabled);
    }

    #[test]
    fn test_arena_toml_can_be_parsed() {
        // This test ensures Arena.toml is valid and can be parsed
        let result = Config::from_file("Arena.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Arena.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Arena.toml").expect("Arena.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(file_config.game.grid_size, hardcoded_config.game.grid_size);
        assert_eq!(
            file_config.game.apples_per_tick,
            hardcoded_config.game.apples_per_tick
        );
        assert_eq!(
            file_config.game.tick_interval_ms,
            hardcoded_config.game.tick_interval_ms
        );
        assert_eq!(file_config.game.rng_seed, hardcoded_config.game.rng_seed);
        assert_eq!(
            file_config.tick_log.enabled,
            hardcoded_config.tick_log.enabled
        );
        assert_eq!(
            file_config.tick_log.log_file_path,
            hardcoded_config.tick_log.log_file_path
        );
    }

    #[test]
    fn test_load_or_default_works() {
        // This should succeed with the actual file
        let config = Config::load_or_default();
        assert_eq!(config.game.grid_size, 50);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
