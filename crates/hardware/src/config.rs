//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** The reference machine (256 bytes of RAM, stack at `0xF4`, 1 kHz clock).
//! 2. **Structures:** Hierarchical config for general, memory and clock settings.
//! 3. **Validation:** Rejects geometries the 8-bit address space cannot express.
//!
//! Configuration is supplied as JSON, or use `Config::default()`. Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// RAM size in bytes (the full 8-bit address space).
    pub const RAM_SIZE: usize = constants::RAM_SIZE;

    /// Initial stack pointer.
    pub const STACK_TOP: u8 = constants::STACK_TOP;

    /// Clock period in microseconds (1 kHz).
    pub const TICK_PERIOD_US: u64 = constants::TICK_PERIOD_US;
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON did not match the configuration schema.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The values parsed but describe an impossible machine.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_ticks": 10000 },
///     "clock": { "paced": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_ticks, Some(10_000));
/// assert!(!config.clock.paced);
/// assert_eq!(config.memory.ram_size, 256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Clock pacing.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] for
    /// out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a machine the LS-8 can address.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ram_size = self.memory.ram_size;
        if ram_size == 0 || ram_size > constants::RAM_SIZE {
            return Err(ConfigError::Invalid(format!(
                "memory.ram_size must be in 1..={}, got {ram_size}",
                constants::RAM_SIZE
            )));
        }
        if usize::from(self.memory.stack_top) >= ram_size {
            return Err(ConfigError::Invalid(format!(
                "memory.stack_top {:#04x} lies outside {ram_size} bytes of RAM",
                self.memory.stack_top
            )));
        }
        if self.clock.paced && self.clock.tick_period_us == 0 {
            return Err(ConfigError::Invalid(
                "clock.tick_period_us must be non-zero when clock.paced is set".to_string(),
            ));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction (disassembled) at debug level and print run
    /// statistics at exit.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many ticks even if the program has not halted.
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

/// Memory geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// RAM size in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,

    /// Initial value of the stack pointer (`R7`).
    #[serde(default = "MemoryConfig::default_stack_top")]
    pub stack_top: u8,
}

impl MemoryConfig {
    /// Returns the default RAM size in bytes.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the default initial stack pointer.
    const fn default_stack_top() -> u8 {
        defaults::STACK_TOP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
            stack_top: defaults::STACK_TOP,
        }
    }
}

/// Clock pacing.
///
/// Pacing only approximates the period; it never affects what a program computes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Tick period in microseconds.
    #[serde(default = "ClockConfig::default_tick_period_us")]
    pub tick_period_us: u64,

    /// Sleep between ticks. When false, ticks run back to back.
    #[serde(default = "ClockConfig::default_paced")]
    pub paced: bool,
}

impl ClockConfig {
    /// Returns the default tick period.
    const fn default_tick_period_us() -> u64 {
        defaults::TICK_PERIOD_US
    }

    /// Pacing is on by default.
    const fn default_paced() -> bool {
        true
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_period_us: defaults::TICK_PERIOD_US,
            paced: true,
        }
    }
}
