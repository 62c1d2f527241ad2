//! Demo configuration, read from an optional TOML file.
//!
//! ```toml
//! start = "287B_504F_D9E3_1A6C"
//! end = "1234_5678_9ABC_DEF0"
//! report_period = 1000000
//! color = true
//! progress = "console"
//!
//! [scramble]
//! moves = 40
//! seed = 7
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::fifteen::FifteenBoard;
use crate::reporter::DEFAULT_PERIOD;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub start: String,
    pub end: String,
    pub report_period: u64,
    pub color: bool,
    pub progress: Progress,
    /// Replaces `start` by a random walk from `end` when present.
    pub scramble: Option<ScrambleConfig>,
}

/// Where search events go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progress {
    #[default]
    Console,
    Tracing,
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrambleConfig {
    pub moves: usize,
    #[serde(default)]
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: "287B_504F_D9E3_1A6C".to_string(),
            end: "1234_5678_9ABC_DEF0".to_string(),
            report_period: DEFAULT_PERIOD,
            color: true,
            progress: Progress::Console,
            scramble: None,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the start and end boards.
    pub fn boards(&self) -> Result<(FifteenBoard, FifteenBoard), ConfigError> {
        let end: FifteenBoard = self.end.parse().map_err(|source| ConfigError::Board {
            field: "end",
            source,
        })?;
        let start = match &self.scramble {
            Some(scramble) => {
                let mut rng = StdRng::seed_from_u64(scramble.seed);
                end.scrambled(&mut rng, scramble.moves)
            }
            None => self.start.parse().map_err(|source| ConfigError::Board {
                field: "start",
                source,
            })?,
        };
        Ok((start, end))
    }
}
