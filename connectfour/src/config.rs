use serde::{Deserialize, Serialize};

use crate::InvalidConfig;

/// The rules of one game: board dimensions and the run length needed to win.
///
/// Fixed for a game's duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    /// How many pieces of the same mark in a straight or diagonal line win
    /// the game.
    pub inarow: usize,
}

impl Config {
    /// Rejects configurations under which no window of length `inarow`
    /// exists anywhere on the board.
    ///
    /// Meant to be called once by the owning application, before any search.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.rows == 0 || self.columns == 0 || self.inarow == 0 {
            return Err(InvalidConfig::ZeroDimension);
        }
        if self.inarow > self.rows && self.inarow > self.columns {
            return Err(InvalidConfig::RunTooLong {
                inarow: self.inarow,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            inarow: 4,
        }
    }
}
