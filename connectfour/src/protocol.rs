use serde::{Deserialize, Serialize};

use crate::{Cell, Config, Mark};

/// Request for a bot to do something.
///
/// Every `PlayTurn` carries the full position, the acting mark and the game
/// config, so bots can stay stateless between turns.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame { mark: Mark },
    /// Request to pick a column.
    ///
    /// The response should be a [`MoveResponse`].
    PlayTurn {
        /// The mark the bot is playing this turn.
        mark: Mark,
        config: Config,
        /// Flat row-major snapshot of the board, row 0 first.
        board: Vec<Cell>,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// The column the bot drops its piece into.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct MoveResponse(pub usize);
