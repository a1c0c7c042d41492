/// Game configuration constants.
///
/// This module defines the board dimensions, the mark order, and the
/// human-readable texts sent to players.
use crate::game::types::Mark;

/// Number of rows and columns of the board.
pub const BOARD_SIZE: usize = 3;

/// Mark given to the first seated player. This mark moves first.
pub const FIRST_MARK: Mark = Mark::X;

pub const TEXT_CONNECTED: &str = "Connected to server. Waiting for opponent...";
pub const TEXT_WAITING: &str = "Waiting for another player...";
pub const TEXT_OPPONENT_DISCONNECTED: &str = "Opponent disconnected";

pub const TEXT_YOU_WON: &str = "You won!";
pub const TEXT_YOU_LOST: &str = "You lost!";
pub const TEXT_DRAW: &str = "Game ended in a draw!";
pub const TEXT_YOUR_TURN: &str = "Your turn";
pub const TEXT_OPPONENT_TURN: &str = "Opponent's turn";
