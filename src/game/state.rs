//! Per-match state machine: board, turn, status and winner.
//!
//! `active` → `active` on a valid non-terminal move, `active` → `finished` on a
//! win or a full board. Nothing leaves `finished`.

use thiserror::Error;

use crate::config::game::{BOARD_SIZE, FIRST_MARK};
use crate::game::board::Board;
use crate::game::types::{Mark, MatchStatus, Winner};

/// Reasons a move is refused. None of them changes the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameRuleError {
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Invalid coordinates")]
    OutOfBounds,
    #[error("Cell already occupied")]
    CellOccupied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Mark allowed to move next. `None` once finished.
    pub turn: Option<Mark>,
    pub status: MatchStatus,
    pub winner: Option<Winner>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh active game, first mark to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Some(FIRST_MARK),
            status: MatchStatus::Active,
            winner: None,
        }
    }

    /// Validate and apply a move for `mark`.
    ///
    /// Checks run in order: turn, bounds, occupancy. On success the board,
    /// turn, status and winner are updated together.
    pub fn apply_move(&mut self, mark: Mark, row: i64, col: i64) -> Result<(), GameRuleError> {
        if self.turn != Some(mark) {
            return Err(GameRuleError::NotYourTurn);
        }
        let (row, col) = match (to_index(row), to_index(col)) {
            (Some(r), Some(c)) => (r, c),
            _ => return Err(GameRuleError::OutOfBounds),
        };
        match self.board.get(row, col) {
            Some(cell) if cell.is_empty() => {}
            Some(_) => return Err(GameRuleError::CellOccupied),
            None => return Err(GameRuleError::OutOfBounds),
        }

        self.board.set(row, col, mark);

        if let Some(winner) = self.board.winner() {
            self.finish(Winner::Mark(winner));
        } else if self.board.is_full() {
            self.finish(Winner::Draw);
        } else {
            self.turn = Some(mark.other());
        }
        Ok(())
    }

    fn finish(&mut self, winner: Winner) {
        self.status = MatchStatus::Finished;
        self.winner = Some(winner);
        self.turn = None;
    }
}

fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v < BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    fn play(state: &mut GameState, moves: &[(Mark, i64, i64)]) {
        for &(mark, row, col) in moves {
            state.apply_move(mark, row, col).unwrap();
        }
    }

    #[test]
    fn test_new_game_is_active_with_first_mark() {
        let state = GameState::new();
        assert_eq!(state.status, MatchStatus::Active);
        assert_eq!(state.turn, Some(Mark::X));
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_valid_move_toggles_turn() {
        let mut state = GameState::new();
        state.apply_move(Mark::X, 1, 1).unwrap();
        assert_eq!(state.board.get(1, 1), Some(Cell::Marked(Mark::X)));
        assert_eq!(state.turn, Some(Mark::O));
        assert_eq!(state.status, MatchStatus::Active);
    }

    #[test]
    fn test_wrong_turn_rejected_without_mutation() {
        let mut state = GameState::new();
        let before = state.clone();
        assert_eq!(state.apply_move(Mark::O, 0, 0), Err(GameRuleError::NotYourTurn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_mutation() {
        let mut state = GameState::new();
        let before = state.clone();
        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i64::MAX, 0)] {
            assert_eq!(state.apply_move(Mark::X, row, col), Err(GameRuleError::OutOfBounds));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut state = GameState::new();
        play(&mut state, &[(Mark::X, 0, 0)]);
        let before = state.clone();
        assert_eq!(state.apply_move(Mark::O, 0, 0), Err(GameRuleError::CellOccupied));
        assert_eq!(state, before);
    }

    #[test]
    fn test_turn_checked_before_bounds() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(Mark::O, 9, 9), Err(GameRuleError::NotYourTurn));
    }

    #[test]
    fn test_win_finishes_and_clears_turn() {
        let mut state = GameState::new();
        play(&mut state, &[
            (Mark::X, 0, 0), (Mark::O, 1, 0),
            (Mark::X, 0, 1), (Mark::O, 1, 1),
            (Mark::X, 0, 2),
        ]);
        assert_eq!(state.status, MatchStatus::Finished);
        assert_eq!(state.winner, Some(Winner::Mark(Mark::X)));
        assert_eq!(state.turn, None);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = GameState::new();
        // X O X
        // X O O
        // O X X
        play(&mut state, &[
            (Mark::X, 0, 0), (Mark::O, 0, 1),
            (Mark::X, 0, 2), (Mark::O, 1, 1),
            (Mark::X, 1, 0), (Mark::O, 1, 2),
            (Mark::X, 2, 1), (Mark::O, 2, 0),
            (Mark::X, 2, 2),
        ]);
        assert_eq!(state.status, MatchStatus::Finished);
        assert_eq!(state.winner, Some(Winner::Draw));
        assert_eq!(state.turn, None);
    }

    #[test]
    fn test_no_move_after_finish() {
        let mut state = GameState::new();
        play(&mut state, &[
            (Mark::X, 0, 0), (Mark::O, 1, 0),
            (Mark::X, 0, 1), (Mark::O, 1, 1),
            (Mark::X, 0, 2),
        ]);
        let finished = state.clone();
        for mark in [Mark::X, Mark::O] {
            assert_eq!(state.apply_move(mark, 2, 2), Err(GameRuleError::NotYourTurn));
        }
        assert_eq!(state, finished);
    }

    #[test]
    fn test_o_wins_on_column() {
        let mut state = GameState::new();
        play(&mut state, &[
            (Mark::X, 0, 0), (Mark::O, 0, 2),
            (Mark::X, 1, 0), (Mark::O, 1, 2),
            (Mark::X, 2, 1), (Mark::O, 2, 2),
        ]);
        assert_eq!(state.winner, Some(Winner::Mark(Mark::O)));
    }
}
