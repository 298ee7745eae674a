//! Entry points for a game front end.
//!
//! These are the only calls a user interface needs: list moves for a
//! selected piece, play a human move, ask the engine to reply and check
//! whether the game has ended.

use std::time::Duration;

use super::controller::{find_best_move, AiReply};
use crate::board::MoveError;
use crate::board::search::SearchConfig;
use crate::board::{Board, GameStatus, Move, Square, UndoToken};

/// Legal moves of the piece standing on `from`. Empty for an empty square or
/// a piece of the side not to move.
pub fn legal_moves_for_display(board: &mut Board, from: Square) -> Vec<Move> {
    board
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.from == from)
        .collect()
}

/// Play a move entered by a human after checking it is legal.
pub fn apply_human_move(board: &mut Board, mv: Move) -> Result<UndoToken, MoveError> {
    board.try_apply(mv)
}

/// Ask the engine for a move within `budget`.
///
/// A game that is already over is answered with its outcome without
/// searching.
#[must_use]
pub fn request_ai_move(board: &Board, config: &SearchConfig, budget: Duration) -> AiReply {
    let mut probe = board.clone();
    if let Some(outcome) = probe.status().outcome() {
        return AiReply::Outcome(outcome);
    }
    find_best_move(board, &config.clone().with_time_budget(budget))
}

pub fn game_status(board: &mut Board) -> GameStatus {
    board.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{DrawReason, GameOutcome};

    #[test]
    fn test_moves_for_selected_piece() {
        let mut board = Board::new();
        let knight = legal_moves_for_display(&mut board, "g1".parse().unwrap());
        let targets: Vec<String> = knight.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(knight.len(), 2);
        assert!(targets.contains(&"f3".to_string()));
        assert!(targets.contains(&"h3".to_string()));

        assert!(legal_moves_for_display(&mut board, "e4".parse().unwrap()).is_empty());
        assert!(legal_moves_for_display(&mut board, "e7".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_human_move_is_validated() {
        let mut board = Board::new();
        let bogus = Move::quiet("e1".parse().unwrap(), "e8".parse().unwrap());
        assert_eq!(
            apply_human_move(&mut board, bogus),
            Err(MoveError::Illegal { mv: bogus })
        );
        assert_eq!(board, Board::new());

        let mv = board.parse_move("e2e4").unwrap();
        let token = apply_human_move(&mut board, mv).unwrap();
        assert_eq!(board.piece_at("e4".parse().unwrap()).map(|(_, p)| p), Some(crate::board::Piece::Pawn));
        board.revert(mv, token);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_ai_reply_for_finished_game() {
        let board = Board::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1");
        let reply = request_ai_move(&board, &SearchConfig::default(), Duration::from_millis(50));
        assert_eq!(reply, AiReply::Outcome(GameOutcome::Draw(DrawReason::InsufficientMaterial)));
    }

    #[test]
    fn test_ai_reply_is_legal() {
        let board = Board::new();
        let reply = request_ai_move(&board, &SearchConfig::default(), Duration::from_millis(20));
        let mv = reply.best_move().expect("a move from the start position");
        assert!(board.clone().legal_moves().contains(&mv));
    }

    #[test]
    fn test_game_status_passthrough() {
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(
            game_status(&mut board),
            GameStatus::Checkmate {
                winner: crate::board::Color::White
            }
        );
    }
}
