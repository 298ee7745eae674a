//! Game termination rules.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Why a game ended drawn without stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

/// State of the game from the rules' point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The finished game's outcome, `None` while play continues.
    #[must_use]
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => Some(GameOutcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(GameOutcome::Stalemate),
            GameStatus::Draw(reason) => Some(GameOutcome::Draw(reason)),
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

impl Board {
    /// Classify the position. Checkmate and stalemate take precedence over
    /// the draw rules.
    pub fn status(&mut self) -> GameStatus {
        let side = self.side_to_move;
        if self.legal_moves().is_empty() {
            return if self.in_check(side) {
                GameStatus::Checkmate { winner: !side }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.halfmove_clock >= 100 {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if self.repetition_count() >= 3 {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else {
            GameStatus::InProgress
        }
    }
}
