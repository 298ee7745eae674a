//! Static position evaluation.
//!
//! The score is a weighted sum of five terms, each computed as White minus
//! Black in centipawns:
//! - material
//! - piece-square tables (king table switches in the endgame)
//! - mobility (pseudo-legal move count difference)
//! - king safety
//! - hanging pieces
//!
//! Weights are percentages, so a weight of 100 takes a term at face value.

mod king_safety;
mod pst;
mod threats;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece};

/// Centipawns per move of mobility difference, before weighting.
const MOBILITY_UNIT: i32 = 10;

/// A side whose non-king piece count drops to this is in the endgame.
const ENDGAME_PIECES: u32 = 3;

/// Term weights in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub threats: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: 100,
            positional: 30,
            mobility: 20,
            king_safety: 50,
            threats: 50,
        }
    }
}

impl EvalWeights {
    /// Material only, every other term switched off.
    #[must_use]
    pub fn material_only() -> Self {
        EvalWeights {
            material: 100,
            positional: 0,
            mobility: 0,
            king_safety: 0,
            threats: 0,
        }
    }
}

impl Board {
    /// True when either side has at most three pieces besides its king.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        Color::BOTH
            .into_iter()
            .any(|color| self.non_king_pieces(color) <= ENDGAME_PIECES)
    }

    pub(crate) fn material_score(&self, color: Color) -> i32 {
        [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|piece| self.pieces(color, piece).count() as i32 * piece.value())
            .sum()
    }

    /// Score from White's point of view with the default weights.
    #[must_use]
    pub fn evaluate_white(&self) -> i32 {
        self.evaluate_white_with(&EvalWeights::default())
    }

    /// Score from White's point of view.
    #[must_use]
    pub fn evaluate_white_with(&self, weights: &EvalWeights) -> i32 {
        let diff = |term: &dyn Fn(Color) -> i32| term(Color::White) - term(Color::Black);
        let endgame = self.is_endgame();

        let mut total = diff(&|c| self.material_score(c)) * weights.material;
        if weights.positional != 0 {
            total += diff(&|c| self.positional_score(c, endgame)) * weights.positional;
        }
        if weights.mobility != 0 {
            total += diff(&|c| self.pseudo_legal_count(c) as i32 * MOBILITY_UNIT) * weights.mobility;
        }
        if weights.king_safety != 0 {
            total += diff(&|c| self.king_safety_score(c)) * weights.king_safety;
        }
        if weights.threats != 0 {
            total += diff(&|c| self.threat_score(c)) * weights.threats;
        }
        total / 100
    }

    /// Score from the side to move's point of view with the default weights.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_with(&EvalWeights::default())
    }

    /// Score from the side to move's point of view. Positive favors the mover.
    #[must_use]
    pub fn evaluate_with(&self, weights: &EvalWeights) -> i32 {
        self.side_to_move.sign() * self.evaluate_white_with(weights)
    }
}
