use crate::zobrist::ZOBRIST;

use super::error::MoveError;
use super::{Board, CastleSide, Color, Move, MoveKind, Piece, Square, UndoToken};

/// Square of the pawn removed by an en passant capture.
#[inline]
fn en_passant_victim(mv: Move) -> Square {
    Square::at(mv.from.rank(), mv.to.file())
}

#[inline]
fn castle_side(kind: MoveKind) -> Option<CastleSide> {
    match kind {
        MoveKind::CastleKingside => Some(CastleSide::King),
        MoveKind::CastleQueenside => Some(CastleSide::Queen),
        _ => None,
    }
}

impl Board {
    /// Play `mv` for the side to move.
    ///
    /// # Panics
    ///
    /// `mv` must come from this position's move generator. Applying a move
    /// whose origin square is empty panics; other contract violations trip
    /// debug assertions.
    pub fn apply(&mut self, mv: Move) -> UndoToken {
        let us = self.side_to_move;
        let them = !us;

        let token = UndoToken {
            captured: None,
            previous_castling: self.castling,
            previous_en_passant: self.en_passant,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_hash: self.hash,
        };
        self.history.push(self.hash);

        if let Some(ep) = self.en_passant.take() {
            self.hash ^= ZOBRIST.en_passant(ep);
        }
        self.hash ^= ZOBRIST.castling(self.castling);

        let captured = match mv.kind {
            MoveKind::EnPassant => self.take_piece(en_passant_victim(mv)),
            MoveKind::Capture => self.take_piece(mv.to),
            _ => None,
        };
        debug_assert!(
            captured.map_or(true, |(color, piece)| color == them && piece != Piece::King),
            "{mv} captures an illegal target"
        );

        let (color, piece) = match self.take_piece(mv.from) {
            Some(found) => found,
            None => panic!("cannot apply {mv}: no piece on {}", mv.from),
        };
        debug_assert_eq!(color, us, "{mv} moves an opponent piece");
        self.put_piece(mv.to, us, mv.promotion.unwrap_or(piece));

        if let Some(side) = castle_side(mv.kind) {
            let rook_from = side.rook_home(us);
            let (_, rook_to) = side.destinations(us);
            if let Some((rook_color, rook)) = self.take_piece(rook_from) {
                self.put_piece(rook_to, rook_color, rook);
            }
        }

        if piece == Piece::King {
            self.castling.remove_color(us);
        }
        self.castling.touch(mv.from);
        self.castling.touch(mv.to);
        self.hash ^= ZOBRIST.castling(self.castling);

        if mv.kind == MoveKind::DoublePawnPush {
            let ep = Square::at((mv.from.rank() + mv.to.rank()) / 2, mv.from.file());
            self.en_passant = Some(ep);
            self.hash ^= ZOBRIST.en_passant(ep);
        }

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = them;
        self.hash ^= ZOBRIST.side();

        UndoToken {
            captured: captured.map(|(_, piece)| piece),
            ..token
        }
    }

    /// Undo `mv`, which must be the last move applied, using its token.
    pub fn revert(&mut self, mv: Move, token: UndoToken) {
        let us = !self.side_to_move;
        self.side_to_move = us;

        if let Some((color, moved)) = self.take_piece(mv.to) {
            let original = if mv.promotion.is_some() {
                Piece::Pawn
            } else {
                moved
            };
            self.put_piece(mv.from, color, original);
        }

        if let Some(side) = castle_side(mv.kind) {
            let rook_from = side.rook_home(us);
            let (_, rook_to) = side.destinations(us);
            if let Some((rook_color, rook)) = self.take_piece(rook_to) {
                self.put_piece(rook_from, rook_color, rook);
            }
        }

        if let Some(piece) = token.captured {
            let sq = if mv.kind == MoveKind::EnPassant {
                en_passant_victim(mv)
            } else {
                mv.to
            };
            self.put_piece(sq, !us, piece);
        }

        self.castling = token.previous_castling;
        self.en_passant = token.previous_en_passant;
        self.halfmove_clock = token.previous_halfmove_clock;
        self.fullmove_number = token.previous_fullmove_number;
        self.hash = token.previous_hash;
        self.history.pop();
    }

    /// Apply `mv` only if it is legal in the current position.
    pub fn try_apply(&mut self, mv: Move) -> Result<UndoToken, MoveError> {
        if self.legal_moves().contains(&mv) {
            Ok(self.apply(mv))
        } else {
            Err(MoveError::Illegal { mv })
        }
    }
}
