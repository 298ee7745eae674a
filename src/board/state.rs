use crate::zobrist::ZOBRIST;

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Everything `apply` overwrites that cannot be recomputed from the move.
///
/// Produced by [`Board::apply`] and consumed by [`Board::revert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an undo token is needed to revert the move"]
pub struct UndoToken {
    pub(crate) captured: Option<Piece>,
    pub(crate) previous_castling: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_hash: u64,
}

impl UndoToken {
    /// Piece removed by the move, if it was a capture.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// A chess position.
///
/// Pieces are kept twice: per-piece bitboards for attack computation and a
/// 64-entry mailbox for square lookups. Both are updated together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) mailbox: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
    // Hashes of the positions before each applied move, oldest first.
    pub(crate) history: Vec<u64>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.put_piece(Square::at(0, file), Color::White, piece);
            board.put_piece(Square::at(7, file), Color::Black, piece);
            board.put_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.put_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }
        board.castling = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            mailbox: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant, set only right after a
    /// double pawn push.
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.mailbox[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Place a piece on an empty square, updating the hash.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.mailbox[sq.index()].is_none(), "{sq} is occupied");
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
        self.mailbox[sq.index()] = Some((color, piece));
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Lift whatever stands on `sq`, updating the hash.
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let (color, piece) = self.mailbox[sq.index()].take()?;
        let clear = !Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= clear;
        self.occupied[color.index()] &= clear;
        self.all_occupied &= clear;
        self.hash ^= ZOBRIST.piece(color, piece, sq);
        Some((color, piece))
    }

    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side();
        }
        hash ^= ZOBRIST.castling(self.castling);
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    /// How many times the current position has occurred, counting this one.
    ///
    /// Only positions since the last capture or pawn move can repeat.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        let reversible = (self.halfmove_clock as usize).min(self.history.len());
        1 + self
            .history
            .iter()
            .rev()
            .take(reversible)
            .filter(|&&h| h == self.hash)
            .count()
    }

    /// Neither side has enough material to deliver mate: bare kings, a single
    /// minor piece, or only bishops that all stand on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let both = |piece: Piece| self.pieces(Color::White, piece) | self.pieces(Color::Black, piece);

        if !(both(Piece::Pawn) | both(Piece::Rook) | both(Piece::Queen)).is_empty() {
            return false;
        }

        let knights = both(Piece::Knight).count();
        let bishops = both(Piece::Bishop);

        if knights + bishops.count() <= 1 {
            return true;
        }

        knights == 0 && bishops_all_same_color(bishops)
    }

    /// Color-swapped mirror image: ranks flipped, piece colors exchanged,
    /// the other side to move. History is not carried over.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                board.put_piece(sq.flip_vertical(), !color, piece);
            }
        }
        board.side_to_move = !self.side_to_move;
        board.castling = self.castling.swap_colors();
        board.en_passant = self.en_passant.map(Square::flip_vertical);
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board.hash = board.compute_hash();
        board
    }

    /// Count of non-king pieces `color` has on the board.
    #[must_use]
    pub(crate) fn non_king_pieces(&self, color: Color) -> u32 {
        self.occupancy(color).count() - self.pieces(color, Piece::King).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn bishops_all_same_color(bishops: Bitboard) -> bool {
    (bishops & Bitboard::LIGHT_SQUARES).is_empty() || (bishops & Bitboard::DARK_SQUARES).is_empty()
}
