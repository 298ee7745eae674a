use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastleSide, Color, Move, Piece, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number are optional and default to
    /// 0 and 1. Every rank must cover exactly eight files, each side needs
    /// exactly one king, no pawn may stand on the first or last rank, and the
    /// side that just moved must not be left in check.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.put_piece(Square::at(rank, file as u8), color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = board.pieces(color, Piece::King).count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }
        let pawns = board.pieces(Color::White, Piece::Pawn) | board.pieces(Color::Black, Piece::Pawn);
        if pawns.iter().any(|sq| sq.rank() == 0 || sq.rank() == 7) {
            return Err(FenError::PawnOnBackRank);
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        if board.in_check(!board.side_to_move) {
            return Err(FenError::OpponentInCheck);
        }

        for c in parts[2].chars() {
            match c {
                'K' => board.castling.set(Color::White, CastleSide::King),
                'Q' => board.castling.set(Color::White, CastleSide::Queen),
                'k' => board.castling.set(Color::Black, CastleSide::King),
                'q' => board.castling.set(Color::Black, CastleSide::Queen),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq: Square = parts[3].parse().map_err(|_| invalid())?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(invalid());
            }
            Some(sq)
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidClock {
                found: clock.to_string(),
            })?;
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = number.parse().map_err(|_| FenError::InvalidClock {
                found: number.to_string(),
            })?;
        }

        board.hash = board.compute_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::King, 'K'),
            (Color::White, CastleSide::Queen, 'Q'),
            (Color::Black, CastleSide::King, 'k'),
            (Color::Black, CastleSide::Queen, 'q'),
        ] {
            if self.castling.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_ai::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation.chars().nth(4) {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if Piece::PROMOTIONS.contains(&piece) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTING_FEN);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_fen_round_trip_with_clocks() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b Kq - 13 42";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.halfmove_clock(), 13);
        assert_eq!(board.fullmove_number(), 42);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant(), "e3".parse().ok());
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::KingCount {
                color: Color::Black,
                found: 0
            })
        );
    }

    #[test]
    fn test_fen_error_bad_rank_count() {
        let result = Board::try_from_fen("8/8/8/8/8/8/4K2k w - - 0 1");
        assert!(matches!(result, Err(FenError::InvalidRank { rank: 7 })));
    }

    #[test]
    fn test_fen_error_overfull_rank() {
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3p w - - 0 1");
        assert!(matches!(result, Err(FenError::TooManyFiles { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1");
        assert!(matches!(result, Err(FenError::TooManyFiles { .. })));
    }

    #[test]
    fn test_fen_error_short_rank() {
        let result = Board::try_from_fen("4k3/8/8/8/7/8/8/4K3 w - - 0 1");
        assert_eq!(result, Err(FenError::TooFewFiles { rank: 4, files: 7 }));
        let result = Board::try_from_fen("4k3/8/8/8//8/8/4K3 w - - 0 1");
        assert!(matches!(result, Err(FenError::TooFewFiles { files: 0, .. })));
    }

    #[test]
    fn test_fen_error_side_not_to_move_in_check() {
        // The rook on e1 gives check to the king White could capture.
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1");
        assert_eq!(result, Err(FenError::OpponentInCheck));
        // The same placement is fine with Black to move.
        let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
        assert!(board.in_check(Color::Black));
        assert!(board
            .legal_moves()
            .iter()
            .all(|mv| board.piece_at(mv.to).map_or(true, |(_, piece)| piece != Piece::King)));
    }

    #[test]
    fn test_fen_error_bad_clock() {
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidClock { .. })));
    }

    #[test]
    fn test_parse_move_legal_and_illegal() {
        let mut board = Board::new();
        let mv = board.parse_move("g1f3").unwrap();
        assert_eq!(mv.to_string(), "g1f3");
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            board.parse_move("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_promotion() {
        let mut board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        let mv = board.parse_move("b7b8n").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Knight));
        assert!(matches!(
            board.parse_move("b7b8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(board.parse_move("b7b8").is_err());
    }
}
