//! Move ordering: MVV-LVA for tactical moves, killer slots for quiet ones.
//! Promotions and pawns about to promote gain weight as pieces come off.

use arrayvec::ArrayVec;

use super::super::{Board, Color, Move, MoveKind, MoveList, Piece, Square, MAX_MOVES};

/// Deepest ply the killer table tracks.
pub(crate) const MAX_PLY: usize = 128;

const TACTICAL_BASE: i32 = 100_000;
const PRIMARY_KILLER: i32 = 50_000;
const SECONDARY_KILLER: i32 = 40_000;
const CHECK_BONUS: i32 = 50;
const CENTER_PAWN_BONUS: i32 = 10;
const PROMOTION_BONUS: i32 = 1200;
const UNSAFE_PROMOTION_PENALTY: i32 = 300;
const PAWN_PUSH_BONUS: i32 = 200;
/// Knight, bishop, rook and queen count below which promotion bonuses grow.
const ENDGAME_SCALE_PIECES: i32 = 10;

const CENTER: [Square; 4] = [Square::at(3, 3), Square::at(3, 4), Square::at(4, 3), Square::at(4, 4)];

/// Two quiet moves per ply that recently caused a beta cutoff.
pub(crate) struct KillerTable {
    slots: Vec<[Option<Move>; 2]>,
}

impl KillerTable {
    pub(crate) fn new() -> Self {
        KillerTable {
            slots: vec![[None; 2]; MAX_PLY],
        }
    }

    pub(crate) fn record(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != Some(mv) {
            row[1] = row[0];
            row[0] = Some(mv);
        }
    }

    fn bonus(&self, ply: usize, mv: Move) -> i32 {
        match self.slots.get(ply) {
            Some(row) if row[0] == Some(mv) => PRIMARY_KILLER,
            Some(row) if row[1] == Some(mv) => SECONDARY_KILLER,
            _ => 0,
        }
    }
}

/// Percentage applied to promotion bonuses: 100 with most pieces on the
/// board, up to 200 once only kings and pawns remain.
pub(crate) fn endgame_scale(board: &Board) -> i32 {
    let pieces: i32 = Color::BOTH
        .into_iter()
        .flat_map(|color| {
            [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
                .into_iter()
                .map(move |piece| board.pieces(color, piece).count() as i32)
        })
        .sum();
    100 + (ENDGAME_SCALE_PIECES - pieces).max(0) * 10
}

/// Bonus for promoting, reduced when the promotion square is attacked.
fn promotion_bonus(board: &Board, mv: Move) -> i32 {
    let mut bonus = PROMOTION_BONUS * endgame_scale(board) / 100;
    if board.is_square_attacked(mv.to, !board.side_to_move()) {
        bonus -= UNSAFE_PROMOTION_PENALTY;
    }
    bonus
}

/// MVV-LVA: most valuable victim first, cheapest attacker breaking ties.
/// Promotions add the promoted piece's value and a promotion bonus.
pub(crate) fn tactical_score(board: &Board, mv: Move) -> i32 {
    let attacker = board.piece_at(mv.from).map_or(0, |(_, piece)| piece.value());
    let victim = match mv.kind {
        MoveKind::EnPassant => Piece::Pawn.value(),
        MoveKind::Capture => board.piece_at(mv.to).map_or(0, |(_, piece)| piece.value()),
        _ => 0,
    };
    let promotion = mv
        .promotion
        .map_or(0, |piece| piece.value() + promotion_bonus(board, mv));
    TACTICAL_BASE + 10 * victim - attacker + promotion
}

/// Bonus for quiet moves that give check, put a pawn in the center or
/// push a pawn to the square before promotion.
fn quiet_bonus(board: &mut Board, mv: Move) -> i32 {
    let mut bonus = 0;
    if board.piece_at(mv.from).map(|(_, piece)| piece) == Some(Piece::Pawn) {
        if CENTER.contains(&mv.to) {
            bonus += CENTER_PAWN_BONUS;
        }
        let seventh = match board.side_to_move() {
            Color::White => 6,
            Color::Black => 1,
        };
        if mv.to.rank() == seventh {
            bonus += PAWN_PUSH_BONUS * endgame_scale(board) / 100;
        }
    }
    let them = !board.side_to_move();
    let token = board.apply(mv);
    if board.in_check(them) {
        bonus += CHECK_BONUS;
    }
    board.revert(mv, token);
    bonus
}

/// Ordering knobs for one node.
pub(crate) struct OrderContext<'a> {
    pub(crate) killers: Option<&'a KillerTable>,
    pub(crate) ply: usize,
    pub(crate) quiet_bonus: bool,
    /// Searched first regardless of its score.
    pub(crate) first: Option<Move>,
}

/// Order `moves` best first. The sort is stable, so equal scores keep
/// generation order.
pub(crate) fn order_moves(board: &mut Board, moves: MoveList, ctx: &OrderContext<'_>) -> MoveList {
    let mut scored: ArrayVec<(Move, i32), MAX_MOVES> = ArrayVec::new();
    for mv in moves {
        let score = if ctx.first == Some(mv) {
            i32::MAX
        } else if mv.is_tactical() {
            tactical_score(board, mv)
        } else {
            let killer = ctx.killers.map_or(0, |k| k.bonus(ctx.ply, mv));
            let bonus = if ctx.quiet_bonus {
                quiet_bonus(board, mv)
            } else {
                0
            };
            killer + bonus
        };
        scored.push((mv, score));
    }
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OrderContext<'static> = OrderContext {
        killers: None,
        ply: 0,
        quiet_bonus: false,
        first: None,
    };

    #[test]
    fn captures_come_first_most_valuable_victim_first() {
        // White can take the queen on d5 with the pawn or the rook on a8 with the rook.
        let mut board = Board::from_fen("r3k3/8/8/3q4/4P3/8/8/R3K3 w - - 0 1");
        let moves = board.legal_moves();
        let ordered = order_moves(&mut board, moves, &PLAIN);
        assert_eq!(ordered[0].to_string(), "e4d5");
        assert_eq!(ordered[1].to_string(), "a1a8");
        assert!(!ordered[2].is_tactical());
    }

    #[test]
    fn killers_rank_above_other_quiet_moves() {
        let mut board = Board::new();
        let moves = board.legal_moves();
        let killer = board.parse_move("b1c3").unwrap();
        let mut killers = KillerTable::new();
        killers.record(3, killer);
        let ctx = OrderContext {
            killers: Some(&killers),
            ply: 3,
            quiet_bonus: false,
            first: None,
        };
        let ordered = order_moves(&mut board, moves.clone(), &ctx);
        assert_eq!(ordered[0], killer);
        // Other plies are unaffected, and generation order is kept.
        let ctx = OrderContext { ply: 4, ..ctx };
        let ordered = order_moves(&mut board, moves.clone(), &ctx);
        assert_eq!(ordered.as_slice(), moves.as_slice());
    }

    #[test]
    fn safe_promotion_before_unsafe_one() {
        // a8 is covered by the rook on b8, h8 is not.
        let mut board = Board::from_fen("1r2k3/P6P/8/8/8/8/8/4K3 w - - 0 1");
        let moves = board.legal_moves();
        let ordered = order_moves(&mut board, moves, &PLAIN);
        let position = |name: &str| ordered.iter().position(|mv| mv.to_string() == name).unwrap();
        assert_eq!(ordered[0].to_string(), "a7b8q");
        assert!(position("h7h8q") < position("a7a8q"));
        assert!(position("a7a8q") < position("h7h8r"));
    }

    #[test]
    fn endgame_scale_grows_as_pieces_come_off() {
        assert_eq!(endgame_scale(&Board::new()), 100);
        assert_eq!(endgame_scale(&Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")), 190);
        assert_eq!(endgame_scale(&Board::from_fen("4k3/8/1P6/8/8/8/6P1/4K3 w - - 0 1")), 200);
    }

    #[test]
    fn quiet_bonus_prefers_pawn_about_to_promote() {
        let mut board = Board::from_fen("4k3/8/1P6/8/8/8/6P1/4K3 w - - 0 1");
        let moves = board.legal_moves();
        let ctx = OrderContext {
            quiet_bonus: true,
            ..PLAIN
        };
        let ordered = order_moves(&mut board, moves, &ctx);
        assert_eq!(ordered[0].to_string(), "b6b7");
    }

    #[test]
    fn quiet_bonus_prefers_checks() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let moves = board.legal_moves();
        let ctx = OrderContext {
            quiet_bonus: true,
            ..PLAIN
        };
        let ordered = order_moves(&mut board, moves, &ctx);
        let first = ordered[0];
        let _ = board.apply(first);
        assert!(board.in_check(Color::Black), "{first}");
    }

    #[test]
    fn killer_slots_shift() {
        let mut killers = KillerTable::new();
        let a = Move::quiet(Square::A1, Square::H1);
        let b = Move::quiet(Square::A8, Square::H8);
        killers.record(0, a);
        killers.record(0, b);
        killers.record(0, b);
        assert_eq!(killers.bonus(0, b), PRIMARY_KILLER);
        assert_eq!(killers.bonus(0, a), SECONDARY_KILLER);
        killers.record(MAX_PLY + 5, a);
    }
}
