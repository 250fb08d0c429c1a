//! Static evaluation: material + piece-square tables, scored from White's
//! perspective. Terminal positions short-circuit to a mate/draw sentinel.

use crate::position::Position;
use crate::types::{Color, PieceKind};

/// Sentinel for "white/black is winning by a decisive margin" (mate).
/// Kept well clear of any realistic material+PST total so mate scores never
/// collide with heuristic ones (see SPEC_FULL.md §4.6/§9).
pub const MATE_SCORE: i32 = 100_000;

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 20_000;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
    0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
    5,   5,   10,  25,  25,  10,  5,   5,
    0,   0,   0,   20,  20,   0,   0,   0,
    5,   -5,  -10,  0,   0,   -10, -5,  5,
    5,   10,  10,  -20, -20,  10,  10,  5,
    0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,  0,   0,   0,   0,   -20, -40,
    -30,  0,   10,  15,  15,  10,  0,   -30,
    -30,  5,   15,  20,  20,  15,  5,   -30,
    -30,  0,   15,  20,  20,  15,  0,   -30,
    -30,  5,   10,  15,  15,  10,  5,   -30,
    -40, -20,  0,   5,   5,   0,   -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,  0,   0,   0,   0,   0,   0,   -10,
    -10,  0,   5,   10,  10,  5,   0,   -10,
    -10,  5,   5,   10,  10,  5,   5,   -10,
    -10,  0,   10,  10,  10,  10,  0,   -10,
    -10,  10,  10,  10,  10,  10,  10,  -10,
    -10,  5,   0,   0,   0,   0,   5,   -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
    0,  0,  0,  0,  0,  0,  0,  0,
    5,  10, 10, 10, 10, 10, 10, 5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20,
    -10,  0,   0,   0,  0,   0,   0,   -10,
    -10,  0,   5,   5,  5,   5,   0,   -10,
    -5,   0,   5,   5,  5,   5,   0,   -5,
    0,    0,   5,   5,  5,   5,   0,   -5,
    -10,  5,   5,   5,  5,   5,   0,   -10,
    -10,  0,   5,   0,  0,   0,   0,   -10,
    -20, -10, -10, -5, -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,  0,   0,  10,  30,  20,
];

fn pst_value(kind: PieceKind, square: usize, color: Color) -> i32 {
    // These tables are laid out rank-8-first (row 0 = rank 8), matching the
    // board as printed; `Square::index()` is rank-1-first (bit 0 = a1), so a
    // White piece's index must flip rank to land in the row meant for it
    // (square ^ 56 flips the rank, keeps the file). Black's own index already
    // lines up with that layout (rank 1 at the high end mirrors rank 8 at the
    // low end), so it's used unflipped.
    let table_sq = if color == Color::White { square ^ 56 } else { square };
    match kind {
        PieceKind::Pawn => PAWN_PST[table_sq],
        PieceKind::Knight => KNIGHT_PST[table_sq],
        PieceKind::Bishop => BISHOP_PST[table_sq],
        PieceKind::Rook => ROOK_PST[table_sq],
        PieceKind::Queen => QUEEN_PST[table_sq],
        PieceKind::King => KING_PST[table_sq],
    }
}

/// Static score of `pos`, positive favoring White. Terminal positions return
/// ±`MATE_SCORE` (mate) or 0 (draw) instead of a material tally.
pub fn evaluate(pos: &Position) -> i32 {
    if pos.is_terminal() {
        return match pos.result() {
            Some(Color::White) => MATE_SCORE,
            Some(Color::Black) => -MATE_SCORE,
            None => 0,
        };
    }

    let mut score = 0;
    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        let mut white_bb = pos.board.kind_mask(kind) & pos.board.white;
        while white_bb != 0 {
            let sq = white_bb.trailing_zeros() as usize;
            white_bb &= white_bb - 1;
            score += piece_value(kind) + pst_value(kind, sq, Color::White);
        }
        let mut black_bb = pos.board.kind_mask(kind) & pos.board.black;
        while black_bb != 0 {
            let sq = black_bb.trailing_zeros() as usize;
            black_bb &= black_bb - 1;
            score -= piece_value(kind) + pst_value(kind, sq, Color::Black);
        }
    }
    score
}
