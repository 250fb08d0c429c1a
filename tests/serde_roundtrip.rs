//! `serde` is opt-in (the `serde` feature); this only compiles when it's on.
#![cfg(feature = "serde")]

use chess_core::{Move, PieceKind, Position, Square};

#[test]
fn position_round_trips_through_json() {
    let pos = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4").unwrap();
    let json = serde_json::to_string(&pos).unwrap();
    let restored: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(pos, restored);
    assert_eq!(pos.halfmove_clock, restored.halfmove_clock);
    assert_eq!(pos.fullmove_number, restored.fullmove_number);
}

#[test]
fn move_round_trips_through_json() {
    let mv = Move {
        from: Square(1, 4),
        to: Square(3, 4),
        promotion: None,
        is_castling: false,
        is_en_passant: false,
        captured: None,
    };
    let json = serde_json::to_string(&mv).unwrap();
    let restored: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, restored);
}

#[test]
fn promotion_move_round_trips_through_json() {
    let mv = Move {
        from: Square(6, 0),
        to: Square(7, 0),
        promotion: Some(PieceKind::Queen),
        is_castling: false,
        is_en_passant: false,
        captured: None,
    };
    let json = serde_json::to_string(&mv).unwrap();
    let restored: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, restored);
}
