//! Square/move string notation (§6.2). FEN lives on `Position` itself
//! (`Position::from_fen`/`to_fen`); this module covers the 4-5 character
//! move strings and looks the result up against the position's own legal
//! moves so the returned `Move` always carries correct capture/castling/
//! en-passant flags.

use crate::error::ChessError;
use crate::position::Position;
use crate::types::{Move, PieceKind, Square};

impl Move {
    /// Associated-function form matching §6.3's public API surface; delegates
    /// to [`parse_move`].
    pub fn from_notation(text: &str, pos: &Position) -> Result<Move, ChessError> {
        parse_move(pos, text)
    }
}

pub fn parse_move(pos: &Position, text: &str) -> Result<Move, ChessError> {
    if text.len() != 4 && text.len() != 5 {
        return Err(ChessError::MalformedMoveText(text.to_string()));
    }
    let from = Square::from_notation(&text[0..2])
        .map_err(|_| ChessError::MalformedMoveText(text.to_string()))?;
    let to = Square::from_notation(&text[2..4])
        .map_err(|_| ChessError::MalformedMoveText(text.to_string()))?;
    let promotion = if text.len() == 5 {
        Some(match text.as_bytes()[4] {
            b'q' => PieceKind::Queen,
            b'r' => PieceKind::Rook,
            b'b' => PieceKind::Bishop,
            b'n' => PieceKind::Knight,
            _ => return Err(ChessError::MalformedMoveText(text.to_string())),
        })
    } else {
        None
    };

    pos.legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pawn_push() {
        let pos = Position::new();
        let m = parse_move(&pos, "e2e4").unwrap();
        assert_eq!(m.from, Square(1, 4));
        assert_eq!(m.to, Square(3, 4));
    }

    #[test]
    fn rejects_a_well_formed_but_illegal_move() {
        let pos = Position::new();
        assert_eq!(parse_move(&pos, "e2e5"), Err(ChessError::IllegalMove("e2e5".to_string())));
    }

    #[test]
    fn rejects_malformed_move_text() {
        let pos = Position::new();
        assert_eq!(
            parse_move(&pos, "e2e4x"),
            Err(ChessError::MalformedMoveText("e2e4x".to_string())),
            "bad promotion char"
        );
        assert_eq!(
            parse_move(&pos, "xyz"),
            Err(ChessError::MalformedMoveText("xyz".to_string())),
            "wrong length"
        );
    }

    #[test]
    fn square_notation_round_trips() {
        let sq = Square(3, 4);
        assert_eq!(Square::from_notation(&sq.to_notation()).unwrap(), sq);
    }
}
