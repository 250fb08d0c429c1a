//! Position = Board + side to move + castling rights + en-passant target +
//! move clocks. Move generation, make-move, terminal detection and FEN
//! glue all live here.

use crate::bitboard::{bishop_attacks, file_mask, queen_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS};
use crate::board::Board;
use crate::error::ChessError;
use crate::types::{
    CastleRights, Color, Move, PieceKind, Square, BLACK_KINGSIDE, BLACK_QUEENSIDE, WHITE_KINGSIDE,
    WHITE_QUEENSIDE,
};
use crate::zobrist::{castle_key, ep_file_key, piece_key, side_key};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "PositionFields", into = "PositionFields"))]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastleRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Incremental Zobrist word over pieces/side/castling/en-passant (NOT depth,
    /// NOT the move clocks — depth is folded in separately by the transposition
    /// table, and the clocks aren't part of cache-key equality, see `tt::PositionKey`).
    /// Never serialized: a stale or hand-edited `hash` would desync from the
    /// fields it's derived from, so `PositionFields` omits it and every
    /// deserialized `Position` recomputes it via `compute_hash`.
    hash: u64,
}

/// Wire shape for `Position`'s `serde` impl — every field except the cached
/// `hash`, which `From<PositionFields>` recomputes.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PositionFields {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

#[cfg(feature = "serde")]
impl From<PositionFields> for Position {
    fn from(fields: PositionFields) -> Position {
        let mut pos = Position {
            board: fields.board,
            side_to_move: fields.side_to_move,
            castling: fields.castling,
            en_passant: fields.en_passant,
            halfmove_clock: fields.halfmove_clock,
            fullmove_number: fields.fullmove_number,
            hash: 0,
        };
        pos.hash = pos.compute_hash();
        pos
    }
}

#[cfg(feature = "serde")]
impl From<Position> for PositionFields {
    fn from(pos: Position) -> PositionFields {
        PositionFields {
            board: pos.board,
            side_to_move: pos.side_to_move,
            castling: pos.castling,
            en_passant: pos.en_passant,
            halfmove_clock: pos.halfmove_clock,
            fullmove_number: pos.fullmove_number,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
    }
}
impl Eq for Position {}

impl Position {
    pub fn new() -> Position {
        let board = Board::new();
        let mut pos = Position {
            board,
            side_to_move: Color::White,
            castling: CastleRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        };
        pos.hash = pos.compute_hash();
        pos
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    fn compute_hash(&self) -> u64 {
        let mut h = 0u64;
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            for color in [Color::White, Color::Black] {
                let mut bb = self.board.kind_mask(kind) & self.board.color_mask(color);
                while bb != 0 {
                    let sq = bb.trailing_zeros() as usize;
                    bb &= bb - 1;
                    h ^= piece_key(sq, kind.index(), color.index());
                }
            }
        }
        if self.side_to_move == Color::Black {
            h ^= side_key(1);
        }
        h ^= castle_key(self.castling.0);
        if let Some(ep) = self.en_passant {
            h ^= ep_file_key(ep.file());
        }
        h
    }

    // --- Attack detection (4.3) ---

    /// True if any square in `targets` is attacked by a piece of `by_color`.
    pub fn is_attacked(&self, targets: u64, by_color: Color) -> bool {
        let mut bb = targets;
        while bb != 0 {
            let sq = bb.trailing_zeros() as usize;
            bb &= bb - 1;
            if self.is_square_attacked(Square::from_index(sq), by_color) {
                return true;
            }
        }
        false
    }

    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let occ = self.board.occupied();
        let attacker = self.board.color_mask(by_color);

        let pawn_dir: i32 = if by_color == Color::White { 1 } else { -1 };
        let origin_rank = square.rank() as i32 - pawn_dir;
        if (0..8).contains(&origin_rank) {
            for df in [-1i32, 1] {
                let origin_file = square.file() as i32 + df;
                if (0..8).contains(&origin_file) {
                    let origin = Square(origin_rank as usize, origin_file as usize);
                    if self.board.pawn & attacker & origin.bit() != 0 {
                        return true;
                    }
                }
            }
        }

        if KNIGHT_ATTACKS[square.index()] & self.board.knight & attacker != 0 {
            return true;
        }
        if bishop_attacks(square, occ) & self.board.bishop & attacker != 0 {
            return true;
        }
        if rook_attacks(square, occ) & self.board.rook & attacker != 0 {
            return true;
        }
        if queen_attacks(square, occ) & self.board.queen & attacker != 0 {
            return true;
        }
        if KING_ATTACKS[square.index()] & self.board.king & attacker != 0 {
            return true;
        }
        false
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let bb = self.board.king & self.board.color_mask(color);
        if bb == 0 {
            None
        } else {
            Some(Square::from_index(bb.trailing_zeros() as usize))
        }
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opposite()),
            None => false,
        }
    }

    // --- Move generation (4.2) ---

    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let opponent = side.opposite();
        let mut legal = Vec::new();

        for m in self.pseudo_legal_moves() {
            if m.is_castling {
                let mid = Square(m.from.rank(), (m.from.file() + m.to.file()) / 2);
                if self.is_square_attacked(m.from, opponent)
                    || self.is_square_attacked(mid, opponent)
                    || self.is_square_attacked(m.to, opponent)
                {
                    continue;
                }
            }
            let after = self.make_move(&m);
            if !after.in_check(side) {
                legal.push(m);
            }
        }
        legal
    }

    fn pseudo_legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let own = self.board.color_mask(side);
        let mut moves = Vec::new();

        let mut pawns = self.board.pawn & own;
        while pawns != 0 {
            let sq = pawns.trailing_zeros() as usize;
            pawns &= pawns - 1;
            self.generate_pawn_moves(Square::from_index(sq), &mut moves);
        }

        for (kind, mask) in [
            (PieceKind::Knight, self.board.knight),
            (PieceKind::Bishop, self.board.bishop),
            (PieceKind::Rook, self.board.rook),
            (PieceKind::Queen, self.board.queen),
            (PieceKind::King, self.board.king),
        ] {
            let mut bb = mask & own;
            while bb != 0 {
                let sq = bb.trailing_zeros() as usize;
                bb &= bb - 1;
                let from = Square::from_index(sq);
                self.generate_piece_moves(from, kind, &mut moves);
                if kind == PieceKind::King {
                    self.generate_castling_moves(from, &mut moves);
                }
            }
        }

        moves
    }

    fn generate_piece_moves(&self, from: Square, kind: PieceKind, moves: &mut Vec<Move>) {
        let occ = self.board.occupied();
        let own = self.board.color_mask(self.side_to_move);
        let attacks = match kind {
            PieceKind::Knight => KNIGHT_ATTACKS[from.index()],
            PieceKind::Bishop => bishop_attacks(from, occ),
            PieceKind::Rook => rook_attacks(from, occ),
            PieceKind::Queen => queen_attacks(from, occ),
            PieceKind::King => KING_ATTACKS[from.index()],
            PieceKind::Pawn => 0,
        };
        let mut targets = attacks & !own;
        while targets != 0 {
            let sq = targets.trailing_zeros() as usize;
            targets &= targets - 1;
            let to = Square::from_index(sq);
            moves.push(self.build_move(from, to, None, false, false));
        }
    }

    fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let side = self.side_to_move;
        let occ = self.board.occupied();
        let opponent_mask = self.board.color_mask(side.opposite());
        let dir: i32 = if side == Color::White { 1 } else { -1 };
        let start_rank = if side == Color::White { 1 } else { 6 };
        let promo_rank = if side == Color::White { 7 } else { 0 };

        let r = from.rank() as i32;
        let f = from.file() as i32;
        let forward_r = r + dir;

        if (0..8).contains(&forward_r) {
            let forward = Square(forward_r as usize, f as usize);
            if occ & forward.bit() == 0 {
                if forward.rank() == promo_rank {
                    for promo in [
                        PieceKind::Queen,
                        PieceKind::Rook,
                        PieceKind::Bishop,
                        PieceKind::Knight,
                    ] {
                        moves.push(self.build_move(from, forward, Some(promo), false, false));
                    }
                } else {
                    moves.push(self.build_move(from, forward, None, false, false));
                    if r == start_rank as i32 {
                        let double_r = r + 2 * dir;
                        let double_sq = Square(double_r as usize, f as usize);
                        if occ & double_sq.bit() == 0 {
                            moves.push(self.build_move(from, double_sq, None, false, false));
                        }
                    }
                }
            }

            for df in [-1i32, 1] {
                let cf = f + df;
                if (0..8).contains(&cf) {
                    let target = Square(forward_r as usize, cf as usize);
                    if opponent_mask & target.bit() != 0 {
                        if target.rank() == promo_rank {
                            for promo in [
                                PieceKind::Queen,
                                PieceKind::Rook,
                                PieceKind::Bishop,
                                PieceKind::Knight,
                            ] {
                                moves.push(self.build_move(from, target, Some(promo), false, false));
                            }
                        } else {
                            moves.push(self.build_move(from, target, None, false, false));
                        }
                    } else if Some(target) == self.en_passant {
                        moves.push(self.build_move(from, target, None, true, false));
                    }
                }
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let side = self.side_to_move;
        let home_rank = if side == Color::White { 0 } else { 7 };
        if from != Square(home_rank, 4) {
            return;
        }
        let occ = self.board.occupied();

        if self.castling.kingside(side) {
            let rook_sq = Square(home_rank, 7);
            let between = Square(home_rank, 5).bit() | Square(home_rank, 6).bit();
            if occ & between == 0 && self.board.rook & self.board.color_mask(side) & rook_sq.bit() != 0 {
                moves.push(self.build_move(from, Square(home_rank, 6), None, false, false).castling());
            }
        }
        if self.castling.queenside(side) {
            let rook_sq = Square(home_rank, 0);
            let between =
                Square(home_rank, 1).bit() | Square(home_rank, 2).bit() | Square(home_rank, 3).bit();
            if occ & between == 0 && self.board.rook & self.board.color_mask(side) & rook_sq.bit() != 0 {
                moves.push(self.build_move(from, Square(home_rank, 2), None, false, false).castling());
            }
        }
    }

    fn build_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        is_en_passant: bool,
        is_castling: bool,
    ) -> Move {
        let captured = if is_en_passant {
            Some(PieceKind::Pawn)
        } else {
            self.board.get_piece(to).map(|(_, k)| k)
        };
        Move {
            from,
            to,
            promotion,
            is_castling,
            is_en_passant,
            captured,
        }
    }

    // --- Make-move (4.4) ---

    /// Returns a new position with `m` applied. There is no unmake path:
    /// search explores children by cloning (see SPEC_FULL.md §5).
    pub fn make_move(&self, m: &Move) -> Position {
        let mut next = self.clone();
        let side = self.side_to_move;
        let (_, moving_kind) = self
            .board
            .get_piece(m.from)
            .expect("make_move called with no piece at `from`");

        let mut capture = m.captured.is_some();
        let mut reset_ep = true;
        let pawn_move = moving_kind == PieceKind::Pawn;

        if pawn_move {
            let (did_capture, keep_ep) = next.handle_pawn_move(m, side);
            capture = did_capture;
            reset_ep = keep_ep;
        } else if moving_kind == PieceKind::King {
            next.handle_king_move(m, side);
        } else if moving_kind == PieceKind::Rook {
            next.handle_rook_move(m, side);
        }

        if let Some(captured_kind) = m.captured {
            if !m.is_en_passant {
                next.board.clear_piece(m.to);
            }
            if captured_kind == PieceKind::Rook {
                next.revoke_rights_for_captured_rook(m.to, side.opposite());
            }
        }

        next.board.move_piece(m.from, m.to);
        next.board.clear_piece(m.from);

        if let Some(promo) = m.promotion {
            next.board.set_piece(m.to, side, promo);
        }

        next.side_to_move = side.opposite();
        if reset_ep {
            next.en_passant = None;
        }
        if next.side_to_move == Color::White {
            next.fullmove_number += 1;
        }
        if pawn_move || capture {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }

        next.hash = next.compute_hash();
        next
    }

    /// Mirrors the source's `handle_pawn_move`: returns `(capture_happened, reset_ep)`
    /// instead of taking `&mut bool` out-parameters.
    fn handle_pawn_move(&mut self, m: &Move, side: Color) -> (bool, bool) {
        if m.is_en_passant {
            let dir: i32 = if side == Color::White { -1 } else { 1 };
            let captured_sq = Square((m.to.rank() as i32 + dir) as usize, m.to.file());
            self.board.clear_piece(captured_sq);
            (true, true)
        } else if (m.to.rank() as i32 - m.from.rank() as i32).abs() == 2 {
            let dir: i32 = if side == Color::White { 1 } else { -1 };
            self.en_passant = Some(Square((m.from.rank() as i32 + dir) as usize, m.from.file()));
            (m.captured.is_some(), false)
        } else {
            (m.captured.is_some(), true)
        }
    }

    fn handle_king_move(&mut self, m: &Move, side: Color) {
        if (m.to.file() as i32 - m.from.file() as i32).abs() == 2 && m.is_castling {
            let home_rank = m.from.rank();
            let (rook_from, rook_to) = if m.to.file() == 6 {
                (Square(home_rank, 7), Square(home_rank, 5))
            } else {
                (Square(home_rank, 0), Square(home_rank, 3))
            };
            self.board.move_piece(rook_from, rook_to);
            self.board.clear_piece(rook_from);
        }
        match side {
            Color::White => {
                self.castling.revoke(WHITE_KINGSIDE | WHITE_QUEENSIDE);
            }
            Color::Black => {
                self.castling.revoke(BLACK_KINGSIDE | BLACK_QUEENSIDE);
            }
        }
    }

    fn handle_rook_move(&mut self, m: &Move, side: Color) {
        let home_rank = if side == Color::White { 0 } else { 7 };
        if m.from.rank() != home_rank {
            return;
        }
        let flag = match (side, m.from.file()) {
            (Color::White, 0) => Some(WHITE_QUEENSIDE),
            (Color::White, 7) => Some(WHITE_KINGSIDE),
            (Color::Black, 0) => Some(BLACK_QUEENSIDE),
            (Color::Black, 7) => Some(BLACK_KINGSIDE),
            _ => None,
        };
        if let Some(flag) = flag {
            self.castling.revoke(flag);
        }
    }

    /// A rook captured on its home corner permanently revokes that corner's
    /// right too (the C++ original's `handle_rook_move` only covers the
    /// *moving* side; see DESIGN.md's Open Question decisions).
    fn revoke_rights_for_captured_rook(&mut self, at: Square, captured_side: Color) {
        let home_rank = if captured_side == Color::White { 0 } else { 7 };
        if at.rank() != home_rank {
            return;
        }
        let flag = match (captured_side, at.file()) {
            (Color::White, 0) => Some(WHITE_QUEENSIDE),
            (Color::White, 7) => Some(WHITE_KINGSIDE),
            (Color::Black, 0) => Some(BLACK_QUEENSIDE),
            (Color::Black, 7) => Some(BLACK_KINGSIDE),
            _ => None,
        };
        if let Some(flag) = flag {
            self.castling.revoke(flag);
        }
    }

    // --- Terminal & result (4.5) ---

    pub fn has_insufficient_material(&self) -> bool {
        if self.board.pawn != 0 || self.board.rook != 0 || self.board.queen != 0 {
            return false;
        }
        let white_minors = (self.board.knight | self.board.bishop) & self.board.white;
        let black_minors = (self.board.knight | self.board.bishop) & self.board.black;
        white_minors.count_ones() <= 1 && black_minors.count_ones() <= 1
    }

    pub fn is_terminal(&self) -> bool {
        self.halfmove_clock >= 100 || self.has_insufficient_material() || self.legal_moves().is_empty()
    }

    /// `None` means draw (or a non-terminal position).
    pub fn result(&self) -> Option<Color> {
        if self.halfmove_clock >= 100 || self.has_insufficient_material() {
            return None;
        }
        if self.legal_moves().is_empty() {
            if self.in_check(self.side_to_move) {
                return Some(self.side_to_move.opposite());
            }
            return None;
        }
        None
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        self.board.get_piece(sq)
    }

    // --- FEN (6.1) ---

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_run = 0;
            for file in 0..8 {
                match self.board.get_piece(Square(rank, file)) {
                    None => empty_run += 1,
                    Some((color, kind)) => {
                        if empty_run > 0 {
                            row.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        row.push(piece_char(color, kind));
                    }
                }
            }
            if empty_run > 0 {
                row.push_str(&empty_run.to_string());
            }
            ranks.push(row);
        }
        let placement = ranks.join("/");
        let active = if self.side_to_move == Color::White { "w" } else { "b" };
        let castling = self.castling.to_notation();
        let ep = match self.en_passant {
            Some(sq) => sq.to_notation(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {} {} {}",
            placement, active, castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }

    pub fn from_fen(fen: &str) -> Result<Position, ChessError> {
        let reject = |err: ChessError| -> ChessError {
            #[cfg(feature = "logging")]
            log::warn!("rejecting FEN {fen:?}: {err}");
            err
        };

        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(reject(ChessError::MalformedFen(format!(
                "expected 6 fields, got {}",
                fields.len()
            ))));
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(reject(ChessError::MalformedFen(format!("expected 8 ranks, got {}", rows.len()))));
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx;
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(d) = c.to_digit(10) {
                    file += d as usize;
                    if file > 8 {
                        return Err(reject(ChessError::MalformedFen(format!("rank overflow in {row}"))));
                    }
                } else {
                    if file >= 8 {
                        return Err(reject(ChessError::MalformedFen(format!("rank overflow in {row}"))));
                    }
                    let (color, kind) = piece_from_char(c)
                        .ok_or_else(|| reject(ChessError::MalformedFen(format!("bad piece char {c}"))))?;
                    board.set_piece(Square(rank, file), color, kind);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(reject(ChessError::MalformedFen(format!(
                    "rank does not cover 8 files: {row}"
                ))));
            }
        }

        if board.king.count_ones() != 2
            || (board.king & board.white).count_ones() != 1
            || (board.king & board.black).count_ones() != 1
        {
            return Err(reject(ChessError::IllegalPosition(
                "each side must have exactly one king".to_string(),
            )));
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(reject(ChessError::MalformedFen(format!("bad side to move {other}")))),
        };

        let castling = parse_castling(fields[2]).map_err(reject)?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(Square::from_notation(fields[3]).map_err(|_| {
                reject(ChessError::MalformedFen(format!("bad en-passant square {}", fields[3])))
            })?)
        };

        let halfmove_clock: u32 = fields[4]
            .parse()
            .map_err(|_| reject(ChessError::MalformedFen(format!("bad halfmove clock {}", fields[4]))))?;
        let fullmove_number: u32 = fields[5]
            .parse()
            .map_err(|_| reject(ChessError::MalformedFen(format!("bad fullmove number {}", fields[5]))))?;
        if fullmove_number == 0 {
            return Err(reject(ChessError::MalformedFen(
                "fullmove number must be positive".to_string(),
            )));
        }

        let mut pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            hash: 0,
        };
        pos.hash = pos.compute_hash();

        if pos.in_check(side_to_move.opposite()) {
            return Err(reject(ChessError::IllegalPosition(
                "side not to move is already in check".to_string(),
            )));
        }

        Ok(pos)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Move {
    fn castling(mut self) -> Move {
        self.is_castling = true;
        self
    }
}

fn piece_char(color: Color, kind: PieceKind) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if color == Color::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn piece_from_char(c: char) -> Option<(Color, PieceKind)> {
    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

fn parse_castling(s: &str) -> Result<CastleRights, ChessError> {
    if s == "-" {
        return Ok(CastleRights::none());
    }
    let order = ['K', 'Q', 'k', 'q'];
    let mut last_idx = None;
    let mut mask = 0u8;
    for c in s.chars() {
        let idx = order
            .iter()
            .position(|&o| o == c)
            .ok_or_else(|| ChessError::MalformedFen(format!("bad castling char {c}")))?;
        if let Some(last) = last_idx {
            if idx <= last {
                return Err(ChessError::MalformedFen(format!(
                    "unsorted castling ability {s}"
                )));
            }
        }
        last_idx = Some(idx);
        mask |= match c {
            'K' => WHITE_KINGSIDE,
            'Q' => WHITE_QUEENSIDE,
            'k' => BLACK_KINGSIDE,
            'q' => BLACK_QUEENSIDE,
            _ => unreachable!(),
        };
    }
    Ok(CastleRights(mask))
}

/// All squares on `file`, exposed for external display helpers that want to
/// highlight a file (e.g. a pawn-structure viewer); not used by the core itself.
pub fn highlight_file(file: usize) -> u64 {
    file_mask(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_20_legal_moves() {
        let pos = Position::new();
        assert_eq!(pos.legal_moves().len(), 20);
        assert!(!pos.is_terminal());
    }

    #[test]
    fn fen_round_trip_start_position() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn en_passant_capture_removes_passed_pawn() {
        let pos =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        let m = pos
            .legal_moves()
            .into_iter()
            .find(|m| m.from == Square(4, 4) && m.to == Square(5, 3))
            .expect("e5d6 should be legal");
        assert!(m.is_en_passant);
        let after = pos.make_move(&m);
        assert_eq!(after.piece_at(Square(4, 3)), None);
    }

    #[test]
    fn castling_moves_king_two_squares_and_rook_to_f1() {
        let mut pos = Position::new();
        for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"] {
            let parsed = crate::notation::parse_move(&pos, mv).unwrap();
            pos = pos.make_move(&parsed);
        }
        let castle = pos
            .legal_moves()
            .into_iter()
            .find(|m| m.is_castling && m.from == Square(0, 4) && m.to == Square(0, 6))
            .expect("white should be able to castle kingside");
        let after = pos.make_move(&castle);
        assert_eq!(after.piece_at(Square(0, 5)), Some((Color::White, PieceKind::Rook)));
        assert!(!after.castling.white_kingside());
        assert!(!after.castling.white_queenside());
    }

    #[test]
    fn stalemate_position_has_no_moves_and_draws() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert_eq!(pos.result(), None);
    }

    #[test]
    fn fools_mate_is_checkmate_for_black() {
        let mut pos = Position::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let parsed = crate::notation::parse_move(&pos, mv).unwrap();
            pos = pos.make_move(&parsed);
        }
        assert!(pos.is_terminal());
        assert_eq!(pos.result(), Some(Color::Black));
    }
}
