//! Zobrist hashing: random 64-bit words combined by XOR to produce an
//! incrementally-maintainable position hash.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub struct ZobristKeys {
    /// pieces[square][kind][color]
    pub pieces: [[[u64; 2]; 6]; 64],
    pub side: [u64; 2],
    pub castle: [u64; 4],
    pub ep_file: [u64; 8],
    pub depth: [u64; 64],
}

impl ZobristKeys {
    fn new() -> ZobristKeys {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);

        let mut pieces = [[[0u64; 2]; 6]; 64];
        for square in pieces.iter_mut() {
            for kind in square.iter_mut() {
                for color in kind.iter_mut() {
                    *color = rng.gen();
                }
            }
        }

        let mut side = [0u64; 2];
        for s in side.iter_mut() {
            *s = rng.gen();
        }

        let mut castle = [0u64; 4];
        for c in castle.iter_mut() {
            *c = rng.gen();
        }

        let mut ep_file = [0u64; 8];
        for e in ep_file.iter_mut() {
            *e = rng.gen();
        }

        let mut depth = [0u64; 64];
        for d in depth.iter_mut() {
            *d = rng.gen();
        }

        ZobristKeys {
            pieces,
            side,
            castle,
            ep_file,
            depth,
        }
    }
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub fn piece_key(square: usize, kind_index: usize, color_index: usize) -> u64 {
    ZOBRIST.pieces[square][kind_index][color_index]
}

#[inline]
pub fn side_key(color_index: usize) -> u64 {
    ZOBRIST.side[color_index]
}

/// `right` is one of `WHITE_KINGSIDE`/`WHITE_QUEENSIDE`/`BLACK_KINGSIDE`/`BLACK_QUEENSIDE`
/// from `crate::types`; combines the keys for every currently-active flag.
#[inline]
pub fn castle_key(rights_mask: u8) -> u64 {
    let mut h = 0u64;
    for (i, key) in ZOBRIST.castle.iter().enumerate() {
        if rights_mask & (1 << i) != 0 {
            h ^= key;
        }
    }
    h
}

#[inline]
pub fn ep_file_key(file: usize) -> u64 {
    ZOBRIST.ep_file[file]
}

/// Table is sized to 64 rather than the original's 8 (`search.h`'s
/// `depths[8]`) since this engine's iterative deepening routinely reaches
/// search depths the original never indexed past.
#[inline]
pub fn depth_key(depth: u32) -> u64 {
    ZOBRIST.depth[(depth as usize) & 63]
}
