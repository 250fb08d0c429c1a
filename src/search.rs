//! Fail-soft alpha-beta with a transposition cache (§4.7), driven by MTD(f)
//! (§4.8). The original engine modeled this as a `strategy` base class with a
//! `minimax_search` subclass; here that's a `SearchStrategy` trait
//! implemented by `Search` (§9) rather than a class hierarchy.

use std::time::Instant;

use rand::prelude::*;

use crate::eval::{evaluate, MATE_SCORE};
use crate::position::Position;
use crate::tt::TranspositionTable;
use crate::types::{Color, Move};

pub trait SearchStrategy {
    fn choose_move(&mut self, pos: &Position, time_ms: u64) -> (i32, Move);
}

pub struct Search {
    tt: TranspositionTable,
    rng: StdRng,
}

impl Search {
    pub fn new(cache_capacity: usize) -> Search {
        Search {
            tt: TranspositionTable::new(cache_capacity),
            rng: StdRng::from_entropy(),
        }
    }

    /// Like `new`, but with a fixed RNG seed — for reproducible move-list
    /// shuffling in tests.
    pub fn with_seed(cache_capacity: usize, seed: u64) -> Search {
        Search {
            tt: TranspositionTable::new(cache_capacity),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Iterative-deepening MTD(f) to `max_depth`, honoring a root-level time
    /// budget (§5): the one cooperative cancellation point is between root
    /// moves, checked with `Instant`. On timeout mid-depth, the result from
    /// the last fully-completed depth is kept rather than a partial one.
    pub fn choose_move(&mut self, pos: &Position, max_depth: u32, time_ms: u64) -> (i32, Move) {
        let deadline = Instant::now() + std::time::Duration::from_millis(time_ms);
        let mut root_moves = pos.legal_moves();
        assert!(!root_moves.is_empty(), "choose_move called on a terminal position");
        root_moves.shuffle(&mut self.rng);

        let mut guess = 0i32;
        let mut best: Option<(i32, Move)> = None;

        for depth in 1..=max_depth {
            if Instant::now() >= deadline && best.is_some() {
                #[cfg(feature = "logging")]
                log::debug!("time budget expired before depth {depth}, keeping previous result");
                break;
            }

            guess = self.mtdf(pos, depth, guess);
            let mv = self
                .best_root_move(pos, depth, &root_moves)
                .expect("mtdf leaves a best move in the cache");

            best = Some((guess, mv));
            #[cfg(feature = "logging")]
            log::debug!("depth {depth} complete: score={guess} best={}", mv.to_notation());
        }

        best.expect("at least depth 1 always completes")
    }

    /// `mtdf(pos, d, f)` (§4.8): repeated zero-window probes around `f`,
    /// narrowing `[lower, upper]` until they meet. The trailing re-run
    /// guarantees the winning window's cache entry survives any clears that
    /// happened mid-loop.
    fn mtdf(&mut self, pos: &Position, depth: u32, f: i32) -> i32 {
        let mut lower = i32::MIN;
        let mut upper = i32::MAX;
        let mut guess = f;
        let mut beta;

        loop {
            beta = if guess == lower { guess + 1 } else { guess };
            guess = self.minimax(pos, depth, beta - 1, beta);
            if guess < beta {
                upper = guess;
            } else {
                lower = guess;
            }
            if lower >= upper {
                break;
            }
        }
        self.minimax(pos, depth, beta - 1, beta);
        guess
    }

    fn best_root_move(&self, pos: &Position, depth: u32, root_moves: &[Move]) -> Option<Move> {
        let hint = self.tt.probe(pos, depth - 1).and_then(|e| e.best_move);
        hint.or_else(|| root_moves.first().copied())
    }

    /// `minimax(pos, depth, alpha, beta)` (§4.7): fail-soft alpha-beta,
    /// White maximizing and Black minimizing, consulting and updating the
    /// transposition cache keyed by `(pos, depth - 1)`.
    fn minimax(&mut self, pos: &Position, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if depth == 0 || pos.is_terminal() {
            return evaluate(pos);
        }

        let original_alpha = alpha;
        let original_beta = beta;

        {
            let entry = self.tt.entry(pos, depth - 1);
            if entry.lower >= beta {
                #[cfg(feature = "logging")]
                log::trace!("cache hit (lower cutoff) at depth {depth}: lower={}", entry.lower);
                return entry.lower;
            }
            if entry.upper <= alpha {
                #[cfg(feature = "logging")]
                log::trace!("cache hit (upper cutoff) at depth {depth}: upper={}", entry.upper);
                return entry.upper;
            }
            #[cfg(feature = "logging")]
            log::trace!(
                "cache probe at depth {depth} found no cutoff, tightening window from [{alpha}, {beta}]"
            );
            alpha = alpha.max(entry.lower);
            beta = beta.min(entry.upper);
        }

        let moves = pos.legal_moves();
        let white_to_move = pos.side_to_move == Color::White;
        let mut best = if white_to_move { i32::MIN } else { i32::MAX };
        let mut best_move: Option<Move> = None;

        for m in &moves {
            let child = pos.make_move(m);
            let score = self.minimax(&child, depth - 1, alpha, beta);

            if white_to_move {
                if score > best {
                    best = score;
                    best_move = Some(*m);
                }
                alpha = alpha.max(best);
                if best >= beta {
                    break;
                }
            } else {
                if score < best {
                    best = score;
                    best_move = Some(*m);
                }
                beta = beta.min(best);
                if best <= alpha {
                    break;
                }
            }
        }

        let entry = self.tt.entry(pos, depth - 1);
        if best <= original_alpha {
            entry.upper = best;
        } else if best >= original_beta {
            entry.lower = best;
        } else {
            entry.lower = best;
            entry.upper = best;
        }
        entry.best_move = best_move;

        best
    }
}

impl SearchStrategy for Search {
    fn choose_move(&mut self, pos: &Position, time_ms: u64) -> (i32, Move) {
        Search::choose_move(self, pos, 4, time_ms)
    }
}

impl Default for Search {
    fn default() -> Search {
        Search::new(1 << 20)
    }
}
