//! Minimal demonstration binary: play a few plies of engine-vs-engine from
//! the start position and print the resulting FEN after each move. No CLI
//! argument parsing, board rendering, or UCI/XBoard loop — those are
//! explicitly out of scope for this crate (see SPEC_FULL.md §1).

use chess_core::{Position, Search};

fn main() {
    let mut pos = Position::new();
    let mut search = Search::new(1 << 18);

    for ply in 1..=6 {
        if pos.is_terminal() {
            println!("game over: {:?}", pos.result());
            break;
        }
        let (score, mv) = search.choose_move(&pos, 4, 1_000);
        pos = pos.make_move(&mv);
        println!("ply {ply}: {} (score {score})", pos.to_fen());
    }
}
