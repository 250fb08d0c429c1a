use chess_core::notation::parse_move;
use chess_core::{Color, Position, Search};

struct MateInOne {
    name: &'static str,
    fen: &'static str,
}

const MATE_IN_ONE: &[MateInOne] = &[
    MateInOne {
        name: "back rank, rook delivers",
        fen: "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
    },
    MateInOne {
        name: "queen mates along the back rank, king-supported",
        fen: "7k/Q6p/6K1/8/8/8/8/8 w - - 0 1",
    },
];

#[test]
fn search_finds_and_applies_the_mating_move() {
    for problem in MATE_IN_ONE {
        let pos = Position::from_fen(problem.fen).unwrap();
        let mover = pos.side_to_move;
        let mut search = Search::with_seed(1 << 16, 99);
        let (_, mv) = search.choose_move(&pos, 2, 5_000);
        let after = pos.make_move(&mv);
        assert!(
            after.is_terminal() && after.result() == Some(mover),
            "expected {} to be a mate-in-one for {problem:?}, but engine's move {} was not",
            problem.name,
            mv.to_notation(),
        );
    }
}

impl std::fmt::Debug for MateInOne {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.fen)
    }
}

#[test]
fn fools_mate_via_notation_parsing_reaches_checkmate() {
    let mut pos = Position::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let parsed = parse_move(&pos, mv).unwrap();
        pos = pos.make_move(&parsed);
    }
    assert!(pos.is_terminal());
    assert_eq!(pos.result(), Some(Color::Black));
}
