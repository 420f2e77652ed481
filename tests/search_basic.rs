use knight_iso::search::eval::{improved, open_moves};
use knight_iso::{AlphaBetaEngine, Board, GameState, MinimaxEngine, Move, Player, SearchConfig, Unlimited};
use pretty_assertions::assert_eq;
use std::cell::Cell;

type Eval = fn(&Board, Player) -> f64;

fn minimax(depth: u32, eval: Eval) -> MinimaxEngine<Eval> {
    MinimaxEngine::new(SearchConfig::new(eval).with_depth(depth).with_timeout_margin_ms(0.0)).expect("valid config")
}

fn alphabeta(eval: Eval) -> AlphaBetaEngine<Eval> {
    AlphaBetaEngine::new(SearchConfig::new(eval).with_timeout_margin_ms(0.0)).expect("valid config")
}

#[test]
fn minimax_depth_one_on_empty_3x3() {
    // Player 1 at (0,0), player 2 at (2,2). Both replies leave exactly one move, so the
    // first enumerated move (1,2) must win the tie.
    let b = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2), Player::One).unwrap();
    let legal = b.legal_moves();
    assert_eq!(legal, vec![Move::new(1, 2), Move::new(2, 1)]);
    for &mv in &legal {
        assert_eq!(open_moves(&b.forecast(mv), Player::One), 1.0);
    }
    let res = minimax(1, open_moves).search(&b, 1, &Unlimited).unwrap();
    assert_eq!(res.best_move, Some(Move::new(1, 2)));
    assert_eq!(res.score, 1.0);
}

#[test]
fn minimax_depth_one_maximizes_immediate_score() {
    let b = Board::with_positions(7, 7, Move::new(0, 1), Move::new(6, 6), Player::One).unwrap();
    let best = minimax(1, open_moves).get_move(&b, &Unlimited).expect("a move");
    let scores: Vec<f64> = b.legal_moves().into_iter().map(|m| open_moves(&b.forecast(m), Player::One)).collect();
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let first_max = b.legal_moves()[scores.iter().position(|&s| s == max).unwrap()];
    assert_eq!(best, first_max);
}

#[test]
fn no_legal_moves_returns_none_without_recursion() {
    // 3x3 centre has no knight moves.
    let b = Board::with_positions(3, 3, Move::new(1, 1), Move::new(0, 0), Player::One).unwrap();
    let calls = Cell::new(0u32);
    let counting = |s: &Board, p: Player| { calls.set(calls.get() + 1); open_moves(s, p) };

    let mm = MinimaxEngine::new(SearchConfig::new(counting).with_depth(4).with_timeout_margin_ms(0.0)).unwrap();
    assert_eq!(mm.get_move(&b, &Unlimited), None);
    let res = mm.search(&b, 4, &Unlimited).unwrap();
    assert_eq!(res.best_move, None);
    assert_eq!(res.nodes, 1, "only the root entry may be counted");

    let ab = AlphaBetaEngine::new(SearchConfig::new(counting).with_timeout_margin_ms(0.0)).unwrap();
    assert_eq!(ab.get_move(&b, &Unlimited), None);
    assert!(ab.get_move_with_report(&b, &Unlimited).is_none());
    assert_eq!(ab.search(&b, 3, &Unlimited).unwrap().nodes, 1);

    assert_eq!(calls.get(), 0, "evaluator must not run on the fast path");
}

fn sample_positions() -> Vec<Board> {
    let mut out = Vec::new();
    let setups = [
        (5, 5, Move::new(0, 0), Move::new(4, 4)),
        (5, 5, Move::new(2, 2), Move::new(1, 3)),
        (6, 6, Move::new(1, 1), Move::new(4, 3)),
        (7, 7, Move::new(3, 3), Move::new(0, 6)),
    ];
    for (w, h, one, two) in setups {
        let b = Board::with_positions(w, h, one, two, Player::One).unwrap();
        out.push(b.clone());
        // A couple of plies in, following the first legal move each time.
        let mut cur = b;
        for _ in 0..2 {
            let Some(&mv) = cur.legal_moves().first() else { break };
            cur = cur.forecast(mv);
            out.push(cur.clone());
        }
    }
    out
}

#[test]
fn alphabeta_matches_minimax_at_every_depth() {
    let mut mm_nodes = 0u64;
    let mut ab_nodes = 0u64;
    for eval in [open_moves as Eval, improved as Eval] {
        for b in sample_positions() {
            for depth in 1..=4 {
                let mm = minimax(depth, eval).search(&b, depth, &Unlimited).unwrap();
                let ab = alphabeta(eval).search(&b, depth, &Unlimited).unwrap();
                assert_eq!(ab.best_move, mm.best_move, "depth {depth} on\n{b}");
                assert_eq!(ab.score, mm.score, "depth {depth} on\n{b}");
                assert!(ab.nodes <= mm.nodes, "alphabeta visited more nodes ({} > {})", ab.nodes, mm.nodes);
                mm_nodes += mm.nodes;
                ab_nodes += ab.nodes;
            }
        }
    }
    assert!(ab_nodes < mm_nodes, "pruning never kicked in: {ab_nodes} vs {mm_nodes}");
}

#[test]
fn depth_limited_search_on_opening_board() {
    // Nobody placed yet: every blank cell is legal for the first placement.
    let b = Board::new(4, 4).unwrap();
    let mm = minimax(2, improved).search(&b, 2, &Unlimited).unwrap();
    let ab = alphabeta(improved).search(&b, 2, &Unlimited).unwrap();
    assert_eq!(mm.best_move, ab.best_move);
    assert!(mm.best_move.is_some());
    assert!(!mm.exhaustive);
}
