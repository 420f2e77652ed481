use criterion::{criterion_group, criterion_main, Criterion, black_box};
use knight_iso::{AlphaBetaEngine, Board, Heuristic, MinimaxEngine, Move, Player, SearchConfig, Unlimited};

fn midgame() -> Board {
    Board::with_positions(7, 7, Move::new(3, 3), Move::new(0, 0), Player::One).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let b = midgame();
    c.bench_function("minimax_depth_4_midgame", |ben| {
        let e = MinimaxEngine::new(SearchConfig::new(Heuristic::FreedomDiff).with_depth(4).with_timeout_margin_ms(0.0)).unwrap();
        ben.iter(|| {
            let r = e.search(black_box(&b), 4, &Unlimited).unwrap();
            black_box(r.nodes)
        })
    });
    c.bench_function("alphabeta_depth_4_midgame", |ben| {
        let e = AlphaBetaEngine::new(SearchConfig::new(Heuristic::FreedomDiff).with_timeout_margin_ms(0.0)).unwrap();
        ben.iter(|| {
            let r = e.search(black_box(&b), 4, &Unlimited).unwrap();
            black_box(r.nodes)
        })
    });
    c.bench_function("alphabeta_deepening_to_6", |ben| {
        let e = AlphaBetaEngine::new(SearchConfig::new(Heuristic::Improved).with_timeout_margin_ms(0.0)).unwrap().with_max_depth(Some(6)).unwrap();
        ben.iter(|| black_box(e.get_move(black_box(&b), &Unlimited)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
