use knight_iso::play::{play_game, Outcome};
use knight_iso::search::eval::improved;
use knight_iso::settings::MatchSettings;
use knight_iso::{AlphaBetaEngine, Board, GameState, Player, RandomAgent, SearchConfig};
use std::time::Duration;

type Eval = fn(&Board, Player) -> f64;

#[test]
fn alphabeta_beats_random_on_small_board() {
    let mut wins = 0;
    for seed in 0..4 {
        let mut ab = AlphaBetaEngine::new(SearchConfig::new(improved as Eval).with_timeout_margin_ms(5.0)).unwrap();
        let mut rnd = RandomAgent::new(seed);
        let rec = play_game(Board::new(5, 5).unwrap(), &mut ab, &mut rnd, Duration::from_millis(40));
        assert_eq!(rec.outcome, Outcome::NoLegalMoves, "search agent must never time out or play illegally");
        if rec.winner == Player::One { wins += 1; }
    }
    assert!(wins >= 3, "alphabeta won only {wins} of 4 games against random");
}

#[test]
fn agent_returning_nothing_forfeits() {
    struct Resigner;
    impl knight_iso::Agent<Board> for Resigner {
        fn get_move(&mut self, _: &Board, _: &dyn knight_iso::Clock) -> Option<knight_iso::Move> { None }
        fn name(&self) -> String { "resigner".into() }
    }
    let mut r = Resigner;
    let mut rnd = RandomAgent::new(0);
    let rec = play_game(Board::new(4, 4).unwrap(), &mut rnd, &mut r, Duration::from_millis(50));
    assert_eq!(rec.outcome, Outcome::IllegalMove);
    assert_eq!(rec.winner, Player::One);
    assert_eq!(rec.moves.len(), 1);
}

#[test]
fn settings_drive_a_full_game_and_record_serializes() {
    let settings = MatchSettings::from_json(r#"{
        "width": 5, "height": 5, "time_limit_ms": 40,
        "player_one": {"kind": "minimax", "depth": 2, "heuristic": "open-moves"},
        "player_two": {"kind": "alpha-beta", "max_depth": 3, "margin_ms": 5.0}
    }"#).unwrap();
    let mut one = settings.player_one.build().unwrap();
    let mut two = settings.player_two.build().unwrap();
    let board = Board::new(settings.width, settings.height).unwrap();
    let rec = play_game(board.clone(), one.as_mut(), two.as_mut(), Duration::from_millis(settings.time_limit_ms));

    let mut end = board;
    for &mv in &rec.moves { end.apply_move(mv).unwrap(); }
    if rec.outcome == Outcome::NoLegalMoves {
        assert!(end.legal_moves().is_empty(), "game ended early on\n{end}");
        assert_eq!(end.active_player(), rec.winner.other());
    }

    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["moves"].as_array().unwrap().len(), rec.moves.len());
    assert!(json["outcome"].is_string());
}
