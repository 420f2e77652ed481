use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;

use crate::agent::Agent;
use crate::board::{Board, Move, Player};
use crate::game::{Clock, GameState, TurnTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The loser had no legal move on its turn.
    NoLegalMoves,
    /// The loser answered after its time budget ran out.
    Timeout,
    /// The loser returned no move, or a move that was not legal.
    IllegalMove,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub winner: Player,
    pub outcome: Outcome,
}

/// Places both players on random blank cells, one after the other.
pub fn random_opening(mut board: Board, rng: &mut SmallRng) -> Board {
    for _ in 0..2 {
        let moves = board.legal_moves();
        if moves.is_empty() { break; }
        let mv = moves[rng.gen_range(0..moves.len())];
        board = board.forecast(mv);
    }
    board
}

/// Plays `board` to the end, giving each agent `time_limit` per move.
pub fn play_game(
    mut board: Board,
    one: &mut dyn Agent<Board>,
    two: &mut dyn Agent<Board>,
    time_limit: Duration,
) -> GameRecord {
    let mut moves = Vec::new();
    loop {
        let active = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            info!("{} has no legal moves", active);
            return GameRecord { moves, winner: active.other(), outcome: Outcome::NoLegalMoves };
        }

        let timer = TurnTimer::start(time_limit);
        let chosen = match active {
            Player::One => one.get_move(&board, &timer),
            Player::Two => two.get_move(&board, &timer),
        };
        let remaining = timer.remaining_ms();
        let name = match active { Player::One => one.name(), Player::Two => two.name() };
        debug!("{} ({}) chose {:?} with {:.1} ms left", active, name, chosen, remaining);

        if remaining < 0.0 {
            info!("{} ({}) exceeded its time budget", active, name);
            return GameRecord { moves, winner: active.other(), outcome: Outcome::Timeout };
        }
        let mv = match chosen {
            Some(mv) if legal.contains(&mv) => mv,
            _ => {
                info!("{} ({}) returned illegal move {:?}", active, name, chosen);
                return GameRecord { moves, winner: active.other(), outcome: Outcome::IllegalMove };
            }
        };
        board = board.forecast(mv);
        moves.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomAgent;
    use rand::SeedableRng;

    #[test]
    fn random_opening_places_both_players() {
        let mut rng = SmallRng::seed_from_u64(3);
        let b = random_opening(Board::new(5, 5).unwrap(), &mut rng);
        assert_eq!(b.move_count(), 2);
        assert!(b.location(Player::One).is_some() && b.location(Player::Two).is_some());
        assert_eq!(b.active_player(), Player::One);
    }

    #[test]
    fn random_game_ends_with_no_legal_moves() {
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2);
        let rec = play_game(Board::new(5, 5).unwrap(), &mut a, &mut b, Duration::from_secs(1));
        assert_eq!(rec.outcome, Outcome::NoLegalMoves);
        // The loser is whoever was due to move after the last recorded move.
        let loser = if rec.moves.len() % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(rec.winner, loser.other());
    }
}
