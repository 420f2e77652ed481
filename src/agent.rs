use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::game::{Clock, GameState};
use crate::search::{AlphaBetaEngine, Evaluator, MinimaxEngine};

/// Anything that can be asked for a move once per turn.
pub trait Agent<G: GameState> {
    /// A legal move for the active player, or `None` to concede.
    fn get_move(&mut self, state: &G, clock: &dyn Clock) -> Option<G::Move>;

    fn name(&self) -> String;
}

impl<G, E> Agent<G> for MinimaxEngine<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn get_move(&mut self, state: &G, clock: &dyn Clock) -> Option<G::Move> {
        MinimaxEngine::get_move(self, state, clock)
    }

    fn name(&self) -> String { format!("minimax(depth={})", self.config().depth) }
}

impl<G, E> Agent<G> for AlphaBetaEngine<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn get_move(&mut self, state: &G, clock: &dyn Clock) -> Option<G::Move> {
        AlphaBetaEngine::get_move(self, state, clock)
    }

    fn name(&self) -> String {
        match self.max_depth() {
            Some(d) => format!("alphabeta(max_depth={d})"),
            None => "alphabeta".to_string(),
        }
    }
}

/// Uniformly random legal move. Baseline opponent.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl<G: GameState> Agent<G> for RandomAgent {
    fn get_move(&mut self, state: &G, _clock: &dyn Clock) -> Option<G::Move> {
        let moves = state.legal_moves();
        if moves.is_empty() { None } else { Some(moves[self.rng.gen_range(0..moves.len())]) }
    }

    fn name(&self) -> String { "random".to_string() }
}
