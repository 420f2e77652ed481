pub mod alphabeta;
pub mod config;
pub mod error;
pub mod eval;
pub mod minimax;

pub use alphabeta::AlphaBetaEngine;
pub use config::SearchConfig;
pub use error::{ConfigError, SearchTimeout};
pub use eval::{Evaluator, Heuristic, LOSS, WIN};
pub use minimax::MinimaxEngine;

use crate::game::{Clock, GameState};

/// Outcome of one completed search attempt at a fixed depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: f64,
    pub depth: u32,
    pub nodes: u64,
    /// No visited leaf was cut off by the depth limit; searching deeper
    /// would revisit the same tree.
    pub exhaustive: bool,
}

pub(crate) enum Node<M> {
    Leaf(f64),
    Expand(Vec<M>),
}

/// Everything a recursive search call needs besides its position, depth
/// and window. Passed down explicitly as `&mut`.
pub(crate) struct SearchCtx<'a, G: GameState, E: ?Sized, C: ?Sized> {
    evaluator: &'a E,
    clock: &'a C,
    margin_ms: f64,
    root_player: G::Player,
    pub(crate) nodes: u64,
    pub(crate) depth_cutoff: bool,
}

impl<'a, G, E, C> SearchCtx<'a, G, E, C>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
    C: Clock + ?Sized,
{
    pub(crate) fn new(evaluator: &'a E, clock: &'a C, margin_ms: f64, root_player: G::Player) -> Self {
        Self { evaluator, clock, margin_ms, root_player, nodes: 0, depth_cutoff: false }
    }

    /// Clock check every search call makes before doing any work.
    #[inline]
    pub(crate) fn enter(&mut self) -> Result<(), SearchTimeout> {
        if self.clock.remaining_ms() < self.margin_ms { return Err(SearchTimeout); }
        self.nodes += 1;
        Ok(())
    }

    /// Leaf score from the searching player's side.
    #[inline]
    pub(crate) fn evaluate(&self, state: &G) -> f64 {
        self.evaluator.score(state, self.root_player)
    }

    /// Base-case test shared by both engines: a state with no legal moves is
    /// a leaf at any depth.
    pub(crate) fn classify(&mut self, state: &G, depth: u32) -> Node<G::Move> {
        let moves = state.legal_moves();
        if moves.is_empty() { return Node::Leaf(self.evaluate(state)); }
        if depth == 0 {
            self.depth_cutoff = true;
            return Node::Leaf(self.evaluate(state));
        }
        Node::Expand(moves)
    }

    pub(crate) fn into_result(self, best_move: Option<G::Move>, score: f64, depth: u32) -> SearchResult<G::Move> {
        SearchResult { best_move, score, depth, nodes: self.nodes, exhaustive: !self.depth_cutoff }
    }
}
