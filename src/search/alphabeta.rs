use log::debug;

use crate::game::{Clock, GameState};
use crate::search::config::SearchConfig;
use crate::search::error::{ConfigError, SearchTimeout};
use crate::search::eval::{Evaluator, LOSS, WIN};
use crate::search::{Node, SearchCtx, SearchResult};

/// Iterative-deepening minimax with alpha-beta pruning.
///
/// `get_move` searches depth 1, 2, 3, ... until the clock drops below the
/// configured margin and answers with the move from the deepest iteration
/// that finished. An interrupted iteration contributes nothing.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine<E> {
    config: SearchConfig<E>,
    max_depth: Option<u32>,
}

impl<E> AlphaBetaEngine<E> {
    pub fn new(config: SearchConfig<E>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, max_depth: None })
    }

    /// Stop deepening after `depth` plies even if time remains. A cap of zero
    /// would never search at all and is rejected.
    pub fn with_max_depth(mut self, depth: Option<u32>) -> Result<Self, ConfigError> {
        if depth == Some(0) { return Err(ConfigError::ZeroDepth); }
        self.max_depth = depth;
        Ok(self)
    }

    pub fn config(&self) -> &SearchConfig<E> { &self.config }
    pub fn max_depth(&self) -> Option<u32> { self.max_depth }

    /// One full-window alpha-beta search at `depth`.
    pub fn search<G, C>(&self, state: &G, depth: u32, clock: &C) -> Result<SearchResult<G::Move>, SearchTimeout>
    where
        G: GameState,
        E: Evaluator<G>,
        C: Clock + ?Sized,
    {
        let mut ctx: SearchCtx<'_, G, E, C> = SearchCtx::new(&self.config.evaluator, clock, self.config.timeout_margin_ms, state.active_player());
        ctx.enter()?;
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(ctx.into_result(None, LOSS, depth));
        }

        // The root never prunes: every move is scored so the best one is
        // known. Raising alpha still narrows the window for later siblings.
        let mut alpha = LOSS;
        let beta = WIN;
        let mut best_move = None;
        let mut best_score = LOSS;
        for mv in moves {
            let score = min_value(&mut ctx, &state.forecast(mv), depth, alpha, beta)?;
            if best_move.is_none() || score > best_score { best_score = score; best_move = Some(mv); }
            alpha = alpha.max(best_score);
        }
        Ok(ctx.into_result(best_move, best_score, depth))
    }

    /// Deepening loop. Returns the result of the last iteration that ran to
    /// completion, or `None` if there is no legal move or not even depth 1
    /// finished.
    pub fn get_move_with_report<G, C>(&self, state: &G, clock: &C) -> Option<SearchResult<G::Move>>
    where
        G: GameState,
        E: Evaluator<G>,
        C: Clock + ?Sized,
    {
        if state.legal_moves().is_empty() { return None; }

        let mut best: Option<SearchResult<G::Move>> = None;
        let mut depth = 1u32;
        loop {
            if self.max_depth.map_or(false, |max| depth > max) { break; }
            match self.search(state, depth, clock) {
                Ok(res) => {
                    debug!("alphabeta depth {} nodes {} score {} move {:?}", depth, res.nodes, res.score, res.best_move);
                    let done = res.exhaustive;
                    best = Some(res);
                    if done {
                        debug!("alphabeta depth {} reached every terminal state, stopping", depth);
                        break;
                    }
                    depth += 1;
                }
                Err(SearchTimeout) => {
                    debug!("alphabeta timed out during depth {}", depth);
                    break;
                }
            }
        }
        best
    }

    pub fn get_move<G, C>(&self, state: &G, clock: &C) -> Option<G::Move>
    where
        G: GameState,
        E: Evaluator<G>,
        C: Clock + ?Sized,
    {
        self.get_move_with_report(state, clock).and_then(|r| r.best_move)
    }
}

// Depth is decremented on entry, before the base-case test, so a root call
// at depth d scores positions d plies below the root.
fn min_value<G, E, C>(ctx: &mut SearchCtx<'_, G, E, C>, state: &G, depth: u32, alpha: f64, mut beta: f64) -> Result<f64, SearchTimeout>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
    C: Clock + ?Sized,
{
    ctx.enter()?;
    let depth = depth.saturating_sub(1);
    let moves = match ctx.classify(state, depth) {
        Node::Leaf(score) => return Ok(score),
        Node::Expand(moves) => moves,
    };
    let mut value = WIN;
    for mv in moves {
        value = value.min(max_value(ctx, &state.forecast(mv), depth, alpha, beta)?);
        if value <= alpha { return Ok(value); }
        beta = beta.min(value);
    }
    Ok(value)
}

fn max_value<G, E, C>(ctx: &mut SearchCtx<'_, G, E, C>, state: &G, depth: u32, mut alpha: f64, beta: f64) -> Result<f64, SearchTimeout>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
    C: Clock + ?Sized,
{
    ctx.enter()?;
    let depth = depth.saturating_sub(1);
    let moves = match ctx.classify(state, depth) {
        Node::Leaf(score) => return Ok(score),
        Node::Expand(moves) => moves,
    };
    let mut value = LOSS;
    for mv in moves {
        value = value.max(min_value(ctx, &state.forecast(mv), depth, alpha, beta)?);
        if value >= beta { return Ok(value); }
        alpha = alpha.max(value);
    }
    Ok(value)
}
