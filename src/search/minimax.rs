use log::debug;

use crate::game::{Clock, GameState};
use crate::search::config::SearchConfig;
use crate::search::error::{ConfigError, SearchTimeout};
use crate::search::eval::{Evaluator, LOSS, WIN};
use crate::search::{Node, SearchCtx, SearchResult};

/// Fixed-depth minimax. Explores every line exactly `config.depth` plies
/// deep, or until the game ends.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<E> {
    config: SearchConfig<E>,
}

impl<E> MinimaxEngine<E> {
    pub fn new(config: SearchConfig<E>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig<E> { &self.config }

    /// One search attempt at `depth`. A timeout anywhere in the tree aborts
    /// the whole attempt.
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

        let mut best_move = None;
        let mut best_score = LOSS;
        for mv in moves {
            let score = min_value(&mut ctx, &state.forecast(mv), depth.saturating_sub(1))?;
            // Strict comparison: first move in enumeration order keeps ties.
            if best_move.is_none() || score > best_score { best_score = score; best_move = Some(mv); }
        }
        Ok(ctx.into_result(best_move, best_score, depth))
    }

    /// Best move at the configured depth, or `None` when there is no legal
    /// move or the clock ran out first.
    pub fn get_move<G, C>(&self, state: &G, clock: &C) -> Option<G::Move>
    where
        G: GameState,
        E: Evaluator<G>,
        C: Clock + ?Sized,
    {
        match self.search(state, self.config.depth, clock) {
            Ok(res) => {
                debug!("minimax depth {} nodes {} score {}", res.depth, res.nodes, res.score);
                res.best_move
            }
            Err(SearchTimeout) => {
                debug!("minimax depth {} timed out", self.config.depth);
                None
            }
        }
    }
}

fn min_value<G, E, C>(ctx: &mut SearchCtx<'_, G, E, C>, state: &G, depth: u32) -> Result<f64, SearchTimeout>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
    C: Clock + ?Sized,
{
    ctx.enter()?;
    let moves = match ctx.classify(state, depth) {
        Node::Leaf(score) => return Ok(score),
        Node::Expand(moves) => moves,
    };
    let mut value = WIN;
    for mv in moves {
        value = value.min(max_value(ctx, &state.forecast(mv), depth - 1)?);
    }
    Ok(value)
}

fn max_value<G, E, C>(ctx: &mut SearchCtx<'_, G, E, C>, state: &G, depth: u32) -> Result<f64, SearchTimeout>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
    C: Clock + ?Sized,
{
    ctx.enter()?;
    let moves = match ctx.classify(state, depth) {
        Node::Leaf(score) => return Ok(score),
        Node::Expand(moves) => moves,
    };
    let mut value = LOSS;
    for mv in moves {
        value = value.max(min_value(ctx, &state.forecast(mv), depth - 1)?);
    }
    Ok(value)
}
