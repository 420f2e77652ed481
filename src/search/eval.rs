use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::game::GameState;

// Reserved evaluator outputs. Heuristics must never produce these for a
// position that is not decided.
pub const WIN: f64 = f64::INFINITY;
pub const LOSS: f64 = f64::NEG_INFINITY;

/// Scores `state` from `player`'s point of view: `WIN` iff `player` has won,
/// `LOSS` iff `player` has lost, a finite heuristic otherwise.
pub trait Evaluator<G: GameState> {
    fn score(&self, state: &G, player: G::Player) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    G: GameState,
    F: Fn(&G, G::Player) -> f64,
{
    fn score(&self, state: &G, player: G::Player) -> f64 { self(state, player) }
}

/// The sentinel for a decided position, if it is one.
pub fn decisive<G: GameState>(state: &G, player: G::Player) -> Option<f64> {
    if state.is_loser(player) { return Some(LOSS); }
    if state.is_winner(player) { return Some(WIN); }
    None
}

// Distance of a cell from the nearest edge along each axis, capped at 2.
// `mv` must be on the board.
fn edge_distance(board: &Board, mv: Move) -> (usize, usize) {
    let dr = mv.row.min(board.height() - 1 - mv.row).min(2);
    let dc = mv.col.min(board.width() - 1 - mv.col).min(2);
    (dr, dc)
}

/// Number of knight jumps available from a cell on an unobstructed board,
/// which only depends on how close the cell is to the edges.
///
/// ```text
/// 2 3 4 4 4 4 3 2
/// 3 4 6 6 6 6 4 3
/// 4 6 8 8 8 8 6 4
/// ...
/// ```
///
/// Only called with targets from `legal_moves_for`, which are on the board.
pub(crate) fn cell_freedom(board: &Board, mv: Move) -> u32 {
    const TABLE: [[u32; 3]; 3] = [[2, 3, 4], [3, 4, 6], [4, 6, 8]];
    let (dr, dc) = edge_distance(board, mv);
    TABLE[dr][dc]
}

/// Own legal moves.
pub fn open_moves(board: &Board, player: Player) -> f64 {
    if let Some(v) = decisive(board, player) { return v; }
    board.legal_moves_for(player).len() as f64
}

/// Own legal moves minus the opponent's.
pub fn improved(board: &Board, player: Player) -> f64 {
    if let Some(v) = decisive(board, player) { return v; }
    let own = board.legal_moves_for(player).len() as f64;
    let opp = board.legal_moves_for(board.opponent_of(player)).len() as f64;
    own - opp
}

/// Own moves weighted by how far their target sits from the edge:
/// edge 1, one cell in 2, interior 3.
pub fn edge_weighted(board: &Board, player: Player) -> f64 {
    if let Some(v) = decisive(board, player) { return v; }
    board
        .legal_moves_for(player)
        .into_iter()
        .map(|mv| {
            let (dr, dc) = edge_distance(board, mv);
            match dr.min(dc) { 0 => 1.0, 1 => 2.0, _ => 3.0 }
        })
        .sum()
}

fn freedom_sum(board: &Board, player: Player) -> f64 {
    board.legal_moves_for(player).into_iter().map(|mv| cell_freedom(board, mv) as f64).sum()
}

/// Sum over own moves of the knight jumps an open board allows from each target.
pub fn freedom(board: &Board, player: Player) -> f64 {
    if let Some(v) = decisive(board, player) { return v; }
    freedom_sum(board, player)
}

/// [`freedom`] for `player` minus the same sum for the opponent.
pub fn freedom_diff(board: &Board, player: Player) -> f64 {
    if let Some(v) = decisive(board, player) { return v; }
    freedom_sum(board, player) - freedom_sum(board, board.opponent_of(player))
}

/// Named Isolation heuristics, selectable from the command line or a
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    OpenMoves,
    Improved,
    EdgeWeighted,
    Freedom,
    #[default]
    FreedomDiff,
}

impl Evaluator<Board> for Heuristic {
    fn score(&self, state: &Board, player: Player) -> f64 {
        match self {
            Heuristic::OpenMoves => open_moves(state, player),
            Heuristic::Improved => improved(state, player),
            Heuristic::EdgeWeighted => edge_weighted(state, player),
            Heuristic::Freedom => freedom(state, player),
            Heuristic::FreedomDiff => freedom_diff(state, player),
        }
    }
}
