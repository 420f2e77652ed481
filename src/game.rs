//! Collaborator interfaces the searchers are written against.
//!
//! A [`GameState`] is a value: `forecast` hands back a fresh state and never
//! touches the receiver, so a searcher can keep every ancestor on its stack
//! while exploring siblings. A [`Clock`] reports how much of the current turn
//! is left; searchers only ever read it.

use std::fmt::Debug;
use std::time::{Duration, Instant};

pub trait GameState: Clone {
    type Move: Copy + Eq + Debug;
    type Player: Copy + Eq + Debug;

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// Legal moves for `player`, in a stable enumeration order.
    fn legal_moves_for(&self, player: Self::Player) -> Vec<Self::Move>;

    /// Legal moves for the player to act.
    fn legal_moves(&self) -> Vec<Self::Move> {
        self.legal_moves_for(self.active_player())
    }

    /// The state after the active player plays `mv`. `self` is left untouched.
    fn forecast(&self, mv: Self::Move) -> Self;

    fn is_winner(&self, player: Self::Player) -> bool;
    fn is_loser(&self, player: Self::Player) -> bool;
    fn opponent_of(&self, player: Self::Player) -> Self::Player;
}

/// Remaining time in the current turn, in milliseconds.
pub trait Clock {
    fn remaining_ms(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    fn remaining_ms(&self) -> f64 { self() }
}

/// A clock that never runs out. Useful for fixed-depth analysis.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unlimited;

impl Clock for Unlimited {
    fn remaining_ms(&self) -> f64 { f64::INFINITY }
}

/// Wall-clock budget for one turn, started on construction.
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    start: Instant,
    budget: Duration,
}

impl TurnTimer {
    pub fn start(budget: Duration) -> Self {
        Self { start: Instant::now(), budget }
    }

    pub fn from_millis(ms: u64) -> Self { Self::start(Duration::from_millis(ms)) }
}

impl Clock for TurnTimer {
    // Goes negative once the budget is spent; callers compare against a margin.
    fn remaining_ms(&self) -> f64 {
        self.budget.as_secs_f64() * 1000.0 - self.start.elapsed().as_secs_f64() * 1000.0
    }
}
