// Minimax and iterative-deepening alpha-beta agents for knight's-move Isolation
pub mod agent;
pub mod board;
pub mod game;
pub mod play;
pub mod search;
pub mod settings;

pub use agent::{Agent, RandomAgent};
pub use board::{Board, Move, Player};
pub use game::{Clock, GameState, TurnTimer, Unlimited};
pub use search::{AlphaBetaEngine, Evaluator, Heuristic, MinimaxEngine, SearchConfig, SearchResult, SearchTimeout};
