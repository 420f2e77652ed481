use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, RandomAgent};
use crate::board::isolation::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::board::Board;
use crate::search::config::{DEFAULT_DEPTH, DEFAULT_TIMEOUT_MARGIN_MS};
use crate::search::{AlphaBetaEngine, Heuristic, MinimaxEngine, SearchConfig};

fn default_depth() -> u32 { DEFAULT_DEPTH }
fn default_margin() -> f64 { DEFAULT_TIMEOUT_MARGIN_MS }
fn default_width() -> usize { DEFAULT_WIDTH }
fn default_height() -> usize { DEFAULT_HEIGHT }
fn default_time_limit() -> u64 { 150 }

/// How one side of a game is played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AgentSettings {
    Minimax {
        #[serde(default = "default_depth")]
        depth: u32,
        #[serde(default)]
        heuristic: Heuristic,
        #[serde(default = "default_margin")]
        margin_ms: f64,
    },
    AlphaBeta {
        #[serde(default)]
        max_depth: Option<u32>,
        #[serde(default)]
        heuristic: Heuristic,
        #[serde(default = "default_margin")]
        margin_ms: f64,
    },
    Random {
        #[serde(default)]
        seed: u64,
    },
}

impl AgentSettings {
    pub fn build(&self) -> Result<Box<dyn Agent<Board>>> {
        let agent: Box<dyn Agent<Board>> = match *self {
            AgentSettings::Minimax { depth, heuristic, margin_ms } => {
                let cfg = SearchConfig::new(heuristic).with_depth(depth).with_timeout_margin_ms(margin_ms);
                Box::new(MinimaxEngine::new(cfg).context("invalid minimax settings")?)
            }
            AgentSettings::AlphaBeta { max_depth, heuristic, margin_ms } => {
                let cfg = SearchConfig::new(heuristic).with_timeout_margin_ms(margin_ms);
                let engine = AlphaBetaEngine::new(cfg)
                    .and_then(|e| e.with_max_depth(max_depth))
                    .context("invalid alphabeta settings")?;
                Box::new(engine)
            }
            AgentSettings::Random { seed } => Box::new(RandomAgent::new(seed)),
        };
        Ok(agent)
    }
}

/// One game: board size, clock and both agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_time_limit")]
    pub time_limit_ms: u64,
    #[serde(default)]
    pub random_openings: bool,
    #[serde(default)]
    pub seed: u64,
    pub player_one: AgentSettings,
    pub player_two: AgentSettings,
}

impl MatchSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse match settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text)
    }
}
