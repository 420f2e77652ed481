use crate::search::error::ConfigError;

pub const DEFAULT_DEPTH: u32 = 3;
pub const DEFAULT_TIMEOUT_MARGIN_MS: f64 = 10.0;

/// Fixed per-agent search settings. `depth` is only read by the fixed-depth
/// engine; iterative deepening picks its own depths.
#[derive(Debug, Clone)]
pub struct SearchConfig<E> {
    pub depth: u32,
    pub evaluator: E,
    pub timeout_margin_ms: f64,
}

impl<E> SearchConfig<E> {
    pub fn new(evaluator: E) -> Self {
        Self { depth: DEFAULT_DEPTH, evaluator, timeout_margin_ms: DEFAULT_TIMEOUT_MARGIN_MS }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_timeout_margin_ms(mut self, margin: f64) -> Self {
        self.timeout_margin_ms = margin;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 { return Err(ConfigError::ZeroDepth); }
        // Also rejects NaN.
        if !(self.timeout_margin_ms >= 0.0) { return Err(ConfigError::InvalidMargin(self.timeout_margin_ms)); }
        Ok(())
    }
}
