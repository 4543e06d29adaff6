use crate::error::{DctError, Result};
use crate::strategy::Strategy;

/// Default embedding strength.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Checks that `alpha` is a usable embedding strength, finite and in `(0, 1]`.
pub fn check_alpha(alpha: f64) -> Result<f64> {
    if alpha.is_finite() && alpha > 0.0 && alpha <= 1.0 {
        Ok(alpha)
    } else {
        Err(DctError::AlphaError(alpha))
    }
}

/// Everything embedder and extractor have to agree on.
///
/// `p` and `q` tune the position generating strategies, see [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddingParams {
    strategy: Strategy,
    alpha: f64,
    p: usize,
    q: usize,
}

impl EmbeddingParams {
    pub fn new(strategy: Strategy, alpha: f64, p: usize, q: usize) -> Result<Self> {
        Ok(Self {
            strategy,
            alpha: check_alpha(alpha)?,
            p,
            q,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        self.alpha = check_alpha(alpha)?;
        Ok(self)
    }

    pub fn with_strides(mut self, p: usize, q: usize) -> Self {
        self.p = p;
        self.q = q;
        self
    }
}

impl Default for EmbeddingParams {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            alpha: DEFAULT_ALPHA,
            p: 3,
            q: 5,
        }
    }
}
