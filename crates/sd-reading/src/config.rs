//! Configuration for a reading session.

use sd_core::{BowlLayout, DrawPolicy};

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible casts.
    pub seed: u64,
    /// Initial draw policy.
    pub policy: DrawPolicy,
    /// Bowl landmarks the cards are read against.
    pub layout: BowlLayout,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            policy: DrawPolicy::Normal,
            layout: BowlLayout::standard(),
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the draw policy.
    pub fn with_policy(mut self, policy: DrawPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the bowl layout.
    pub fn with_layout(mut self, layout: BowlLayout) -> Self {
        self.layout = layout;
        self
    }
}
