//! Agent configuration.
//!
//! The tunable constants of the agent live here rather than in process-wide
//! globals: construct an `AgentConfig`, hand it to `PokerAgent::new`, and
//! every decision call sees the same fixed configuration. The optional seed
//! makes bluff-sensitive behavior reproducible in tests.

use serde::{Deserialize, Serialize};

/// Tunable constants of the poker agent.
///
/// # Example
/// ```
/// use holdem_agent::agent::AgentConfig;
///
/// let config = AgentConfig::default().with_bluff_frequency(0.0).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// How readily the agent bets and raises. Reserved for sizing logic;
    /// the current cascade does not consult it.
    pub aggression_factor: f64,

    /// Probability scale for raising with a sub-threshold hand.
    ///
    /// The effective bluff threshold is `bluff_frequency` multiplied by the
    /// position factor, so bluffs are more frequent in better positions.
    /// Set to 0.0 for a fully deterministic agent.
    pub bluff_frequency: f64,

    /// How tightly the agent plays. Reserved for threshold tuning; the
    /// current cascade does not consult it.
    pub tight_factor: f64,

    /// Random seed for reproducibility.
    ///
    /// If set, the agent's bluff draws follow a fixed sequence. If `None`,
    /// an entropy seed is used for live play.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            aggression_factor: 0.3,
            bluff_frequency: 0.15,
            tight_factor: 0.6,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the bluff frequency.
    pub fn with_bluff_frequency(mut self, frequency: f64) -> Self {
        self.bluff_frequency = frequency;
        self
    }

    /// Builder method: set the aggression factor.
    pub fn with_aggression(mut self, aggression: f64) -> Self {
        self.aggression_factor = aggression;
        self
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.bluff_frequency) {
            return Err(ConfigError::OutOfRange("bluff_frequency", self.bluff_frequency));
        }
        if !(0.0..=1.0).contains(&self.aggression_factor) {
            return Err(ConfigError::OutOfRange("aggression_factor", self.aggression_factor));
        }
        if !(0.0..=1.0).contains(&self.tight_factor) {
            return Err(ConfigError::OutOfRange("tight_factor", self.tight_factor));
        }
        Ok(())
    }
}

/// Errors that can occur when validating the agent configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A frequency or factor is outside [0, 1].
    OutOfRange(&'static str, f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OutOfRange(name, val) => {
                write!(f, "{} value {} is out of range [0, 1]", name, val)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
