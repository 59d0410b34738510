//! The poker decision engine.
//!
//! Given one decision request — hole cards, board, legal actions, pot and
//! bet sizes, seat position — the engine produces exactly one action. All
//! computation is pure CPU work; the only external dependency is the
//! injectable randomness source behind the bluff sampler.
//!
//! ## Modules
//!
//! - `card`: card parsing and deck handling
//! - `strength`: additive hand-strength heuristic and made-hand bonus
//! - `state`: action enum and typed decision request
//! - `config`: agent tunables
//! - `policy`: pot odds, position weighting, bluff sampling and the
//!   selection cascade

pub mod card;
pub mod config;
pub mod policy;
pub mod state;
pub mod strength;

// Re-export commonly used types
pub use card::{Card, Deck, Suit};
pub use config::{AgentConfig, ConfigError};
pub use policy::{position_factor, pot_odds, OpponentStats, PokerAgent};
pub use state::{Action, GameState};
pub use strength::StrengthEvaluator;
