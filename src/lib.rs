//! # Holdem Agent
//!
//! A heuristic Texas Hold'em decision agent for a framed-message game
//! server. Given a hand state the agent produces exactly one action from
//! the server-offered action set, using an additive hand-strength
//! heuristic combined with pot odds, position weighting and stochastic
//! bluffing.
//!
//! ## Quick Start
//!
//! ```
//! use holdem_agent::agent::{AgentConfig, Card, GameState, Action, PokerAgent};
//!
//! // 1. Configure the agent (seed it for reproducible bluffs)
//! let mut agent = PokerAgent::new(AgentConfig::default().with_seed(42));
//!
//! // 2. Build a decision request
//! let state = GameState {
//!     legal_actions: vec![Action::Fold, Action::Call, Action::Raise],
//!     hole_cards: vec![Card::parse("AS"), Card::parse("AH")],
//!     board: vec![Card::parse("2C"), Card::parse("7D"), Card::parse("9S")],
//!     position: 1,
//!     total_players: 2,
//!     current_bet: 10.0,
//!     pot_size: 30.0,
//! };
//!
//! // 3. Decide
//! let action = agent.decide(&state);
//! assert!(state.legal_actions.contains(&action));
//! ```
//!
//! ## Modules
//!
//! - [`agent`]: The decision engine (cards, strength heuristic, policy)
//! - [`protocol`]: Length-prefixed JSON framing and message types
//! - [`client`]: Game loop against the hosting server
//! - [`battle`]: Offline two-agent battle harness
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Decision Engine                      │
//! │  - Hand-strength heuristic    - Pot odds / position      │
//! │  - Made-hand bonus            - Bluff sampling cascade   │
//! └──────────────────────────────────────────────────────────┘
//!                 │                          │
//!                 ▼                          ▼
//!          ┌────────────┐            ┌──────────────┐
//!          │   Client   │            │    Battle    │
//!          │ (live TCP) │            │  (offline)   │
//!          └────────────┘            └──────────────┘
//! ```

#![warn(missing_docs)]

/// The decision engine: cards, strength heuristic and selection policy.
pub mod agent;

/// Offline two-agent battle harness.
pub mod battle;

/// Game loop against the hosting server.
pub mod client;

/// Length-prefixed JSON wire protocol.
pub mod protocol;

// Re-export commonly used types at crate root for convenience
pub use agent::{Action, AgentConfig, Card, GameState, PokerAgent};
