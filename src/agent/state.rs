//! Decision request types.
//!
//! A `GameState` is built fresh from each server decision request and
//! discarded after one action is produced. Every field except the legal
//! action set has a defined default, so a sparse request is still a valid
//! request.

use super::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker betting action.
///
/// The engine only ever chooses from the server-declared legal set; it
/// never invents an action outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

impl Action {
    /// Wire name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise => "raise",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decision request: everything the agent knows when it must act.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Actions the server currently permits. Empty resolves to fold.
    pub legal_actions: Vec<Action>,
    /// The player's two private cards. Anything other than exactly two
    /// cards evaluates to neutral strength.
    pub hole_cards: Vec<Card>,
    /// Community cards revealed so far (0-5).
    pub board: Vec<Card>,
    /// Seat index of the acting player.
    pub position: usize,
    /// Number of players at the table.
    pub total_players: usize,
    /// Amount required to call.
    pub current_bet: f64,
    /// Current pot size.
    pub pot_size: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            legal_actions: Vec::new(),
            hole_cards: Vec::new(),
            board: Vec::new(),
            position: 0,
            total_players: 2,
            current_bet: 0.0,
            pot_size: 0.0,
        }
    }
}

impl GameState {
    /// Check the numeric fields hold values the cascade can reason about.
    ///
    /// A state failing this check is answered with the fallback policy
    /// instead of the main cascade.
    pub fn is_coherent(&self) -> bool {
        self.current_bet.is_finite()
            && self.pot_size.is_finite()
            && self.current_bet >= 0.0
            && self.pot_size >= 0.0
            && self.total_players >= 2
    }
}
