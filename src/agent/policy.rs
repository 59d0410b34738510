//! Decision policy.
//!
//! `PokerAgent` combines the strength evaluator with pot odds, position
//! weighting and bluff sampling into a single selection cascade. One call
//! to [`PokerAgent::decide`] produces exactly one action from the
//! server-declared legal set; nothing persists between calls except the
//! configuration, the RNG position and the bookkeeping stubs.

use super::card::Card;
use super::config::AgentConfig;
use super::state::{Action, GameState};
use super::strength::StrengthEvaluator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

/// Position weight for the small blind in heads-up play.
const POSITION_SMALL_BLIND: f64 = 0.8;
/// Position weight for the big blind in heads-up play.
const POSITION_BIG_BLIND: f64 = 0.9;
/// Flat position weight for everything else.
const POSITION_DEFAULT: f64 = 0.85;

/// Ratio of pot size to the amount required to call.
///
/// Returns `+inf` when no call is required; never divides by zero.
pub fn pot_odds(current_bet: f64, pot_size: f64) -> f64 {
    if current_bet <= 0.0 {
        f64::INFINITY
    } else {
        pot_size / current_bet
    }
}

/// Position weight for a seat.
///
/// Heads-up seats use a fixed two-entry table; any other seat count gets a
/// flat weight. Per-seat refinement for three-handed and larger tables is
/// out of scope.
pub fn position_factor(position: usize, total_players: usize) -> f64 {
    if total_players == 2 {
        match position {
            0 => POSITION_SMALL_BLIND,
            1 => POSITION_BIG_BLIND,
            _ => POSITION_DEFAULT,
        }
    } else {
        POSITION_DEFAULT
    }
}

/// Per-opponent observation counters.
///
/// Populated by the harnesses but not yet consulted by the cascade;
/// reserved for future opponent modeling.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentStats {
    /// Actions observed in total.
    pub actions_seen: u64,
    /// Raises observed.
    pub raises: u64,
    /// Calls observed.
    pub calls: u64,
    /// Folds observed.
    pub folds: u64,
}

impl OpponentStats {
    fn record(&mut self, action: Action) {
        self.actions_seen += 1;
        match action {
            Action::Raise => self.raises += 1,
            Action::Call => self.calls += 1,
            Action::Fold => self.folds += 1,
            Action::Check => {}
        }
    }

    /// Fraction of observed actions that were raises.
    pub fn raise_rate(&self) -> f64 {
        if self.actions_seen == 0 {
            0.0
        } else {
            self.raises as f64 / self.actions_seen as f64
        }
    }
}

/// The poker decision agent.
pub struct PokerAgent {
    config: AgentConfig,
    evaluator: StrengthEvaluator,
    rng: StdRng,
    opponent_stats: FxHashMap<String, OpponentStats>,
    /// Win/loss amounts of finished hands, in order.
    history: Vec<f64>,
}

impl PokerAgent {
    /// Create an agent from a configuration.
    ///
    /// With `config.seed` set the bluff draws follow a fixed sequence;
    /// otherwise an entropy seed is used.
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            evaluator: StrengthEvaluator::new(),
            rng,
            opponent_stats: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// The agent's configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Evaluate hand strength for the given cards (see
    /// [`StrengthEvaluator::evaluate`]).
    pub fn hand_strength(&self, hole: &[Card], board: &[Card]) -> f64 {
        self.evaluator.evaluate(hole, board)
    }

    /// Stochastic bluff gate.
    ///
    /// Strong hands (strength above 0.7) never bluff. Otherwise one
    /// uniform draw is compared against `bluff_frequency × position
    /// factor`.
    pub fn should_bluff(&mut self, hand_strength: f64, position_factor: f64) -> bool {
        if hand_strength > 0.7 {
            return false;
        }
        let threshold = self.config.bluff_frequency * position_factor;
        self.rng.gen::<f64>() < threshold
    }

    /// Choose one action for the given state.
    ///
    /// The main cascade runs for coherent states; an incoherent state is
    /// answered by [`PokerAgent::fallback_action`] instead. The returned
    /// action is always a member of `state.legal_actions`, except that an
    /// empty legal set resolves to fold by convention.
    pub fn decide(&mut self, state: &GameState) -> Action {
        if state.legal_actions.is_empty() {
            return Action::Fold;
        }
        if !state.is_coherent() {
            return Self::fallback_action(&state.legal_actions);
        }
        self.cascade(state)
    }

    /// The main selection cascade, evaluated top to bottom exactly once.
    fn cascade(&mut self, state: &GameState) -> Action {
        let legal = &state.legal_actions;
        let hand_strength = self.evaluator.evaluate(&state.hole_cards, &state.board);
        let position_factor = position_factor(state.position, state.total_players);
        let adjusted_strength = hand_strength * position_factor;
        let pot_odds = pot_odds(state.current_bet, state.pot_size);

        // Raise with a strong hand, or bluff into one. The bluff draw only
        // happens when the strength test fails.
        if legal.contains(&Action::Raise)
            && (adjusted_strength > 0.75 || self.should_bluff(hand_strength, position_factor))
        {
            return Action::Raise;
        }

        // Call when strength clears a threshold that rises with good pot
        // odds (long odds demand a stronger hand to continue).
        let call_threshold = 0.4 + if pot_odds > 3.0 { 0.1 } else { 0.0 };
        if legal.contains(&Action::Call) && adjusted_strength > call_threshold {
            return Action::Call;
        }

        // Check with medium strength, or with nothing worth investing in.
        if legal.contains(&Action::Check) && (adjusted_strength > 0.3 || hand_strength < 0.2) {
            return Action::Check;
        }

        if legal.contains(&Action::Fold) {
            return Action::Fold;
        }

        // Closed-world choice: take whatever the server offers first.
        legal[0]
    }

    /// Fixed-priority degraded policy: check, else call, else fold, else
    /// the first legal action.
    ///
    /// Used when a decision request is too malformed for the cascade to
    /// reason about; exposed so the ordering is testable on its own.
    pub fn fallback_action(legal_actions: &[Action]) -> Action {
        for preferred in [Action::Check, Action::Call, Action::Fold] {
            if legal_actions.contains(&preferred) {
                return preferred;
            }
        }
        legal_actions.first().copied().unwrap_or(Action::Fold)
    }

    /// Record the outcome of a finished hand.
    pub fn record_result(&mut self, win_money: f64) {
        self.history.push(win_money);
    }

    /// Record an observed opponent action for future modeling.
    pub fn note_opponent_action(&mut self, name: &str, action: Action) {
        self.opponent_stats
            .entry(name.to_string())
            .or_default()
            .record(action);
    }

    /// Observation counters for a named opponent, if any were recorded.
    pub fn opponent_stats(&self, name: &str) -> Option<&OpponentStats> {
        self.opponent_stats.get(name)
    }

    /// Number of finished hands recorded.
    pub fn hands_recorded(&self) -> usize {
        self.history.len()
    }

    /// Net winnings across all recorded hands.
    pub fn net_winnings(&self) -> f64 {
        self.history.iter().sum()
    }
}

impl std::fmt::Debug for PokerAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokerAgent")
            .field("config", &self.config)
            .field("hands_recorded", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &str) -> Vec<Card> {
        tokens.split_whitespace().map(Card::parse).collect()
    }

    /// Agent with bluffing disabled and a fixed seed, for deterministic
    /// cascade tests.
    fn deterministic_agent() -> PokerAgent {
        PokerAgent::new(AgentConfig::default().with_bluff_frequency(0.0).with_seed(1))
    }

    #[test]
    fn test_pot_odds() {
        assert_eq!(pot_odds(10.0, 30.0), 3.0);
        assert_eq!(pot_odds(20.0, 40.0), 2.0);
        assert_eq!(pot_odds(0.0, 20.0), f64::INFINITY);
        assert_eq!(pot_odds(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_position_factor() {
        assert_eq!(position_factor(0, 2), 0.8);
        assert_eq!(position_factor(1, 2), 0.9);
        assert_eq!(position_factor(5, 2), 0.85);
        assert_eq!(position_factor(0, 3), 0.85);
        assert_eq!(position_factor(2, 6), 0.85);
    }

    #[test]
    fn test_empty_legal_actions_folds() {
        let mut agent = deterministic_agent();
        let state = GameState::default();
        assert_eq!(agent.decide(&state), Action::Fold);
    }

    #[test]
    fn test_strong_hand_raises() {
        let mut agent = deterministic_agent();
        let state = GameState {
            legal_actions: vec![Action::Fold, Action::Call, Action::Raise],
            hole_cards: cards("AS AH"),
            board: cards("2C 7D 9S"),
            position: 1,
            total_players: 2,
            current_bet: 10.0,
            pot_size: 30.0,
        };
        assert_eq!(agent.decide(&state), Action::Raise);
    }

    #[test]
    fn test_trash_hand_folds() {
        let mut agent = deterministic_agent();
        let state = GameState {
            legal_actions: vec![Action::Fold, Action::Call],
            hole_cards: cards("2S 7H"),
            board: cards("KC QD JS"),
            position: 0,
            total_players: 2,
            current_bet: 20.0,
            pot_size: 40.0,
        };
        assert_eq!(agent.decide(&state), Action::Fold);
    }

    #[test]
    fn test_medium_hand_checks() {
        let mut agent = deterministic_agent();
        let state = GameState {
            legal_actions: vec![Action::Check, Action::Fold],
            hole_cards: cards("8S 9H"),
            board: cards("2C 7D KS"),
            position: 1,
            total_players: 2,
            current_bet: 0.0,
            pot_size: 20.0,
        };
        assert_eq!(agent.decide(&state), Action::Check);
    }

    #[test]
    fn test_decision_stays_within_legal_set() {
        let mut agent = PokerAgent::new(AgentConfig::default().with_seed(9));
        let holes = ["AS AH", "2S 7H", "8S 9H", "KS QS"];
        let legal_sets: &[&[Action]] = &[
            &[Action::Fold],
            &[Action::Check],
            &[Action::Call, Action::Raise],
            &[Action::Fold, Action::Check, Action::Call, Action::Raise],
            &[Action::Raise],
        ];
        for hole in holes {
            for legal in legal_sets {
                let state = GameState {
                    legal_actions: legal.to_vec(),
                    hole_cards: cards(hole),
                    board: cards("2C 7D 9S"),
                    position: 0,
                    total_players: 2,
                    current_bet: 10.0,
                    pot_size: 30.0,
                };
                let action = agent.decide(&state);
                assert!(
                    legal.contains(&action),
                    "action {:?} outside legal set {:?}",
                    action,
                    legal
                );
            }
        }
    }

    #[test]
    fn test_fallback_ordering() {
        let all = [Action::Fold, Action::Check, Action::Call, Action::Raise];
        assert_eq!(PokerAgent::fallback_action(&all), Action::Check);
        assert_eq!(
            PokerAgent::fallback_action(&[Action::Fold, Action::Call]),
            Action::Call
        );
        assert_eq!(
            PokerAgent::fallback_action(&[Action::Raise, Action::Fold]),
            Action::Fold
        );
        assert_eq!(PokerAgent::fallback_action(&[Action::Raise]), Action::Raise);
        assert_eq!(PokerAgent::fallback_action(&[]), Action::Fold);
    }

    #[test]
    fn test_incoherent_state_takes_fallback() {
        let mut agent = deterministic_agent();
        let state = GameState {
            legal_actions: vec![Action::Fold, Action::Check, Action::Call],
            hole_cards: cards("AS AH"),
            board: cards("2C 7D 9S"),
            current_bet: f64::NAN,
            ..GameState::default()
        };
        // With aces the cascade would act on strength; the fallback
        // prefers check regardless.
        assert_eq!(agent.decide(&state), Action::Check);
    }

    #[test]
    fn test_strong_hands_never_bluff() {
        let mut agent = PokerAgent::new(
            AgentConfig::default().with_bluff_frequency(1.0).with_seed(3),
        );
        for _ in 0..100 {
            assert!(!agent.should_bluff(0.71, 0.9));
        }
    }

    #[test]
    fn test_zero_frequency_never_bluffs() {
        let mut agent = deterministic_agent();
        for _ in 0..100 {
            assert!(!agent.should_bluff(0.5, 0.9));
        }
    }

    #[test]
    fn test_bluff_rate_tracks_threshold() {
        let mut agent = PokerAgent::new(
            AgentConfig::default().with_bluff_frequency(1.0).with_seed(11),
        );
        // Threshold is 1.0 * 0.8; over many seeded draws the observed rate
        // should land near it.
        let bluffs = (0..2000).filter(|_| agent.should_bluff(0.5, 0.8)).count();
        let rate = bluffs as f64 / 2000.0;
        assert!((0.7..0.9).contains(&rate), "bluff rate {}", rate);
    }

    #[test]
    fn test_bookkeeping() {
        let mut agent = deterministic_agent();
        agent.record_result(50.0);
        agent.record_result(-20.0);
        assert_eq!(agent.hands_recorded(), 2);
        assert_eq!(agent.net_winnings(), 30.0);

        agent.note_opponent_action("villain", Action::Raise);
        agent.note_opponent_action("villain", Action::Fold);
        let stats = agent.opponent_stats("villain").unwrap();
        assert_eq!(stats.actions_seen, 2);
        assert_eq!(stats.raise_rate(), 0.5);
        assert!(agent.opponent_stats("nobody").is_none());
    }
}
