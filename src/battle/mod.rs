//! Offline battle harness.
//!
//! Replays scripted hands between two agents without a server: seeded
//! deck, four betting rounds with every action available, a fixed raise
//! size growing the pot, and a heuristic showdown when nobody folds.
//! Useful for eyeballing tendencies of different configurations; not a
//! rigorous equity measurement.

use crate::agent::{Action, AgentConfig, Card, Deck, GameState, PokerAgent};
use indicatif::ProgressBar;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pot increment for each raise.
const RAISE_SIZE: f64 = 20.0;

/// Battle parameters.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Hands to play.
    pub hands: usize,
    /// Seed for the deck and both agents.
    pub seed: u64,
    /// Configuration shared by both agents (each gets its own derived
    /// seed).
    pub agent_config: AgentConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            hands: 100,
            seed: 0,
            agent_config: AgentConfig::default(),
        }
    }
}

/// Outcome of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// The indexed agent won, by fold or at showdown.
    Win(usize),
    /// Equal showdown strength.
    Tie,
}

/// Tally across a battle run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattleReport {
    /// Wins per agent.
    pub wins: [usize; 2],
    /// Tied hands.
    pub ties: usize,
    /// Hands played.
    pub hands: usize,
}

impl BattleReport {
    fn record(&mut self, outcome: HandOutcome) {
        self.hands += 1;
        match outcome {
            HandOutcome::Win(i) => self.wins[i] += 1,
            HandOutcome::Tie => self.ties += 1,
        }
    }

    /// Win fraction for an agent.
    pub fn win_rate(&self, agent: usize) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.wins[agent] as f64 / self.hands as f64
        }
    }
}

/// Two agents playing scripted hands against each other.
pub struct Battle {
    agents: [PokerAgent; 2],
    deck: Deck,
    rng: StdRng,
}

impl Battle {
    /// Set up a battle; both agents derive distinct seeds from
    /// `config.seed` so runs are reproducible.
    pub fn new(config: &BattleConfig) -> Self {
        let agent = |offset: u64| {
            PokerAgent::new(config.agent_config.clone().with_seed(config.seed.wrapping_add(offset)))
        };
        Self {
            agents: [agent(1), agent(2)],
            deck: Deck::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Play the configured number of hands and tally outcomes.
    pub fn run(&mut self, hands: usize, show_progress: bool) -> BattleReport {
        let bar = if show_progress {
            Some(ProgressBar::new(hands as u64))
        } else {
            None
        };

        let mut report = BattleReport::default();
        for hand in 0..hands {
            let outcome = self.play_hand();
            debug!("hand {}: {:?}", hand + 1, outcome);
            report.record(outcome);
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }
        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }
        report
    }

    /// Play one hand through all four streets.
    pub fn play_hand(&mut self) -> HandOutcome {
        self.deck.shuffle(&mut self.rng);
        let holes = [self.deck.deal_n(2), self.deck.deal_n(2)];
        let board = self.deck.deal_n(5);

        let mut pot = 0.0;
        // Streets: preflop, flop, turn, river.
        for visible in [0usize, 3, 4, 5] {
            let street: &[Card] = &board[..visible];
            for seat in 0..2 {
                let state = GameState {
                    legal_actions: vec![Action::Fold, Action::Check, Action::Call, Action::Raise],
                    hole_cards: holes[seat].clone(),
                    board: street.to_vec(),
                    position: seat,
                    total_players: 2,
                    current_bet: 0.0,
                    pot_size: pot,
                };
                let action = self.agents[seat].decide(&state);
                let rival = 1 - seat;
                self.agents[rival].note_opponent_action(seat_name(seat), action);
                match action {
                    Action::Fold => return HandOutcome::Win(rival),
                    Action::Raise => pot += RAISE_SIZE,
                    Action::Check | Action::Call => {}
                }
            }
        }

        // Heuristic showdown: compare evaluator strengths on the full
        // board. Exact hand ranking is deliberately out of scope.
        let s0 = self.agents[0].hand_strength(&holes[0], &board);
        let s1 = self.agents[1].hand_strength(&holes[1], &board);
        if s0 > s1 {
            HandOutcome::Win(0)
        } else if s1 > s0 {
            HandOutcome::Win(1)
        } else {
            HandOutcome::Tie
        }
    }

    /// The agents, for post-run inspection.
    pub fn agents(&self) -> &[PokerAgent; 2] {
        &self.agents
    }
}

fn seat_name(seat: usize) -> &'static str {
    if seat == 0 {
        "agent0"
    } else {
        "agent1"
    }
}
