//! Heuristic hand-strength evaluation.
//!
//! The evaluator produces a scalar strength in [0.1, 0.95] from the hole
//! cards plus any revealed community cards. It is an additive heuristic,
//! not an exact ranking: high-card, pair, suitedness and connectivity
//! bonuses are summed onto a neutral base, and once three or more community
//! cards are visible a made-hand bonus is added on top.
//!
//! The score is always clamped away from 0 and 1: a heuristic never claims
//! certainty either way.

use super::card::{Card, RANK_A, RANK_J, RANK_K, RANK_Q, RANK_T};

/// Strength returned when the hole cards are absent or malformed.
pub const NEUTRAL_STRENGTH: f64 = 0.5;

/// Lower clamp of every strength score.
pub const STRENGTH_FLOOR: f64 = 0.1;

/// Upper clamp of every strength score.
pub const STRENGTH_CEIL: f64 = 0.95;

/// Heuristic strength evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthEvaluator;

impl StrengthEvaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate hole cards against a board, returning a strength in
    /// [0.1, 0.95].
    ///
    /// If `hole` is not exactly two cards the evaluator short-circuits to
    /// the neutral 0.5 without further computation.
    pub fn evaluate(&self, hole: &[Card], board: &[Card]) -> f64 {
        if hole.len() != 2 {
            return NEUTRAL_STRENGTH;
        }

        let mut strength = 0.5;

        // High-card bonus for each broadway hole card.
        for card in hole {
            strength += match card.rank {
                RANK_A => 0.08,
                RANK_K => 0.06,
                RANK_Q => 0.04,
                RANK_J => 0.03,
                _ => 0.0,
            };
        }

        // Pocket pair, tiered by height and capped at 0.4.
        if hole[0].rank == hole[1].rank {
            let rank = hole[0].rank;
            let pair_bonus = if rank >= RANK_T {
                0.25 + f64::from(rank - RANK_T) * 0.05
            } else {
                0.10 + f64::from(rank - 2) * 0.02
            };
            strength += pair_bonus.min(0.4);
        }

        // Suitedness, plus a flush-draw bonus when four of the suit are
        // visible across hole and board.
        if hole[0].suit == hole[1].suit {
            strength += 0.03;
            let suit = hole[0].suit;
            let suit_count = hole
                .iter()
                .chain(board.iter())
                .filter(|c| c.suit == suit)
                .count();
            if suit_count >= 4 {
                strength += 0.12;
            }
        }

        // Connectivity: gap of one is a connector, two or three is close.
        let gap = hole[0].rank.abs_diff(hole[1].rank);
        if gap == 1 {
            strength += 0.04;
        } else if (2..=3).contains(&gap) {
            strength += 0.02;
        }

        // Made-hand bonus once the flop is out.
        if board.len() >= 3 {
            let mut all_cards = Vec::with_capacity(hole.len() + board.len());
            all_cards.extend_from_slice(hole);
            all_cards.extend_from_slice(board);
            strength += self.made_hand_bonus(&all_cards);
        }

        strength.clamp(STRENGTH_FLOOR, STRENGTH_CEIL)
    }

    /// Additive bonus for the best realized category across 5-7 cards.
    ///
    /// Rank-based, flush and straight bonuses stack: they are independent
    /// additions, not mutually exclusive. That stacking is intentional and
    /// callers rely on the resulting numbers.
    ///
    /// Returns 0 for fewer than 5 cards.
    pub fn made_hand_bonus(&self, cards: &[Card]) -> f64 {
        if cards.len() < 5 {
            return 0.0;
        }

        // Count occurrences per rank (index = rank) and per suit.
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for card in cards {
            rank_counts[card.rank as usize] += 1;
            suit_counts[card.suit.index()] += 1;
        }

        let max_rank_count = rank_counts.iter().copied().max().unwrap_or(0);
        let paired_ranks = rank_counts.iter().filter(|&&c| c >= 2).count();

        let mut bonus = 0.0;

        if max_rank_count >= 4 {
            // Four of a kind.
            bonus += 0.35;
        } else if max_rank_count >= 3 {
            // Trips; a second paired rank upgrades to a full house.
            bonus += 0.20;
            if paired_ranks >= 2 {
                bonus += 0.10;
            }
        } else if paired_ranks >= 2 {
            // Two pair.
            bonus += 0.12;
        } else if max_rank_count >= 2 {
            // One pair, graded by height.
            let pair_rank = (2..15usize)
                .rev()
                .find(|&r| rank_counts[r] >= 2)
                .unwrap_or(2);
            bonus += if pair_rank >= RANK_T as usize { 0.08 } else { 0.05 };
        }

        // Flush, additive with the rank-based bonus.
        if suit_counts.iter().any(|&c| c >= 5) {
            bonus += 0.25;
        }

        // Simplified straight check: any window of five distinct ranks
        // whose span is exactly four. No ace-low wheel case; kept as-is
        // for numeric compatibility with the rest of the heuristic.
        let mut distinct: Vec<u8> = (2..15)
            .filter(|&r| rank_counts[r as usize] > 0)
            .collect();
        distinct.sort_unstable();
        if distinct.len() >= 5 {
            for window in distinct.windows(5) {
                if window[4] - window[0] == 4 {
                    bonus += 0.20;
                    break;
                }
            }
        }

        bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &str) -> Vec<Card> {
        tokens.split_whitespace().map(Card::parse).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_neutral_without_two_hole_cards() {
        let eval = StrengthEvaluator::new();
        assert_eq!(eval.evaluate(&[], &[]), NEUTRAL_STRENGTH);
        assert_eq!(eval.evaluate(&cards("AS"), &[]), NEUTRAL_STRENGTH);
        assert_eq!(
            eval.evaluate(&cards("AS KH QD"), &cards("2C 7D 9S")),
            NEUTRAL_STRENGTH
        );
    }

    #[test]
    fn test_strength_always_clamped() {
        let eval = StrengthEvaluator::new();
        let boards = [
            "".to_string(),
            "2C 7D 9S".to_string(),
            "AS AH AD AC KS".to_string(),
        ];
        let holes = ["AS AH", "2S 7H", "KS QS", "2C 2D"];
        for hole in holes {
            for board in &boards {
                let s = eval.evaluate(&cards(hole), &cards(board));
                assert!(
                    (STRENGTH_FLOOR..=STRENGTH_CEIL).contains(&s),
                    "strength {} out of range for {} / {}",
                    s,
                    hole,
                    board
                );
            }
        }
    }

    #[test]
    fn test_pocket_aces_scenario() {
        let eval = StrengthEvaluator::new();
        let s = eval.evaluate(&cards("AS AH"), &cards("2C 7D 9S"));
        assert!((0.7..=1.0).contains(&s), "AA strength {} not in [0.7, 1.0]", s);
    }

    #[test]
    fn test_mid_pair_scenario() {
        let eval = StrengthEvaluator::new();
        let s = eval.evaluate(&cards("8S 8H"), &cards("2C 7D 9S"));
        assert!((0.6..=0.8).contains(&s), "88 strength {} not in [0.6, 0.8]", s);
    }

    #[test]
    fn test_offsuit_high_cards_scenario() {
        let eval = StrengthEvaluator::new();
        let s = eval.evaluate(&cards("AS KH"), &cards("2C 7D 9S"));
        assert!((0.5..=0.7).contains(&s), "AK strength {} not in [0.5, 0.7]", s);
    }

    #[test]
    fn test_trash_hand_scenario() {
        let eval = StrengthEvaluator::new();
        let s = eval.evaluate(&cards("2S 7H"), &cards("KC QD JS"));
        assert!((0.1..=0.5).contains(&s), "72o strength {} not in [0.1, 0.5]", s);
    }

    #[test]
    fn test_made_hand_needs_five_cards() {
        let eval = StrengthEvaluator::new();
        assert_eq!(eval.made_hand_bonus(&cards("AS AH AD AC")), 0.0);
    }

    #[test]
    fn test_quads_bonus() {
        let eval = StrengthEvaluator::new();
        let bonus = eval.made_hand_bonus(&cards("AS AH AD AC KS"));
        assert!(close(bonus, 0.35), "quads bonus {}", bonus);
    }

    #[test]
    fn test_trips_and_full_house_bonus() {
        let eval = StrengthEvaluator::new();
        let trips = eval.made_hand_bonus(&cards("AS AH AD KC QS"));
        assert!(close(trips, 0.20), "trips bonus {}", trips);

        let boat = eval.made_hand_bonus(&cards("AS AH AD KC KS"));
        assert!(close(boat, 0.30), "full house bonus {}", boat);
    }

    #[test]
    fn test_two_pair_bonus() {
        let eval = StrengthEvaluator::new();
        let bonus = eval.made_hand_bonus(&cards("AS AH KD KC QS"));
        assert!(close(bonus, 0.12), "two pair bonus {}", bonus);
    }

    #[test]
    fn test_one_pair_graded_by_height() {
        let eval = StrengthEvaluator::new();
        let high = eval.made_hand_bonus(&cards("AS AH KD QC JS"));
        assert!(close(high, 0.08), "high pair bonus {}", high);

        let low = eval.made_hand_bonus(&cards("5S 5H KD QC JS"));
        assert!(close(low, 0.05), "low pair bonus {}", low);
    }

    #[test]
    fn test_flush_stacks_with_pair() {
        let eval = StrengthEvaluator::new();
        // Flush alone.
        let flush = eval.made_hand_bonus(&cards("AS KS 9S 7S 2S"));
        assert!(close(flush, 0.25), "flush bonus {}", flush);

        // Flush plus a low pair in a sixth card: bonuses stack.
        let both = eval.made_hand_bonus(&cards("AS KS 9S 7S 2S 2H"));
        assert!(close(both, 0.30), "flush + pair bonus {}", both);
    }

    #[test]
    fn test_straight_window_bonus() {
        let eval = StrengthEvaluator::new();
        let bonus = eval.made_hand_bonus(&cards("6S 7H 8D 9C TS"));
        assert!(close(bonus, 0.20), "straight bonus {}", bonus);
    }

    #[test]
    fn test_straight_stacks_with_pair() {
        let eval = StrengthEvaluator::new();
        // Window over distinct ranks {4..8} plus a pair of eights: the
        // straight and pair bonuses stack.
        let bonus = eval.made_hand_bonus(&cards("4S 5H 6D 7C 8S 8H"));
        assert!(close(bonus, 0.25), "straight + pair bonus {}", bonus);
    }

    #[test]
    fn test_no_wheel_straight() {
        let eval = StrengthEvaluator::new();
        // The span check has no ace-low special case: A-2-3-4-5 does not
        // fire, a known imprecision of the heuristic.
        let bonus = eval.made_hand_bonus(&cards("AS 2H 3D 4C 5S"));
        assert!(close(bonus, 0.0), "wheel bonus {}", bonus);
    }

    #[test]
    fn test_no_straight_for_wide_span() {
        let eval = StrengthEvaluator::new();
        let bonus = eval.made_hand_bonus(&cards("2S 7H JD QC KS"));
        assert!(close(bonus, 0.0), "wide span bonus {}", bonus);
    }
}
