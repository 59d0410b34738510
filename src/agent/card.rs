//! Card representation for the agent.
//!
//! This module provides the card types used by the decision engine:
//! - `Suit`: One of the four suits
//! - `Card`: A single playing card with rank and suit
//! - `Deck`: A shuffled deck of 52 cards for offline battles
//!
//! Parsing is total by design: the hosting server is trusted only loosely,
//! so a malformed token degrades to the lowest rank and a default suit
//! instead of failing. The engine must always produce an action, even for
//! garbage input.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric rank of a card: 2-14, where 11=J, 12=Q, 13=K, 14=A.
pub const RANK_MIN: u8 = 2;
pub const RANK_T: u8 = 10;
pub const RANK_J: u8 = 11;
pub const RANK_Q: u8 = 12;
pub const RANK_K: u8 = 13;
pub const RANK_A: u8 = 14;

/// Rank characters indexed by `rank - 2`, for display.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// One of the four suits.
///
/// The server encodes suits as uppercase letters (`S`, `H`, `D`, `C`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits, in server order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Parse a suit character, case-insensitively.
    ///
    /// Unknown characters map to `Spades`, the documented degenerate
    /// default for malformed tokens.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    /// Suit character for display.
    pub fn as_char(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Suit index 0-3, for counting arrays.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Rank 2-14 (2 through ace).
    pub rank: u8,
    /// Suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from rank (2-14) and suit.
    #[inline]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((RANK_MIN..=RANK_A).contains(&rank), "rank must be 2-14");
        Self { rank, suit }
    }

    /// Parse a two-character token like "AS", "Kh" or "2c".
    ///
    /// This function is total: an empty token, an unrecognized rank
    /// character or a missing suit character never error. Garbage degrades
    /// to rank 2 and/or `Suit::Spades` instead.
    pub fn parse(token: &str) -> Self {
        let mut chars = token.chars();
        let rank = match chars.next() {
            Some(c) => rank_from_char(c),
            None => RANK_MIN,
        };
        let suit = match chars.next() {
            Some(c) => Suit::from_char(c),
            None => Suit::Spades,
        };
        Self { rank, suit }
    }

    /// Parse a list of tokens into cards, preserving order.
    pub fn parse_all(tokens: &[String]) -> Vec<Card> {
        tokens.iter().map(|t| Card::parse(t)).collect()
    }

    /// Rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[(self.rank - RANK_MIN) as usize]
    }
}

/// Map a rank character to its numeric value; unrecognized characters
/// degrade to 2.
fn rank_from_char(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        '2'..='9' => c as u8 - b'0',
        'T' => RANK_T,
        'J' => RANK_J,
        'Q' => RANK_Q,
        'K' => RANK_K,
        'A' => RANK_A,
        _ => RANK_MIN,
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.as_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A deck of 52 playing cards.
///
/// Used by the offline battle harness; the live client never deals cards
/// itself.
#[derive(Clone)]
pub struct Deck {
    cards: Vec<Card>,
    /// Index of the next card to deal.
    index: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in RANK_MIN..=RANK_A {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards, index: 0 }
    }

    /// Shuffle the full deck and reset the deal position.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.index = 0;
        self.cards.shuffle(rng);
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.index).copied()?;
        self.index += 1;
        Some(card)
    }

    /// Deal multiple cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(n);
        for _ in 0..n {
            match self.deal() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::parse("AS"), Card::new(RANK_A, Suit::Spades));
        assert_eq!(Card::parse("Kh"), Card::new(RANK_K, Suit::Hearts));
        assert_eq!(Card::parse("Td"), Card::new(RANK_T, Suit::Diamonds));
        assert_eq!(Card::parse("2C"), Card::new(2, Suit::Clubs));
        assert_eq!(Card::parse("9s"), Card::new(9, Suit::Spades));
    }

    #[test]
    fn test_parsing_is_total() {
        // Garbage degrades to rank 2 / spades rather than erroring.
        assert_eq!(Card::parse(""), Card::new(2, Suit::Spades));
        assert_eq!(Card::parse("X"), Card::new(2, Suit::Spades));
        assert_eq!(Card::parse("?!"), Card::new(2, Suit::Spades));
        // Missing suit takes the default.
        assert_eq!(Card::parse("A"), Card::new(RANK_A, Suit::Spades));
        // Extra characters are ignored.
        assert_eq!(Card::parse("AHx"), Card::new(RANK_A, Suit::Hearts));
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["AS", "KH", "QD", "JC", "TS", "2H"] {
            assert_eq!(Card::parse(token).to_string(), token);
        }
    }

    #[test]
    fn test_parse_all() {
        let tokens = vec!["AS".to_string(), "KH".to_string()];
        let cards = Card::parse_all(&tokens);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].rank, RANK_A);
        assert_eq!(cards[1].suit, Suit::Hearts);
    }

    #[test]
    fn test_deck() {
        let mut deck = Deck::new();
        assert_eq!(deck.remaining(), 52);

        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        let cards = deck.deal_n(52);
        assert_eq!(cards.len(), 52);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal().is_none());

        // All 52 cards are distinct.
        let mut seen = std::collections::HashSet::new();
        for card in cards {
            assert!(seen.insert((card.rank, card.suit)));
        }
    }
}
