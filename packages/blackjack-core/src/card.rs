use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }
}

/// A single playing card. Rank 1 is the ace, 11/12/13 are jack, queen
/// and king; every 10-or-above rank counts as ten toward a hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((1..=13).contains(&rank), "rank out of range: {}", rank);
        Self { rank, suit }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Contribution to the hard hand total (ace counts as 1).
    pub fn hard_value(&self) -> u16 {
        if self.rank >= 10 {
            10
        } else {
            self.rank as u16
        }
    }

    /// Contribution to the soft hand total (ace counts as 11).
    pub fn soft_value(&self) -> u16 {
        if self.is_ace() {
            11
        } else {
            self.hard_value()
        }
    }

    pub fn label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }

    /// Image key used by rendering clients, e.g. "A-hearts" or "10-spades".
    pub fn asset_key(&self) -> String {
        format!("{}-{}", self.label(), self.suit.name())
    }

    pub fn to_display(&self) -> String {
        format!("{}{}", self.label(), self.suit.glyph())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display())
    }
}
