use crate::card::Card;
use serde::{Deserialize, Serialize};

/// An ordered, append-only blackjack hand.
///
/// The hard total (every ace worth 1) is maintained incrementally as
/// cards arrive. The soft total promotes a single held ace to 11; only
/// one ace can ever be promoted without busting, so `hard + 10` covers
/// every multi-ace hand as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    hard_total: u16,
    aces: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.hard_total += card.hard_value();
        if card.is_ace() {
            self.aces += 1;
        }
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.hard_total = 0;
        self.aces = 0;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hard_total(&self) -> u16 {
        self.hard_total
    }

    pub fn soft_total(&self) -> u16 {
        if self.aces > 0 {
            self.hard_total + 10
        } else {
            self.hard_total
        }
    }

    /// The hand's best blackjack total.
    ///
    /// Both sums busted: return the hard total (magnitude only matters as
    /// "over 21"). Both legal: 21 if either sum hits it, otherwise the
    /// larger. Exactly one legal: the legal one.
    pub fn score(&self) -> u16 {
        let hard = self.hard_total();
        let soft = self.soft_total();
        if hard > 21 && soft > 21 {
            hard
        } else if hard <= 21 && soft <= 21 {
            if hard == 21 || soft == 21 {
                21
            } else {
                hard.max(soft)
            }
        } else if hard <= 21 {
            hard
        } else {
            soft
        }
    }

    /// A natural: two cards dealt straight to 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }
}
