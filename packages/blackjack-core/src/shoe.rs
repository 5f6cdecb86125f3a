use crate::card::{Card, Suit};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A multi-deck shoe.
///
/// Each suit keeps its own pile of remaining ranks. Draws pick a suit
/// uniformly among the suits that still have cards, then a uniform index
/// within that suit's pile; a suit whose pile empties leaves the
/// selectable set. Suit selection is therefore uniform only among the
/// suits surviving at draw time, not across the whole shoe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    piles: [Vec<u8>; 4],
    live_suits: Vec<Suit>,
    remaining: usize,
    card_total: usize,
}

impl Shoe {
    /// Builds a shoe of `deck_count` 52-card decks. Every suit owns an
    /// independent pile with `deck_count` copies of ranks 1..=13.
    pub fn new(deck_count: usize) -> Self {
        let seed_pile = || {
            let mut pile = Vec::with_capacity(deck_count * 13);
            for _ in 0..deck_count {
                pile.extend(1..=13u8);
            }
            pile
        };
        let piles = [seed_pile(), seed_pile(), seed_pile(), seed_pile()];
        let card_total = deck_count * 52;
        Self {
            piles,
            live_suits: Suit::ALL.to_vec(),
            remaining: card_total,
            card_total,
        }
    }

    /// Removes and returns a random card.
    ///
    /// Callers must check `remaining() > 0` first; drawing from an empty
    /// shoe is a programming error.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.remaining > 0, "draw from an empty shoe");
        let suit = self.live_suits[rng.gen_range(0..self.live_suits.len())];
        let pile = &mut self.piles[suit_index(suit)];
        let rank = pile.remove(rng.gen_range(0..pile.len()));
        self.remaining -= 1;
        if pile.is_empty() {
            self.live_suits.retain(|s| *s != suit);
        }
        Card::new(rank, suit)
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn card_total(&self) -> usize {
        self.card_total
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Hearts => 0,
        Suit::Clubs => 1,
        Suit::Diamonds => 2,
        Suit::Spades => 3,
    }
}
