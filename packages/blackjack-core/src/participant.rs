use crate::hand::Hand;
use serde::{Deserialize, Serialize};

pub type ParticipantId = usize;

/// A seat at the table. The dealer is a participant like any other,
/// distinguished only by the `is_dealer` flag: it exposes no
/// player-initiated actions and draws on the controller's script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub is_dealer: bool,
    pub hand: Hand,
    /// Still allowed to act this round.
    pub in_play: bool,
    /// Session scoreboard; survives round resets.
    pub wins: u32,
}

impl Participant {
    pub fn dealer(id: ParticipantId) -> Self {
        Self::new(id, true)
    }

    pub fn player(id: ParticipantId) -> Self {
        Self::new(id, false)
    }

    fn new(id: ParticipantId, is_dealer: bool) -> Self {
        Self {
            id,
            is_dealer,
            hand: Hand::new(),
            in_play: true,
            wins: 0,
        }
    }

    pub fn score(&self) -> u16 {
        self.hand.score()
    }

    /// Credits a round win: 2 points for a double payout, 1 otherwise.
    pub fn win(&mut self, is_double: bool) {
        self.wins += if is_double { 2 } else { 1 };
    }

    /// Clears the hand for a new round. The scoreboard is untouched.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.in_play = true;
    }
}
