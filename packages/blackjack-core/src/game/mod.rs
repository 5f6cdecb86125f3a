use crate::error::GameError;
use crate::event::{GameEvent, Outcome};
use crate::participant::{Participant, ParticipantId};
use crate::shoe::Shoe;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seat index of the dealer.
pub const DEALER: ParticipantId = 0;

const MAX_PLAYERS: usize = 7;
const DEALER_STAND_TOTAL: u16 = 17;

/// Current phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// The round controller.
///
/// Owns the shoe, the participants (seat 0 is the dealer) and the event
/// queue; all mutation happens inside its command methods, one call at a
/// time. Participants persist across rounds so their win counters act as
/// a session scoreboard, while `reset_round` replaces the shoe and the
/// hands wholesale.
#[derive(Debug)]
pub struct Game {
    pub shoe: Shoe,
    pub participants: Vec<Participant>,
    pub phase: Phase,
    pub winner: Option<ParticipantId>,
    pub push: bool,
    deck_count: usize,
    rng: ChaCha8Rng,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(player_count: usize, deck_count: usize) -> Result<Self, GameError> {
        Self::from_rng(player_count, deck_count, ChaCha8Rng::from_entropy())
    }

    /// Reproducible variant for tests and replays.
    pub fn with_seed(player_count: usize, deck_count: usize, seed: u64) -> Result<Self, GameError> {
        Self::from_rng(player_count, deck_count, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(
        player_count: usize,
        deck_count: usize,
        rng: ChaCha8Rng,
    ) -> Result<Self, GameError> {
        if player_count == 0 || player_count > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(player_count));
        }
        if deck_count == 0 {
            return Err(GameError::InvalidDeckCount(deck_count));
        }
        let mut participants = Vec::with_capacity(player_count + 1);
        participants.push(Participant::dealer(DEALER));
        for id in 1..=player_count {
            participants.push(Participant::player(id));
        }
        Ok(Self {
            shoe: Shoe::new(deck_count),
            participants,
            phase: Phase::Dealing,
            winner: None,
            push: false,
            deck_count,
            rng,
            events: Vec::new(),
        })
    }

    /// Deals the opening two cards, dealer first on each pass, then
    /// checks for naturals. No-op outside the dealing phase.
    pub fn deal(&mut self) {
        if self.phase != Phase::Dealing {
            return;
        }
        self.push_event(GameEvent::ControlsChanged {
            show_actions: true,
            show_reset: false,
            reveal_dealer: false,
        });
        for _ in 0..2 {
            for id in 0..self.participants.len() {
                self.deal_card(id);
            }
        }
        log::info!(
            "round dealt, {} cards left in the shoe",
            self.shoe.remaining()
        );
        self.evaluate_initial();
    }

    /// Draws one card for `player`, then one for the dealer if its total
    /// is still below 17. A bust hands the round to the dealer.
    ///
    /// Silently does nothing when the shoe is exhausted or the round is
    /// not in the player-turn phase; unknown or dealer ids are rejected.
    pub fn hit(&mut self, player: ParticipantId) -> Result<(), GameError> {
        self.expect_player(player)?;
        if self.phase != Phase::PlayerTurn || !self.participants[player].in_play {
            return Ok(());
        }
        if self.shoe.is_empty() {
            log::debug!("hit ignored, shoe is exhausted");
            return Ok(());
        }
        self.deal_card(player);
        if self.participants[DEALER].score() < DEALER_STAND_TOTAL && !self.shoe.is_empty() {
            self.deal_card(DEALER);
        }
        if self.participants[player].score() > 21 {
            self.dealer_takes_round();
        }
        Ok(())
    }

    /// Ends `player`'s turn, runs the dealer's draw-to-17 script and
    /// settles the round.
    pub fn stand(&mut self, player: ParticipantId) -> Result<(), GameError> {
        self.expect_player(player)?;
        if self.phase != Phase::PlayerTurn || !self.participants[player].in_play {
            return Ok(());
        }
        self.participants[player].in_play = false;
        self.phase = Phase::DealerTurn;
        while self.participants[DEALER].score() < DEALER_STAND_TOTAL && !self.shoe.is_empty() {
            self.deal_card(DEALER);
        }
        self.showdown(player);
        Ok(())
    }

    /// Starts a fresh round: new shoe of the same deck count, cleared
    /// hands, restored controls, immediate re-deal. Scoreboards persist.
    pub fn reset_round(&mut self) {
        self.shoe = Shoe::new(self.deck_count);
        for participant in &mut self.participants {
            participant.reset_for_round();
        }
        self.winner = None;
        self.push = false;
        self.phase = Phase::Dealing;
        self.deal();
    }

    /// Takes all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn score_of(&self, id: ParticipantId) -> Option<u16> {
        self.participants.get(id).map(|p| p.score())
    }

    fn expect_player(&self, id: ParticipantId) -> Result<(), GameError> {
        if id == DEALER || id >= self.participants.len() {
            return Err(GameError::InvalidParticipant(id));
        }
        Ok(())
    }

    fn deal_card(&mut self, id: ParticipantId) {
        let card = self.shoe.draw(&mut self.rng);
        self.participants[id].hand.push(card);
        let score = self.participants[id].score();
        log::debug!("participant {} drew {}, total {}", id, card, score);
        self.push_event(GameEvent::CardDealt {
            participant: id,
            card,
        });
        self.push_event(GameEvent::ScoreChanged {
            participant: id,
            score,
        });
    }

    /// Natural check right after the opening deal: a two-card 21 against
    /// a dealer without 21 pays double and ends the round on the spot.
    fn evaluate_initial(&mut self) {
        if self.participants[DEALER].score() != 21 {
            let naturals: Vec<ParticipantId> = self.participants[1..]
                .iter()
                .filter(|p| p.hand.is_natural())
                .map(|p| p.id)
                .collect();
            if !naturals.is_empty() {
                for &id in &naturals {
                    self.credit(id, true);
                    self.participants[id].in_play = false;
                }
                self.finish(Some(naturals[0]), Outcome::PlayerWin, 2);
                return;
            }
        }
        self.phase = Phase::PlayerTurn;
    }

    /// Settles the acting player's total against the dealer's.
    fn showdown(&mut self, player: ParticipantId) {
        let p = self.participants[player].score();
        let d = self.participants[DEALER].score();
        if p == 21 && d != 21 {
            self.credit(player, true);
            self.finish(Some(player), Outcome::PlayerWin, 2);
        } else if p < 21 && d > 21 {
            self.credit(player, false);
            self.finish(Some(player), Outcome::PlayerWin, 1);
        } else if p < 21 && d < 21 {
            if p > d {
                self.credit(player, false);
                self.finish(Some(player), Outcome::PlayerWin, 1);
            } else {
                // Equal totals included: the house takes ties here.
                self.dealer_takes_round();
            }
        } else if p > 21 {
            self.dealer_takes_round();
        } else if p == 21 && d == 21 {
            self.push = true;
            self.finish(None, Outcome::Push, 0);
        } else {
            // p < 21 against a dealer sitting on exactly 21: the round
            // ends with no payout on either side.
            self.finish(Some(DEALER), Outcome::DealerWin, 0);
        }
    }

    fn dealer_takes_round(&mut self) {
        let is_double = self.participants[DEALER].hand.len() == 2;
        self.credit(DEALER, is_double);
        self.finish(
            Some(DEALER),
            Outcome::DealerWin,
            if is_double { 2 } else { 1 },
        );
    }

    fn credit(&mut self, id: ParticipantId, is_double: bool) {
        self.participants[id].win(is_double);
        let wins = self.participants[id].wins;
        self.push_event(GameEvent::ScoreboardChanged {
            participant: id,
            wins,
        });
    }

    fn finish(&mut self, winner: Option<ParticipantId>, outcome: Outcome, payout: u8) {
        self.winner = winner;
        self.phase = Phase::Resolved;
        log::info!("round resolved: {:?} (payout {}x)", outcome, payout);
        self.push_event(GameEvent::RoundResolved { outcome, payout });
        self.push_event(GameEvent::ControlsChanged {
            show_actions: false,
            show_reset: true,
            reveal_dealer: true,
        });
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests;
