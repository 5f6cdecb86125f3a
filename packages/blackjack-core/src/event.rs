use crate::card::Card;
use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    /// Both sides stood on exactly 21; nobody is paid.
    Push,
}

/// Notifications for the rendering client, drained from the game in the
/// order they occurred. The engine never touches a screen itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card landed in a participant's hand.
    CardDealt {
        participant: ParticipantId,
        card: Card,
    },
    /// A participant's hand total changed.
    ScoreChanged {
        participant: ParticipantId,
        score: u16,
    },
    /// A participant's session win counter changed.
    ScoreboardChanged {
        participant: ParticipantId,
        wins: u32,
    },
    /// The round is over. `payout` is the multiplier credited to the
    /// winner's scoreboard (0 on a push).
    RoundResolved { outcome: Outcome, payout: u8 },
    /// Visibility directive for the client's controls and for the
    /// dealer's hole card.
    ControlsChanged {
        show_actions: bool,
        show_reset: bool,
        reveal_dealer: bool,
    },
}
