use crate::participant::ParticipantId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The id names the dealer or an unoccupied seat.
    #[error("invalid participant id: {0}")]
    InvalidParticipant(ParticipantId),

    #[error("player count must be between 1 and 7, got {0}")]
    InvalidPlayerCount(usize),

    #[error("deck count must be at least 1, got {0}")]
    InvalidDeckCount(usize),
}
