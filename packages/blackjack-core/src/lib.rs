mod card;
mod error;
mod event;
mod game;
mod hand;
mod participant;
mod shoe;

pub use card::{Card, Suit};
pub use error::GameError;
pub use event::{GameEvent, Outcome};
pub use game::{Game, Phase, DEALER};
pub use hand::Hand;
pub use participant::{Participant, ParticipantId};
pub use shoe::Shoe;
