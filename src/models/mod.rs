pub mod event;
pub mod message;
pub mod participant;
pub mod settlement;

pub use event::{Event, Expense};
pub use message::Message;
pub use participant::{Participant, is_valid_email};
pub use settlement::{ParticipantSummary, SettlementResult, Transaction};
