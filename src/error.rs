use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum SplitError {
    /// Settlement requested with fewer than two participants
    #[error("At least 2 participants are required")]
    TooFewParticipants,

    /// Event name field is empty
    #[error("Event name is required")]
    MissingEventName,

    /// Event password is shorter than the minimum
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    /// Event name is already in use
    #[error("Event name '{0}' is already taken")]
    EventNameTaken(String),

    /// Event with given id or name not found
    #[error("Event {0} not found")]
    EventNotFound(String),

    /// Password does not match the event's stored hash
    #[error("Wrong password")]
    WrongPassword,

    /// Chat message is missing its sender or text
    #[error("sender_name and text are required")]
    MissingMessageFields,

    /// Chat message exceeds the length limit
    #[error("Message too long (max {0} characters)")]
    MessageTooLong(usize),

    /// Sender is not on the event's known participant list
    #[error("Unknown sender. Allowed participants: {0}")]
    UnknownSender(String),

    /// Participant email does not look like an email address
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Participant name field is empty
    #[error("Participant name is required")]
    MissingParticipantName,

    /// Participant amount is negative or not a finite number
    #[error("Invalid amount paid for {0}")]
    InvalidAmount(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    /// Catch-all for unexpected failures
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
