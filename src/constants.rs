/// Tolerance for treating a balance as settled. One cent; must match the
/// rounding granularity in `settlement::round_to_cents`.
pub const BALANCE_EPSILON: f64 = 0.01;

/// A settlement needs at least two participants.
pub const MIN_PARTICIPANTS: usize = 2;

/// Minimum length of an event password.
pub const MIN_PASSWORD_LEN: usize = 3;

/// Maximum length of a chat message.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Label used when the caller supplies no event name.
pub const DEFAULT_EVENT_NAME: &str = "Shared Expense";

/// Subject line for settlement summary emails.
pub const NOTIFICATION_SUBJECT: &str = "Your Expense Settlement Summary";
