use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::SplitError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Syntactic email check used by participant validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// One participant's contribution toward the shared total. The email is the
/// key for settlement summary lookups; callers must keep it unique.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub amount_paid: f64,
}

impl Participant {
    /// Field-level validation. The settlement engine itself only checks the
    /// participant count, so callers run this before handing participants in.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.name.trim().is_empty() {
            return Err(SplitError::MissingParticipantName);
        }
        if !is_valid_email(&self.email) {
            return Err(SplitError::InvalidEmail(self.email.clone()));
        }
        if !self.amount_paid.is_finite() || self.amount_paid < 0.0 {
            return Err(SplitError::InvalidAmount(self.email.clone()));
        }
        Ok(())
    }
}
