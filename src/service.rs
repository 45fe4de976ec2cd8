use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::{MAX_MESSAGE_LEN, MIN_PASSWORD_LEN};
use crate::error::SplitError;
use crate::models::{Event, Expense, Message, Participant, SettlementResult};
use crate::notify::{self, EmailNotification};
use crate::settlement::compute_settlement;
use crate::storage::Storage;

/// Orchestration layer over the injected store: event lifecycle, chat, and
/// the settlement/notification entry points the API handlers call.
pub struct EventService<S: Storage> {
    storage: S,
}

impl<S: Storage> EventService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing EventService");
        EventService { storage }
    }

    // EVENT LIFECYCLE

    pub async fn create_event(&self, name: &str, password: &str) -> Result<Event, SplitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::MissingEventName);
        }
        let password = password.trim();
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SplitError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.storage.get_event_by_name(name).await?.is_some() {
            warn!("Event name '{}' already taken", name);
            return Err(SplitError::EventNameTaken(name.to_string()));
        }

        let event = Event {
            id: format!("evt_{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            password_hash: Self::hash_password(password),
            created_at: Utc::now(),
            participants: Vec::new(),
            expenses: Vec::new(),
        };
        self.storage.save_event(event.clone()).await?;

        info!("Event '{}' created with ID: {}", event.name, event.id);
        Ok(event)
    }

    pub async fn join_event(&self, name: &str, password: &str) -> Result<Event, SplitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::MissingEventName);
        }
        // Same password rule as create, checked before the lookup so a short
        // password reads as bad input rather than a failed authentication.
        let password = password.trim();
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SplitError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        let event = self
            .storage
            .get_event_by_name(name)
            .await?
            .ok_or_else(|| SplitError::EventNotFound(name.to_string()))?;

        if event.password_hash != Self::hash_password(password) {
            warn!("Wrong password for event '{}'", name);
            return Err(SplitError::WrongPassword);
        }

        debug!("Join accepted for event {}", event.id);
        Ok(event)
    }

    pub async fn event_exists(&self, name: &str) -> Result<bool, SplitError> {
        if name.trim().is_empty() {
            return Err(SplitError::MissingEventName);
        }
        Ok(self.storage.get_event_by_name(name.trim()).await?.is_some())
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, SplitError> {
        self.storage
            .get_event(id)
            .await?
            .ok_or_else(|| SplitError::EventNotFound(id.to_string()))
    }

    /// Replace the participant roster and/or expense list. Fields left as
    /// `None` keep their stored value.
    pub async fn update_event(
        &self,
        id: &str,
        participants: Option<Vec<Participant>>,
        expenses: Option<Vec<Expense>>,
    ) -> Result<Event, SplitError> {
        let mut event = self.get_event(id).await?;

        if let Some(participants) = participants {
            event.participants = participants;
        }
        if let Some(expenses) = expenses {
            event.expenses = expenses;
        }
        self.storage.save_event(event.clone()).await?;

        debug!("Event {} updated", event.id);
        Ok(event)
    }

    // CHAT

    pub async fn post_message(
        &self,
        event_id: &str,
        sender_name: &str,
        text: &str,
        participants: Option<Vec<String>>,
    ) -> Result<Message, SplitError> {
        let sender_name = sender_name.trim();
        let text = text.trim();
        if event_id.is_empty() || sender_name.is_empty() || text.is_empty() {
            return Err(SplitError::MissingMessageFields);
        }
        // Limit counts characters, not bytes; chat text is often non-ASCII.
        if text.chars().count() > MAX_MESSAGE_LEN {
            return Err(SplitError::MessageTooLong(MAX_MESSAGE_LEN));
        }

        // A supplied roster refreshes the known-senders list before the
        // sender check runs against it.
        if let Some(participants) = participants {
            self.storage
                .save_known_senders(event_id, participants)
                .await?;
        }
        let known = self.storage.get_known_senders(event_id).await?;
        if !known.is_empty() && !known.iter().any(|p| p == sender_name) {
            warn!("Unknown chat sender '{}' in event {}", sender_name, event_id);
            return Err(SplitError::UnknownSender(known.join(", ")));
        }

        let message = Message {
            id: format!("msg_{}", Uuid::new_v4().simple()),
            event_id: event_id.to_string(),
            sender_name: sender_name.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.storage.save_message(message.clone()).await?;

        debug!("Message {} posted in event {}", message.id, event_id);
        Ok(message)
    }

    pub async fn list_messages(&self, event_id: &str) -> Result<Vec<Message>, SplitError> {
        self.storage.get_messages(event_id).await
    }

    // SETTLEMENT

    /// Validate participant fields and run the settlement engine.
    pub fn calculate_settlement(
        &self,
        event_name: Option<&str>,
        participants: &[Participant],
    ) -> Result<SettlementResult, SplitError> {
        for participant in participants {
            participant.validate()?;
        }
        let result = compute_settlement(event_name, participants)?;
        info!(
            "Settlement for '{}': {} participants, {} transactions, total {:.2}",
            result.event_name,
            participants.len(),
            result.transactions.len(),
            result.total_expense
        );
        Ok(result)
    }

    /// Render notification bodies and log them in place of actual delivery;
    /// email transport is out of scope.
    pub fn prepare_notifications(&self, settlement: &SettlementResult) -> Vec<EmailNotification> {
        let notifications = notify::render_notifications(settlement);
        for notification in &notifications {
            info!(
                "Prepared notification for {}: {}",
                notification.email, notification.subject
            );
            debug!("\n{}", notification.text_body);
        }
        notifications
    }

    fn hash_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}
