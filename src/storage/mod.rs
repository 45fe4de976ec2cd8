use async_trait::async_trait;

use crate::error::SplitError;
use crate::models::{Event, Message};

/// Process-local key-value stores behind the service layer. No durability
/// guarantee: contents live and die with the process. Implementations must
/// be safe to share across request handlers.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_event(&self, event: Event) -> Result<(), SplitError>;
    async fn get_event(&self, id: &str) -> Result<Option<Event>, SplitError>;
    async fn get_event_by_name(&self, name: &str) -> Result<Option<Event>, SplitError>;

    async fn save_message(&self, message: Message) -> Result<(), SplitError>;
    async fn get_messages(&self, event_id: &str) -> Result<Vec<Message>, SplitError>;

    /// Roster of sender names allowed to post in an event's chat.
    async fn save_known_senders(
        &self,
        event_id: &str,
        senders: Vec<String>,
    ) -> Result<(), SplitError>;
    async fn get_known_senders(&self, event_id: &str) -> Result<Vec<String>, SplitError>;
}

pub mod in_memory;
