use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::SplitError;
use crate::models::{Event, Message};
use crate::storage::Storage;

pub struct InMemoryStorage {
    events: Mutex<HashMap<String, Event>>,
    names: Mutex<HashMap<String, String>>, // event name -> event id
    messages: Mutex<HashMap<String, Vec<Message>>>, // event id -> ordered messages
    known_senders: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            events: Mutex::new(HashMap::new()),
            names: Mutex::new(HashMap::new()),
            messages: Mutex::new(HashMap::new()),
            known_senders: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_event(&self, event: Event) -> Result<(), SplitError> {
        // For production: use database transactions
        let mut names = self.names.lock().await;
        let mut events = self.events.lock().await;
        names.insert(event.name.clone(), event.id.clone());
        events.insert(event.id.clone(), event);
        Ok(())
    }

    async fn get_event(&self, id: &str) -> Result<Option<Event>, SplitError> {
        Ok(self.events.lock().await.get(id).cloned())
    }

    async fn get_event_by_name(&self, name: &str) -> Result<Option<Event>, SplitError> {
        // For production: use database index on name
        let event_id = self.names.lock().await.get(name).cloned();
        Ok(match event_id {
            Some(id) => self.events.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_message(&self, message: Message) -> Result<(), SplitError> {
        self.messages
            .lock()
            .await
            .entry(message.event_id.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn get_messages(&self, event_id: &str) -> Result<Vec<Message>, SplitError> {
        Ok(self
            .messages
            .lock()
            .await
            .get(event_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_known_senders(
        &self,
        event_id: &str,
        senders: Vec<String>,
    ) -> Result<(), SplitError> {
        self.known_senders
            .lock()
            .await
            .insert(event_id.to_string(), senders);
        Ok(())
    }

    async fn get_known_senders(&self, event_id: &str) -> Result<Vec<String>, SplitError> {
        Ok(self
            .known_senders
            .lock()
            .await
            .get(event_id)
            .cloned()
            .unwrap_or_default())
    }
}
