mod event_tests;
mod message_tests;
mod notification_tests;

use crate::models::Participant;
use crate::service::EventService;
use crate::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> EventService<InMemoryStorage> {
    EventService::new(InMemoryStorage::new())
}

pub fn participant(name: &str, email: &str, amount_paid: f64) -> Participant {
    Participant {
        name: name.to_string(),
        email: email.to_string(),
        amount_paid,
    }
}
