use super::{create_test_service, participant};
use crate::error::SplitError;
use crate::models::Expense;
use chrono::Utc;

#[tokio::test]
async fn test_create_event() {
    let service = create_test_service();

    let event = service.create_event("House Party", "secret").await.unwrap();
    assert!(event.id.starts_with("evt_"));
    assert_eq!(event.name, "House Party");
    assert!(event.participants.is_empty());
    assert!(event.expenses.is_empty());
    // The stored hash is a SHA-256 hex digest, never the raw password.
    assert_eq!(event.password_hash.len(), 64);
    assert_ne!(event.password_hash, "secret");
}

#[tokio::test]
async fn test_create_event_rejects_duplicate_name() {
    let service = create_test_service();

    service.create_event("Trip", "abc").await.unwrap();
    let result = service.create_event("Trip", "other").await;
    assert!(matches!(result, Err(SplitError::EventNameTaken(_))));
}

#[tokio::test]
async fn test_create_event_validates_inputs() {
    let service = create_test_service();

    assert!(matches!(
        service.create_event("   ", "abc").await,
        Err(SplitError::MissingEventName)
    ));
    assert!(matches!(
        service.create_event("Trip", "ab").await,
        Err(SplitError::PasswordTooShort(3))
    ));
}

#[tokio::test]
async fn test_join_event() {
    let service = create_test_service();

    let created = service.create_event("Dinner", "pass123").await.unwrap();
    let joined = service.join_event("Dinner", "pass123").await.unwrap();
    assert_eq!(joined.id, created.id);

    assert!(matches!(
        service.join_event("Dinner", "wrong").await,
        Err(SplitError::WrongPassword)
    ));
    assert!(matches!(
        service.join_event("Nowhere", "pass123").await,
        Err(SplitError::EventNotFound(_))
    ));
}

#[tokio::test]
async fn test_join_rejects_short_password_as_bad_input() {
    let service = create_test_service();

    service.create_event("Dinner", "pass123").await.unwrap();
    // A too-short password is invalid input, not a wrong credential, even
    // when the event exists.
    assert!(matches!(
        service.join_event("Dinner", "ab").await,
        Err(SplitError::PasswordTooShort(3))
    ));
    // And checked before the lookup, so unknown events report it the same way.
    assert!(matches!(
        service.join_event("Nowhere", "ab").await,
        Err(SplitError::PasswordTooShort(3))
    ));
}

#[tokio::test]
async fn test_join_trims_name_and_password() {
    let service = create_test_service();

    service.create_event("  Padded  ", " pw1 ").await.unwrap();
    let joined = service.join_event("Padded", "pw1").await.unwrap();
    assert_eq!(joined.name, "Padded");
}

#[tokio::test]
async fn test_event_exists() {
    let service = create_test_service();

    service.create_event("Picnic", "abc").await.unwrap();
    assert!(service.event_exists("Picnic").await.unwrap());
    assert!(!service.event_exists("Ghost").await.unwrap());
    assert!(matches!(
        service.event_exists("  ").await,
        Err(SplitError::MissingEventName)
    ));
}

#[tokio::test]
async fn test_update_event_roster_and_expenses() {
    let service = create_test_service();

    let event = service.create_event("BBQ", "abc").await.unwrap();

    let roster = vec![
        participant("Alice", "alice@example.com", 40.0),
        participant("Bob", "bob@example.com", 0.0),
    ];
    let updated = service
        .update_event(&event.id, Some(roster.clone()), None)
        .await
        .unwrap();
    assert_eq!(updated.participants.len(), 2);
    assert!(updated.expenses.is_empty());

    let expenses = vec![Expense {
        id: "exp_1".to_string(),
        description: "Charcoal".to_string(),
        amount: 15.0,
        paid_by: "alice@example.com".to_string(),
        created_at: Utc::now(),
    }];
    let updated = service
        .update_event(&event.id, None, Some(expenses))
        .await
        .unwrap();
    // Participants were left as None and must survive the expense update.
    assert_eq!(updated.participants.len(), 2);
    assert_eq!(updated.expenses.len(), 1);

    let fetched = service.get_event(&event.id).await.unwrap();
    assert_eq!(fetched.participants.len(), 2);
    assert_eq!(fetched.expenses[0].description, "Charcoal");
}

#[tokio::test]
async fn test_get_event_unknown_id() {
    let service = create_test_service();
    assert!(matches!(
        service.get_event("evt_missing").await,
        Err(SplitError::EventNotFound(_))
    ));
}
