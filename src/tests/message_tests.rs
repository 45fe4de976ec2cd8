use super::create_test_service;
use crate::constants::MAX_MESSAGE_LEN;
use crate::error::SplitError;

#[tokio::test]
async fn test_post_and_list_messages_in_order() {
    let service = create_test_service();

    let first = service
        .post_message("evt_1", "Alice", "hello", None)
        .await
        .unwrap();
    let second = service
        .post_message("evt_1", "Bob", "hi there", None)
        .await
        .unwrap();

    assert!(first.id.starts_with("msg_"));
    let messages = service.list_messages("evt_1").await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, first.id);
    assert_eq!(messages[1].id, second.id);

    // Other events see nothing.
    assert!(service.list_messages("evt_2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_post_message_trims_fields() {
    let service = create_test_service();

    let message = service
        .post_message("evt_1", "  Alice  ", "  hi  ", None)
        .await
        .unwrap();
    assert_eq!(message.sender_name, "Alice");
    assert_eq!(message.text, "hi");
}

#[tokio::test]
async fn test_post_message_requires_fields() {
    let service = create_test_service();

    assert!(matches!(
        service.post_message("evt_1", "  ", "hello", None).await,
        Err(SplitError::MissingMessageFields)
    ));
    assert!(matches!(
        service.post_message("evt_1", "Alice", "", None).await,
        Err(SplitError::MissingMessageFields)
    ));
    assert!(matches!(
        service.post_message("", "Alice", "hello", None).await,
        Err(SplitError::MissingMessageFields)
    ));
}

#[tokio::test]
async fn test_post_message_length_limit() {
    let service = create_test_service();

    let long_text = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert!(matches!(
        service.post_message("evt_1", "Alice", &long_text, None).await,
        Err(SplitError::MessageTooLong(_))
    ));

    // Exactly at the limit is fine.
    let max_text = "x".repeat(MAX_MESSAGE_LEN);
    assert!(
        service
            .post_message("evt_1", "Alice", &max_text, None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_message_length_counts_characters_not_bytes() {
    let service = create_test_service();

    // 600 Hebrew characters are 1200 UTF-8 bytes but well under the limit.
    let hebrew = "\u{05D0}".repeat(600);
    assert!(
        service
            .post_message("evt_1", "Alice", &hebrew, None)
            .await
            .is_ok()
    );

    let max_hebrew = "\u{05D0}".repeat(MAX_MESSAGE_LEN);
    assert!(
        service
            .post_message("evt_1", "Alice", &max_hebrew, None)
            .await
            .is_ok()
    );

    let over = "\u{05D0}".repeat(MAX_MESSAGE_LEN + 1);
    assert!(matches!(
        service.post_message("evt_1", "Alice", &over, None).await,
        Err(SplitError::MessageTooLong(_))
    ));
}

#[tokio::test]
async fn test_sender_validated_against_known_roster() {
    let service = create_test_service();

    let roster = Some(vec!["Alice".to_string(), "Bob".to_string()]);
    service
        .post_message("evt_1", "Alice", "hello", roster)
        .await
        .unwrap();

    // Roster persists for later posts without one.
    service
        .post_message("evt_1", "Bob", "hi", None)
        .await
        .unwrap();

    let result = service.post_message("evt_1", "Mallory", "let me in", None).await;
    match result {
        Err(SplitError::UnknownSender(allowed)) => {
            assert!(allowed.contains("Alice"));
            assert!(allowed.contains("Bob"));
        }
        other => panic!("expected UnknownSender, got {:?}", other),
    }
}

#[tokio::test]
async fn test_any_sender_allowed_without_roster() {
    let service = create_test_service();

    assert!(
        service
            .post_message("evt_1", "Stranger", "anyone here?", None)
            .await
            .is_ok()
    );
}
