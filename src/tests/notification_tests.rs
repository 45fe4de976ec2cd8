use super::{create_test_service, participant};
use crate::constants::NOTIFICATION_SUBJECT;
use crate::notify::render_notifications;
use crate::settlement::compute_settlement;

#[test]
fn test_payer_and_receiver_bodies() {
    let participants = vec![
        participant("A", "a@example.com", 100.0),
        participant("B", "b@example.com", 0.0),
    ];
    let settlement = compute_settlement(Some("Dinner"), &participants).unwrap();
    let notifications = render_notifications(&settlement);

    assert_eq!(notifications.len(), 2);
    // BTreeMap summary: notifications come out in email order.
    let receiver = &notifications[0];
    let payer = &notifications[1];

    assert_eq!(payer.email, "b@example.com");
    assert_eq!(payer.subject, NOTIFICATION_SUBJECT);
    assert!(payer.text_body.starts_with("Hi B,"));
    assert!(payer.text_body.contains("Total Event Expense: $100.00"));
    assert!(payer.text_body.contains("Your Share: $50.00"));
    assert!(payer.text_body.contains("You need to pay a total of $50.00"));
    assert!(payer.text_body.contains("Pay $50.00 to A (a@example.com)"));

    assert_eq!(receiver.email, "a@example.com");
    assert!(receiver.text_body.contains("You should receive a total of $50.00"));
    assert!(receiver.text_body.contains("Receive $50.00 from B (b@example.com)"));
}

#[test]
fn test_settled_participant_body() {
    let participants = vec![
        participant("A", "a@example.com", 50.0),
        participant("B", "b@example.com", 50.0),
    ];
    let settlement = compute_settlement(None, &participants).unwrap();
    let notifications = render_notifications(&settlement);

    for notification in &notifications {
        assert!(notification.text_body.contains("You're all settled up!"));
        assert!(!notification.text_body.contains("Pay $"));
    }
}

#[test]
fn test_html_body_rendering() {
    let participants = vec![
        participant("A <host>", "a@example.com", 60.0),
        participant("B", "b@example.com", 0.0),
    ];
    let settlement = compute_settlement(None, &participants).unwrap();
    let notifications = render_notifications(&settlement);

    let payer = notifications
        .iter()
        .find(|n| n.email == "b@example.com")
        .unwrap();
    assert!(payer.html_body.starts_with("<html><body>"));
    assert!(payer.html_body.contains("Pay $30.00 to A &lt;host&gt;"));

    let receiver = notifications
        .iter()
        .find(|n| n.email == "a@example.com")
        .unwrap();
    assert!(receiver.html_body.contains("Hi A &lt;host&gt;,"));
    assert!(receiver.html_body.contains("<strong>$30.00</strong>"));
}

#[test]
fn test_service_prepares_notifications() {
    let service = create_test_service();
    let participants = vec![
        participant("A", "a@example.com", 90.0),
        participant("B", "b@example.com", 30.0),
        participant("C", "c@example.com", 0.0),
    ];
    let settlement = service.calculate_settlement(None, &participants).unwrap();
    let notifications = service.prepare_notifications(&settlement);

    assert_eq!(notifications.len(), 3);
    let c = notifications
        .iter()
        .find(|n| n.email == "c@example.com")
        .unwrap();
    assert!(c.text_body.contains("Pay $40.00 to A"));
}
