//! Notification renderer: turns a settlement result into per-participant
//! email bodies. Presentation only; no settlement logic and no transport.

use crate::constants::NOTIFICATION_SUBJECT;
use crate::models::{ParticipantSummary, SettlementResult, Transaction};

#[derive(Clone, Debug)]
pub struct EmailNotification {
    pub email: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Render one notification per summary entry. Payment and receipt lines are
/// drawn from the transactions naming the participant as `from_email` or
/// `to_email`.
pub fn render_notifications(settlement: &SettlementResult) -> Vec<EmailNotification> {
    settlement
        .summary
        .iter()
        .map(|(email, info)| {
            let payments: Vec<&Transaction> = settlement
                .transactions
                .iter()
                .filter(|t| t.from_email == *email)
                .collect();
            let receipts: Vec<&Transaction> = settlement
                .transactions
                .iter()
                .filter(|t| t.to_email == *email)
                .collect();

            let mut text = format!("Hi {},\n\n", info.name);
            text.push_str("Here's your expense settlement summary:\n\n");
            text.push_str(&format!(
                "Total Event Expense: ${:.2}\n",
                settlement.total_expense
            ));
            text.push_str(&format!("Your Share: ${:.2}\n", settlement.per_person_share));
            text.push_str(&format!("Amount You Paid: ${:.2}\n\n", info.amount_paid));

            if info.should_pay > 0.0 {
                text.push_str(&format!(
                    "You need to pay a total of ${:.2}:\n\n",
                    info.should_pay
                ));
                for payment in &payments {
                    text.push_str(&format!(
                        "\u{2022} Pay ${:.2} to {} ({})\n",
                        payment.amount, payment.to_name, payment.to_email
                    ));
                }
            } else if info.should_receive > 0.0 {
                text.push_str(&format!(
                    "You should receive a total of ${:.2}:\n\n",
                    info.should_receive
                ));
                for receipt in &receipts {
                    text.push_str(&format!(
                        "\u{2022} Receive ${:.2} from {} ({})\n",
                        receipt.amount, receipt.from_name, receipt.from_email
                    ));
                }
            } else {
                text.push_str("You're all settled up! Your payment matches your fair share.\n");
            }

            text.push_str("\nThank you for using Expense Splitter!");

            let html = render_html(settlement, info, &payments, &receipts);

            EmailNotification {
                email: email.clone(),
                subject: NOTIFICATION_SUBJECT.to_string(),
                text_body: text,
                html_body: html,
            }
        })
        .collect()
}

fn render_html(
    settlement: &SettlementResult,
    info: &ParticipantSummary,
    payments: &[&Transaction],
    receipts: &[&Transaction],
) -> String {
    let mut body = format!("<p>Hi {},</p>", escape_html(&info.name));
    body.push_str("<p>Here's your expense settlement summary:</p><ul>");
    body.push_str(&format!(
        "<li>Total Event Expense: ${:.2}</li>",
        settlement.total_expense
    ));
    body.push_str(&format!(
        "<li>Your Share: ${:.2}</li>",
        settlement.per_person_share
    ));
    body.push_str(&format!(
        "<li>Amount You Paid: ${:.2}</li></ul>",
        info.amount_paid
    ));

    if info.should_pay > 0.0 {
        body.push_str(&format!(
            "<p>You need to pay a total of <strong>${:.2}</strong>:</p><ul>",
            info.should_pay
        ));
        for payment in payments {
            body.push_str(&format!(
                "<li>Pay ${:.2} to {} ({})</li>",
                payment.amount,
                escape_html(&payment.to_name),
                escape_html(&payment.to_email)
            ));
        }
        body.push_str("</ul>");
    } else if info.should_receive > 0.0 {
        body.push_str(&format!(
            "<p>You should receive a total of <strong>${:.2}</strong>:</p><ul>",
            info.should_receive
        ));
        for receipt in receipts {
            body.push_str(&format!(
                "<li>Receive ${:.2} from {} ({})</li>",
                receipt.amount,
                escape_html(&receipt.from_name),
                escape_html(&receipt.from_email)
            ));
        }
        body.push_str("</ul>");
    } else {
        body.push_str("<p>You're all settled up! Your payment matches your fair share.</p>");
    }

    body.push_str("<p>Thank you for using Expense Splitter!</p>");

    format!("<html><body>{}</body></html>", body)
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
