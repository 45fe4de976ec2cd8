//! Settlement engine: net balances, creditor/debtor partition, and the
//! greedy two-pointer match that produces a minimal transfer list.

use std::collections::BTreeMap;

use crate::constants::{BALANCE_EPSILON, DEFAULT_EVENT_NAME, MIN_PARTICIPANTS};
use crate::error::SplitError;
use crate::models::{Participant, ParticipantSummary, SettlementResult, Transaction};

/// Working record for the greedy matching pass. Balances are drained toward
/// zero in place; `order` is the participant's position in the input and
/// breaks ties between equal balances so output is reproducible.
#[derive(Clone, Debug)]
struct Balance {
    name: String,
    email: String,
    balance: f64,
    order: usize,
}

/// Round half away from zero at two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute who owes whom, with as few transfers as possible.
///
/// Pure function: each invocation works on its own balance copies, so
/// concurrent calls need no coordination. Fails only when fewer than two
/// participants are supplied; field validation is the caller's job
/// (`Participant::validate`).
pub fn compute_settlement(
    event_name: Option<&str>,
    participants: &[Participant],
) -> Result<SettlementResult, SplitError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(SplitError::TooFewParticipants);
    }

    let total_expense: f64 = participants.iter().map(|p| p.amount_paid).sum();
    // Full precision here; rounding happens only on output values.
    let per_person_share = total_expense / participants.len() as f64;

    let balances: Vec<Balance> = participants
        .iter()
        .enumerate()
        .map(|(order, p)| Balance {
            name: p.name.clone(),
            email: p.email.clone(),
            balance: p.amount_paid - per_person_share,
            order,
        })
        .collect();

    // Largest creditor and largest debtor first. Participants within one
    // cent of even are already settled and stay out of both lists.
    let mut creditors: Vec<Balance> = balances
        .iter()
        .filter(|b| b.balance > BALANCE_EPSILON)
        .cloned()
        .collect();
    creditors.sort_by(|a, b| b.balance.total_cmp(&a.balance).then(a.order.cmp(&b.order)));

    let mut debtors: Vec<Balance> = balances
        .iter()
        .filter(|b| b.balance < -BALANCE_EPSILON)
        .cloned()
        .collect();
    debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance).then(a.order.cmp(&b.order)));

    let mut transactions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    // Total overpayment equals total underpayment, so each step drives at
    // least one side to near-zero and the loop terminates.
    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].balance.min(debtors[j].balance.abs());

        if amount > BALANCE_EPSILON {
            transactions.push(Transaction {
                from_name: debtors[j].name.clone(),
                from_email: debtors[j].email.clone(),
                to_name: creditors[i].name.clone(),
                to_email: creditors[i].email.clone(),
                amount: round_to_cents(amount),
            });
        }

        creditors[i].balance -= amount;
        debtors[j].balance += amount;

        // Both sides advance at once when the amounts match exactly.
        if creditors[i].balance < BALANCE_EPSILON {
            i += 1;
        }
        if debtors[j].balance.abs() < BALANCE_EPSILON {
            j += 1;
        }
    }

    // Every participant gets a summary entry, settled ones included.
    let summary: BTreeMap<String, ParticipantSummary> = participants
        .iter()
        .map(|p| {
            (
                p.email.clone(),
                ParticipantSummary {
                    name: p.name.clone(),
                    amount_paid: p.amount_paid,
                    should_pay: round_to_cents((per_person_share - p.amount_paid).max(0.0)),
                    should_receive: round_to_cents((p.amount_paid - per_person_share).max(0.0)),
                },
            )
        })
        .collect();

    let event_name = match event_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => DEFAULT_EVENT_NAME.to_string(),
    };

    Ok(SettlementResult {
        event_name,
        total_expense: round_to_cents(total_expense),
        per_person_share: round_to_cents(per_person_share),
        transactions,
        summary,
    })
}
