use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single payment in the minimal transfer list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub from_name: String,
    pub from_email: String,
    pub to_name: String,
    pub to_email: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantSummary {
    pub name: String,
    pub amount_paid: f64,
    pub should_pay: f64,
    pub should_receive: f64,
}

/// Output of the settlement engine. The summary is keyed by participant
/// email; a BTreeMap keeps serialization order stable so identical inputs
/// produce identical JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettlementResult {
    pub event_name: String,
    pub total_expense: f64,
    pub per_person_share: f64,
    pub transactions: Vec<Transaction>,
    pub summary: BTreeMap<String, ParticipantSummary>,
}
