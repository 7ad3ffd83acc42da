use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::{constants::TX_VALIDITY_SECS, schemas::Claim};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
    pub address: String,
    pub amount: String,
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_init: Option<String>,
}

/// Wallet-ready transaction request: `{validUntil, messages}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptor {
    pub valid_until: u64,
    pub messages: Vec<TransactionMessage>,
}

fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub fn build_transaction(claim: &Claim) -> TransactionDescriptor {
    build_transaction_at(claim, unix_now_secs())
}

pub fn build_transaction_at(claim: &Claim, now_secs: u64) -> TransactionDescriptor {
    let message = &claim.transfer_message;

    TransactionDescriptor {
        valid_until: now_secs + TX_VALIDITY_SECS,
        messages: vec![TransactionMessage {
            address: message.address.clone(),
            amount: message.amount.clone(),
            payload: message.payload.clone(),
            state_init: message.state_init.clone(),
        }],
    }
}
