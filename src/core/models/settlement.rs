use super::balance::Balance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Money that `from` must hand over to `to`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Ordered transfers that settle every balance of one event.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementPlan {
    pub transfers: Vec<Transfer>,
}

impl SettlementPlan {
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transfer> {
        self.transfers.iter()
    }

    /// Balances left once every transfer has been paid: the payer's balance
    /// rises by the amount and the receiver's falls by it.
    pub fn apply(&self, balances: &[Balance]) -> Vec<Balance> {
        let mut settled = balances.to_vec();
        for transfer in &self.transfers {
            for balance in settled.iter_mut() {
                if balance.participant == transfer.from {
                    balance.balance += transfer.amount;
                } else if balance.participant == transfer.to {
                    balance.balance -= transfer.amount;
                }
            }
        }
        settled
    }
}
