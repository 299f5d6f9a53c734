use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net position of one participant: positive means they are owed money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Balance {
    pub participant: String,
    pub paid: Decimal,
    pub balance: Decimal,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Standing {
    /// Paid more than the fair share, should receive money
    Creditor,
    /// Paid less than the fair share, should pay
    Debtor,
    AtPar,
}

impl Balance {
    pub fn standing(&self, epsilon: Decimal) -> Standing {
        if self.balance > epsilon {
            Standing::Creditor
        } else if self.balance < -epsilon {
            Standing::Debtor
        } else {
            Standing::AtPar
        }
    }
}

/// Output of the balance computation, in participant enumeration order.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct BalanceSheet {
    pub total: Decimal,
    pub fair_share: Decimal,
    pub balances: Vec<Balance>,
}

impl BalanceSheet {
    pub fn get(&self, participant: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.participant == participant)
    }
}
