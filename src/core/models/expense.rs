use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Expense {
    pub id: String,
    pub event: String,
    pub participant: String,
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        event: impl Into<String>,
        participant: impl Into<String>,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Expense {
            id: Uuid::new_v4().to_string(),
            event: event.into(),
            participant: participant.into(),
            category: category.into(),
            amount,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }
}
