use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(name: String) -> Self {
        Event {
            name,
            created_at: Utc::now(),
        }
    }
}

/// Event listing row with the sizes shown next to each event.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EventOverview {
    pub name: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    pub participant_count: usize,
    pub expense_count: usize,
}
