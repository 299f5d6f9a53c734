use axum::{Json, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::AsadoError;
use crate::core::models::{Balance, EventSummary, Standing};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddParticipantRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub participant: String,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddCategoryRequest {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    pub name: String,
}

/// A balance as the summary page shows it: the absolute amount plus whether
/// the participant should receive, pay, or is settled.
#[derive(Serialize, ToSchema, Debug, PartialEq, Eq)]
pub struct BalanceView {
    pub participant: String,
    pub paid: Decimal,
    pub balance: Decimal,
    pub amount: Decimal,
    pub standing: Standing,
}

impl BalanceView {
    pub fn from_balance(balance: &Balance, epsilon: Decimal) -> Self {
        BalanceView {
            participant: balance.participant.clone(),
            paid: balance.paid,
            balance: balance.balance,
            amount: balance.balance.abs(),
            standing: balance.standing(epsilon),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Ready,
    Empty,
}

#[derive(Serialize, ToSchema)]
pub struct SummaryResponse {
    pub status: SummaryStatus,
    /// Set when there is nothing to summarize yet
    pub message: Option<String>,
    pub summary: Option<EventSummary>,
    pub standings: Vec<BalanceView>,
}

impl SummaryResponse {
    pub fn ready(summary: EventSummary, epsilon: Decimal) -> Self {
        let standings = summary
            .balances
            .iter()
            .map(|b| BalanceView::from_balance(b, epsilon))
            .collect();
        SummaryResponse {
            status: SummaryStatus::Ready,
            message: None,
            summary: Some(summary),
            standings,
        }
    }

    pub fn empty(reason: &AsadoError) -> Self {
        let message = match reason {
            AsadoError::NoParticipants => "Add participants to this event to see a summary",
            _ => "No expenses recorded yet",
        };
        SummaryResponse {
            status: SummaryStatus::Empty,
            message: Some(message.to_string()),
            summary: None,
            standings: Vec::new(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ChartsResponse {
    #[schema(value_type = Object)]
    pub category: serde_json::Value,
    #[schema(value_type = Object)]
    pub participant: serde_json::Value,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for AsadoError to implement IntoResponse
pub struct ApiError(pub AsadoError);

impl From<AsadoError> for ApiError {
    fn from(err: AsadoError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            AsadoError::NoParticipants | AsadoError::NoExpenses => StatusCode::UNPROCESSABLE_ENTITY,
            AsadoError::InvalidAmount(_) | AsadoError::InvalidInput(_, _) => StatusCode::BAD_REQUEST,
            AsadoError::EventNotFound(_)
            | AsadoError::ParticipantNotFound(_)
            | AsadoError::ExpenseNotFound(_)
            | AsadoError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            AsadoError::EventAlreadyExists(_)
            | AsadoError::ParticipantAlreadyExists(_)
            | AsadoError::CategoryAlreadyExists(_) => StatusCode::CONFLICT,
            AsadoError::StorageError(_)
            | AsadoError::LoggingError(_)
            | AsadoError::CacheError(_)
            | AsadoError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            AsadoError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
