use crate::core::errors::AsadoError;
use crate::core::models::{Event, Expense};
use async_trait::async_trait;

/// Persistence for events and everything recorded under them.
///
/// Implementations own uniqueness and referential integrity: names are unique
/// per scope, expenses must point at an existing participant of their event,
/// and deleting an event or participant removes what hangs off it.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_event(&self, event: Event) -> Result<Event, AsadoError>;
    async fn get_event(&self, name: &str) -> Result<Option<Event>, AsadoError>;
    async fn list_events(&self) -> Result<Vec<Event>, AsadoError>;
    async fn delete_event(&self, name: &str) -> Result<bool, AsadoError>;

    async fn add_participant(&self, event: &str, participant: &str) -> Result<(), AsadoError>;
    async fn list_participants(&self, event: &str) -> Result<Vec<String>, AsadoError>;
    async fn remove_participant(&self, event: &str, participant: &str) -> Result<bool, AsadoError>;

    async fn save_expense(&self, expense: Expense) -> Result<Expense, AsadoError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, AsadoError>;
    async fn list_expenses(&self, event: &str) -> Result<Vec<Expense>, AsadoError>;
    async fn delete_expense(&self, expense_id: &str) -> Result<bool, AsadoError>;

    async fn list_custom_categories(&self) -> Result<Vec<String>, AsadoError>;
    async fn add_custom_category(&self, name: &str) -> Result<(), AsadoError>;
    async fn remove_custom_category(&self, name: &str) -> Result<bool, AsadoError>;
}

pub mod in_memory;
pub mod retry;
