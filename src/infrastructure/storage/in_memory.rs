use crate::core::errors::AsadoError;
use crate::core::models::{Event, Expense};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps everything in process memory. Participants and expenses are kept in
/// insertion order so repeated reads return identical snapshots.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    events: Arc<RwLock<HashMap<String, Event>>>,
    participants: Arc<RwLock<HashMap<String, Vec<String>>>>,
    expenses: Arc<RwLock<Vec<Expense>>>,
    custom_categories: Arc<RwLock<Vec<String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_event(&self, event: Event) -> Result<Event, AsadoError> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.name) {
            return Err(AsadoError::EventAlreadyExists(event.name));
        }
        events.insert(event.name.clone(), event.clone());
        self.participants
            .write()
            .await
            .insert(event.name.clone(), Vec::new());
        Ok(event)
    }

    async fn get_event(&self, name: &str) -> Result<Option<Event>, AsadoError> {
        let events = self.events.read().await;
        Ok(events.get(name).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>, AsadoError> {
        let events = self.events.read().await;
        let mut listed: Vec<Event> = events.values().cloned().collect();
        listed.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(listed)
    }

    async fn delete_event(&self, name: &str) -> Result<bool, AsadoError> {
        let mut events = self.events.write().await;
        if events.remove(name).is_none() {
            return Ok(false);
        }
        self.participants.write().await.remove(name);
        self.expenses.write().await.retain(|e| e.event != name);
        Ok(true)
    }

    async fn add_participant(&self, event: &str, participant: &str) -> Result<(), AsadoError> {
        let mut participants = self.participants.write().await;
        let names = participants
            .get_mut(event)
            .ok_or_else(|| AsadoError::EventNotFound(event.to_string()))?;
        if names.iter().any(|n| n == participant) {
            return Err(AsadoError::ParticipantAlreadyExists(participant.to_string()));
        }
        names.push(participant.to_string());
        Ok(())
    }

    async fn list_participants(&self, event: &str) -> Result<Vec<String>, AsadoError> {
        let participants = self.participants.read().await;
        Ok(participants.get(event).cloned().unwrap_or_default())
    }

    async fn remove_participant(&self, event: &str, participant: &str) -> Result<bool, AsadoError> {
        let mut participants = self.participants.write().await;
        let Some(names) = participants.get_mut(event) else {
            return Ok(false);
        };
        let before = names.len();
        names.retain(|n| n != participant);
        if names.len() == before {
            return Ok(false);
        }
        self.expenses
            .write()
            .await
            .retain(|e| !(e.event == event && e.participant == participant));
        Ok(true)
    }

    async fn save_expense(&self, expense: Expense) -> Result<Expense, AsadoError> {
        let participants = self.participants.read().await;
        let names = participants
            .get(&expense.event)
            .ok_or_else(|| AsadoError::EventNotFound(expense.event.clone()))?;
        if !names.iter().any(|n| *n == expense.participant) {
            return Err(AsadoError::ParticipantNotFound(expense.participant));
        }
        let mut expenses = self.expenses.write().await;
        expenses.retain(|e| e.id != expense.id);
        expenses.push(expense.clone());
        Ok(expense)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, AsadoError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.iter().find(|e| e.id == expense_id).cloned())
    }

    async fn list_expenses(&self, event: &str) -> Result<Vec<Expense>, AsadoError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.iter().filter(|e| e.event == event).cloned().collect())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool, AsadoError> {
        let mut expenses = self.expenses.write().await;
        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        Ok(expenses.len() != before)
    }

    async fn list_custom_categories(&self) -> Result<Vec<String>, AsadoError> {
        Ok(self.custom_categories.read().await.clone())
    }

    async fn add_custom_category(&self, name: &str) -> Result<(), AsadoError> {
        let mut categories = self.custom_categories.write().await;
        if categories.iter().any(|c| c == name) {
            return Err(AsadoError::CategoryAlreadyExists(name.to_string()));
        }
        categories.push(name.to_string());
        Ok(())
    }

    async fn remove_custom_category(&self, name: &str) -> Result<bool, AsadoError> {
        let mut categories = self.custom_categories.write().await;
        let before = categories.len();
        categories.retain(|c| c != name);
        Ok(categories.len() != before)
    }
}
