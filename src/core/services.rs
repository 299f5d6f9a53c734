use crate::constants::constants::{
    AMOUNT_DECIMAL_PLACES, CATEGORY_ADDED, CATEGORY_REMOVED, DATA_RESET, DEFAULT_CATEGORIES, EVENT_CREATED,
    EVENT_DELETED, EXPENSE_ADDED, EXPENSE_REMOVED, EXPENSES_EXPORTED, MAX_AMOUNT, MAX_CATEGORY_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, PARTICIPANT_ADDED, PARTICIPANT_REMOVED, SUMMARY_QUERIED,
};
use crate::core::engine::{BalanceCalculator, SettlementPlanner, SummaryAggregator};
use crate::core::errors::{AsadoError, FieldError};
use crate::core::models::{AppLog, Event, EventOverview, EventSummary, Expense};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::export::csv::expenses_to_csv;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::{Storage, retry::retry_once};
use log::{debug, info};
use rust_decimal::Decimal;
use serde_json::json;
use std::time::Duration;

const DEFAULT_SUMMARY_TTL: Duration = Duration::from_secs(300);

/// Application service for shared-expense events.
///
/// Collaborators are injected; the service keeps no state of its own beyond
/// the settlement tolerance and cache lifetime it was built with.
pub struct AsadoService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    planner: SettlementPlanner,
    summary_ttl: Duration,
}

impl<L: LoggingService, S: Storage, C: Cache> AsadoService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C) -> Self {
        AsadoService {
            storage,
            logging,
            cache,
            planner: SettlementPlanner::default(),
            summary_ttl: DEFAULT_SUMMARY_TTL,
        }
    }

    pub fn with_settlement_epsilon(mut self, epsilon: Decimal) -> Self {
        self.planner = SettlementPlanner::new(epsilon);
        self
    }

    pub fn with_summary_ttl(mut self, ttl: Duration) -> Self {
        self.summary_ttl = ttl;
        self
    }

    pub fn settlement_epsilon(&self) -> Decimal {
        self.planner.epsilon()
    }

    async fn require_event(&self, name: &str) -> Result<Event, AsadoError> {
        self.storage
            .get_event(name)
            .await?
            .ok_or_else(|| AsadoError::EventNotFound(name.to_string()))
    }

    async fn log_action(
        &self,
        event: Option<&str>,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), AsadoError> {
        self.logging.log_action(action, details, event).await
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), AsadoError> {
        if value.trim().is_empty() {
            return Err(AsadoError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        self.validate_optional_text(field, value, max_length)
    }

    fn validate_optional_text(&self, field: &str, value: &str, max_length: usize) -> Result<(), AsadoError> {
        if value.chars().count() > max_length {
            return Err(AsadoError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(AsadoError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} contains invalid characters", field),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, amount: Decimal) -> Result<(), AsadoError> {
        if amount <= Decimal::ZERO {
            return Err(AsadoError::InvalidAmount("Amount must be greater than 0".to_string()));
        }
        if amount > Decimal::from(MAX_AMOUNT) {
            return Err(AsadoError::InvalidAmount(format!("Amount cannot exceed {}", MAX_AMOUNT)));
        }
        if amount.normalize().scale() > AMOUNT_DECIMAL_PLACES {
            return Err(AsadoError::InvalidAmount(format!(
                "Amount cannot have more than {} decimal places",
                AMOUNT_DECIMAL_PLACES
            )));
        }
        Ok(())
    }

    // EVENTS

    pub async fn create_event(&self, name: &str) -> Result<Event, AsadoError> {
        self.validate_string_input("name", name, MAX_NAME_LENGTH)?;
        let event = self.storage.create_event(Event::new(name.trim().to_string())).await?;
        info!("Created event '{}'", event.name);

        self.log_action(Some(&event.name), EVENT_CREATED, json!({ "event": event.name }))
            .await?;
        Ok(event)
    }

    pub async fn list_events(&self) -> Result<Vec<EventOverview>, AsadoError> {
        let events = self.storage.list_events().await?;
        let mut overviews = Vec::with_capacity(events.len());
        for event in events {
            let participant_count = self.storage.list_participants(&event.name).await?.len();
            let expense_count = self.storage.list_expenses(&event.name).await?.len();
            overviews.push(EventOverview {
                name: event.name,
                created_at: event.created_at,
                participant_count,
                expense_count,
            });
        }
        Ok(overviews)
    }

    pub async fn delete_event(&self, name: &str) -> Result<(), AsadoError> {
        if !self.storage.delete_event(name).await? {
            return Err(AsadoError::EventNotFound(name.to_string()));
        }
        self.cache.invalidate_event(name).await?;
        info!("Deleted event '{}'", name);

        self.log_action(Some(name), EVENT_DELETED, json!({ "event": name })).await
    }

    // PARTICIPANTS

    pub async fn add_participant(&self, event: &str, participant: &str) -> Result<String, AsadoError> {
        self.validate_string_input("participant", participant, MAX_NAME_LENGTH)?;
        self.require_event(event).await?;

        let participant = participant.trim().to_string();
        self.storage.add_participant(event, &participant).await?;
        self.cache.invalidate_event(event).await?;
        debug!("Added participant '{}' to event '{}'", participant, event);

        self.log_action(
            Some(event),
            PARTICIPANT_ADDED,
            json!({ "event": event, "participant": participant }),
        )
        .await?;
        Ok(participant)
    }

    pub async fn list_participants(&self, event: &str) -> Result<Vec<String>, AsadoError> {
        self.require_event(event).await?;
        retry_once("list_participants", move || self.storage.list_participants(event)).await
    }

    /// Removes a participant together with the expenses they paid.
    pub async fn remove_participant(&self, event: &str, participant: &str) -> Result<(), AsadoError> {
        self.require_event(event).await?;
        if !self.storage.remove_participant(event, participant).await? {
            return Err(AsadoError::ParticipantNotFound(participant.to_string()));
        }
        self.cache.invalidate_event(event).await?;
        debug!("Removed participant '{}' from event '{}'", participant, event);

        self.log_action(
            Some(event),
            PARTICIPANT_REMOVED,
            json!({ "event": event, "participant": participant }),
        )
        .await
    }

    // EXPENSES

    pub async fn add_expense(
        &self,
        event: &str,
        participant: &str,
        category: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<Expense, AsadoError> {
        self.validate_amount_input(amount)?;
        self.validate_string_input("category", category, MAX_CATEGORY_LENGTH)?;
        self.validate_optional_text("description", description, MAX_DESCRIPTION_LENGTH)?;
        self.require_event(event).await?;

        let category = category.trim();
        if !self.list_categories().await?.iter().any(|c| c == category) {
            return Err(AsadoError::CategoryNotFound(category.to_string()));
        }

        let expense = self
            .storage
            .save_expense(Expense::new(event, participant, category, amount, description.trim()))
            .await?;
        self.cache.invalidate_event(event).await?;
        debug!("Added expense {} to event '{}'", expense.id, event);

        self.log_action(
            Some(event),
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "participant": expense.participant,
                "category": expense.category,
                "amount": expense.amount.to_string(),
            }),
        )
        .await?;
        Ok(expense)
    }

    pub async fn list_expenses(&self, event: &str) -> Result<Vec<Expense>, AsadoError> {
        self.require_event(event).await?;
        retry_once("list_expenses", move || self.storage.list_expenses(event)).await
    }

    pub async fn remove_expense(&self, expense_id: &str) -> Result<(), AsadoError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| AsadoError::ExpenseNotFound(expense_id.to_string()))?;
        self.storage.delete_expense(expense_id).await?;
        self.cache.invalidate_event(&expense.event).await?;

        self.log_action(
            Some(&expense.event),
            EXPENSE_REMOVED,
            json!({ "expense_id": expense.id, "amount": expense.amount.to_string() }),
        )
        .await
    }

    // CATEGORIES

    /// Default and custom categories, sorted.
    pub async fn list_categories(&self) -> Result<Vec<String>, AsadoError> {
        let mut categories: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
        categories.extend(self.storage.list_custom_categories().await?);
        categories.sort();
        Ok(categories)
    }

    pub async fn add_custom_category(&self, name: &str) -> Result<String, AsadoError> {
        self.validate_string_input("category", name, MAX_CATEGORY_LENGTH)?;
        let name = name.trim().to_string();
        if DEFAULT_CATEGORIES.contains(&name.as_str()) {
            return Err(AsadoError::CategoryAlreadyExists(name));
        }
        self.storage.add_custom_category(&name).await?;

        self.log_action(None, CATEGORY_ADDED, json!({ "category": name })).await?;
        Ok(name)
    }

    /// Only custom categories can be removed; existing expenses keep their category.
    pub async fn remove_custom_category(&self, name: &str) -> Result<(), AsadoError> {
        if !self.storage.remove_custom_category(name).await? {
            return Err(AsadoError::CategoryNotFound(name.to_string()));
        }
        self.log_action(None, CATEGORY_REMOVED, json!({ "category": name })).await
    }

    // SUMMARY

    /// Totals, balances, the settlement plan and category statistics for one event.
    ///
    /// # Errors
    /// `NoParticipants` and `NoExpenses` are empty states (see
    /// [`AsadoError::is_empty_state`]); everything else is a real failure.
    pub async fn event_summary(&self, event: &str) -> Result<EventSummary, AsadoError> {
        let record = self.require_event(event).await?;

        if let Some(summary) = self.cache.get_event_summary(event).await? {
            debug!("Serving cached summary for event '{}'", event);
            return Ok(summary);
        }

        // Taken before the snapshot; an invalidation after this point turns
        // the save below into a no-op
        let generation = self.cache.generation(event).await?;
        let participants = retry_once("list_participants", move || self.storage.list_participants(event)).await?;
        let expenses = retry_once("list_expenses", move || self.storage.list_expenses(event)).await?;

        let sheet = BalanceCalculator::compute_balances(&participants, &expenses)?;
        let plan = self.planner.plan(&sheet.balances);

        let summary = EventSummary {
            event: record,
            total: sheet.total,
            fair_share: sheet.fair_share,
            participant_count: participants.len(),
            expense_count: expenses.len(),
            totals_by_participant: BalanceCalculator::totals_by_participant(&expenses),
            totals_by_category: BalanceCalculator::totals_by_category(&expenses),
            balances: sheet.balances,
            transfers: plan.transfers,
            category_stats: SummaryAggregator::category_stats(&expenses),
        };

        self.cache
            .save_event_summary(event, &summary, generation, self.summary_ttl)
            .await?;

        self.log_action(
            Some(event),
            SUMMARY_QUERIED,
            json!({ "event": event, "transfers": summary.transfers.len() }),
        )
        .await?;

        Ok(summary)
    }

    // EXPORT

    pub async fn export_expenses_csv(&self, event: &str) -> Result<String, AsadoError> {
        let expenses = self.list_expenses(event).await?;
        if expenses.is_empty() {
            return Err(AsadoError::NoExpenses);
        }
        let csv = expenses_to_csv(&expenses)?;

        self.log_action(
            Some(event),
            EXPENSES_EXPORTED,
            json!({ "event": event, "rows": expenses.len() }),
        )
        .await?;
        Ok(csv)
    }

    // MAINTENANCE

    /// Deletes every event (with its participants and expenses) and every custom category.
    pub async fn reset_all(&self) -> Result<(), AsadoError> {
        let events = self.storage.list_events().await?;
        for event in &events {
            self.storage.delete_event(&event.name).await?;
        }
        let categories = self.storage.list_custom_categories().await?;
        for category in &categories {
            self.storage.remove_custom_category(category).await?;
        }
        self.cache.clear().await?;
        info!(
            "Reset removed {} events and {} custom categories",
            events.len(),
            categories.len()
        );

        self.log_action(
            None,
            DATA_RESET,
            json!({ "events": events.len(), "categories": categories.len() }),
        )
        .await
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, AsadoError> {
        self.logging.get_logs().await
    }
}
