use crate::core::errors::AsadoError;
use crate::core::models::{Balance, BalanceSheet, Expense};
use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Turns raw expenses into totals and per-participant balances.
///
/// Every expense is split evenly across all participants of the event, so a
/// participant's balance is what they paid minus `total / participant_count`.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes one balance per participant, in the order `participants` lists them.
    ///
    /// Participants without expenses paid nothing and owe the full fair share.
    /// Expenses paid by someone outside `participants` still count towards the
    /// total but get no balance row.
    ///
    /// # Errors
    /// * `NoParticipants` if `participants` is empty.
    /// * `NoExpenses` if `expenses` is empty; callers treat this as an empty state.
    pub fn compute_balances(participants: &[String], expenses: &[Expense]) -> Result<BalanceSheet, AsadoError> {
        if participants.is_empty() {
            return Err(AsadoError::NoParticipants);
        }
        if expenses.is_empty() {
            return Err(AsadoError::NoExpenses);
        }

        let total: Decimal = expenses.iter().map(|e| e.amount).sum();
        let fair_share = total / Decimal::from(participants.len());
        let paid_by = Self::totals_by_participant(expenses);

        let balances = participants
            .iter()
            .map(|participant| {
                let paid = paid_by.get(participant).copied().unwrap_or(Decimal::ZERO);
                Balance {
                    participant: participant.clone(),
                    paid,
                    balance: paid - fair_share,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Computed {} balances: total={}, fair_share={}",
            balances.len(),
            total,
            fair_share
        );

        Ok(BalanceSheet {
            total,
            fair_share,
            balances,
        })
    }

    pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category.clone()).or_insert(Decimal::ZERO) += expense.amount;
        }
        totals
    }

    pub fn totals_by_participant(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.participant.clone()).or_insert(Decimal::ZERO) += expense.amount;
        }
        totals
    }
}
