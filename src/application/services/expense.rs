//! Expense registration and settlement

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::GroupService;
use crate::application::ApplicationResult;
use crate::domain::{
    calculate_settlements, compute_balances, Balance, DomainError, Expense, Group, Settlement,
};
use crate::infrastructure::traits::ExpenseStore;

/// Service for recording expenses and computing settlements.
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
    groups: Arc<GroupService>,
}

impl ExpenseService {
    /// Create a new expense service.
    pub fn new(store: Arc<dyn ExpenseStore>, groups: Arc<GroupService>) -> Self {
        Self { store, groups }
    }

    fn require_group(&self, name: &str) -> ApplicationResult<Group> {
        self.groups
            .get_group_by_name(name)?
            .ok_or_else(|| DomainError::GroupNotFound(name.to_string()).into())
    }

    /// Record an expense against an existing group.
    ///
    /// # Errors
    /// - `DomainError::GroupNotFound` if the group does not exist
    /// - `DomainError::PayerNotMember` if the payer is not in the group
    /// - store errors, unchanged
    ///
    /// The store is only called when both checks pass.
    pub fn add_expense(&self, candidate: Expense) -> ApplicationResult<()> {
        let group = self.require_group(&candidate.group_name)?;

        if !group.has_member(&candidate.payer) {
            debug!(
                "add_expense: payer {} not in group {}",
                candidate.payer, group.name
            );
            return Err(DomainError::PayerNotMember {
                payer: candidate.payer,
                group: group.name,
            }
            .into());
        }

        info!(
            "add_expense: group={} payer={} amount={}",
            candidate.group_name, candidate.payer, candidate.amount
        );
        self.store.save_expense(candidate)?;
        Ok(())
    }

    /// Expenses recorded for a group, in insertion order.
    pub fn get_expenses(&self, group_name: &str) -> ApplicationResult<Vec<Expense>> {
        self.require_group(group_name)?;
        self.expenses_of(group_name)
    }

    /// Per-member balances of a group, in declared member order.
    pub fn get_balances(&self, group_name: &str) -> ApplicationResult<Vec<Balance>> {
        let group = self.require_group(group_name)?;
        let expenses = self.expenses_of(group_name)?;
        Ok(compute_balances(&group.members, &expenses)?)
    }

    /// Payments that settle every member's balance in a group.
    pub fn get_settlements(&self, group_name: &str) -> ApplicationResult<Vec<Settlement>> {
        let group = self.require_group(group_name)?;
        let expenses = self.expenses_of(group_name)?;
        let settlements = calculate_settlements(&group.members, &expenses)?;
        debug!(
            "get_settlements: group={} expenses={} settlements={}",
            group_name,
            expenses.len(),
            settlements.len()
        );
        Ok(settlements)
    }

    /// Remove every expense.
    pub fn clear(&self) -> ApplicationResult<()> {
        Ok(self.store.clear()?)
    }

    fn expenses_of(&self, group_name: &str) -> ApplicationResult<Vec<Expense>> {
        Ok(self
            .store
            .load_expenses()?
            .into_iter()
            .filter(|e| e.group_name == group_name)
            .collect())
    }
}
