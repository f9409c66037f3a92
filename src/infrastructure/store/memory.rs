//! In-memory stores

use std::sync::RwLock;

use crate::application::StoreResult;
use crate::domain::{Expense, Group};
use crate::infrastructure::traits::{ExpenseStore, GroupStore};

/// Group store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryGroupStore {
    groups: RwLock<Vec<Group>>,
}

impl InMemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `groups`.
    pub fn with_groups(groups: Vec<Group>) -> Self {
        Self {
            groups: RwLock::new(groups),
        }
    }
}

impl GroupStore for InMemoryGroupStore {
    fn load_groups(&self) -> StoreResult<Vec<Group>> {
        Ok(self.groups.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn add_group(&self, group: Group) -> StoreResult<()> {
        self.groups
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(group);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.groups.write().unwrap_or_else(|e| e.into_inner()).clear();
        Ok(())
    }
}

/// Expense store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `expenses`.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn load_expenses(&self) -> StoreResult<Vec<Expense>> {
        Ok(self
            .expenses
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save_expense(&self, expense: Expense) -> StoreResult<()> {
        self.expenses
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(expense);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.expenses
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        Ok(())
    }
}
