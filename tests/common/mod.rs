//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use warikan::application::{StoreError, StoreResult};
use warikan::domain::{Expense, Group};
use warikan::infrastructure::traits::{ExpenseStore, GroupStore};

pub fn group(name: &str, members: &[&str]) -> Group {
    Group::new(name, members.iter().map(|m| m.to_string()).collect())
}

pub fn expense(group: &str, name: &str, amount: u64, payer: &str) -> Expense {
    Expense::new(group, name, amount, payer)
}

fn unavailable() -> StoreError {
    StoreError::Io {
        context: "mock store".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "store unavailable"),
    }
}

/// Expense store that records saves and can be told to fail
pub struct MockExpenseStore {
    pub existing: Vec<Expense>,
    saved: Mutex<Vec<Expense>>,
    should_fail: bool,
}

impl MockExpenseStore {
    pub fn new(existing: Vec<Expense>) -> Self {
        Self {
            existing,
            saved: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            existing: Vec::new(),
            saved: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn saved(&self) -> Vec<Expense> {
        self.saved.lock().unwrap().clone()
    }
}

impl ExpenseStore for MockExpenseStore {
    fn load_expenses(&self) -> StoreResult<Vec<Expense>> {
        if self.should_fail {
            return Err(unavailable());
        }
        Ok(self.existing.clone())
    }

    fn save_expense(&self, expense: Expense) -> StoreResult<()> {
        if self.should_fail {
            return Err(unavailable());
        }
        self.saved.lock().unwrap().push(expense);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Group store that records additions and can be told to fail
pub struct MockGroupStore {
    pub existing: Vec<Group>,
    added: Mutex<Vec<Group>>,
    should_fail: bool,
}

impl MockGroupStore {
    pub fn new(existing: Vec<Group>) -> Self {
        Self {
            existing,
            added: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            existing: Vec::new(),
            added: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn added(&self) -> Vec<Group> {
        self.added.lock().unwrap().clone()
    }
}

impl GroupStore for MockGroupStore {
    fn load_groups(&self) -> StoreResult<Vec<Group>> {
        if self.should_fail {
            return Err(unavailable());
        }
        Ok(self.existing.clone())
    }

    fn add_group(&self, group: Group) -> StoreResult<()> {
        if self.should_fail {
            return Err(unavailable());
        }
        self.added.lock().unwrap().push(group);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        Ok(())
    }
}
