//! I/O boundary traits for testability
//!
//! These traits abstract persistence, allowing services to be tested with
//! in-memory or mock implementations and the stores to be swapped without
//! touching domain logic.

use std::io;
use std::path::Path;

use crate::application::StoreResult;
use crate::domain::{Expense, Group};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// Persistence for groups.
///
/// Each call either fully succeeds or fails; callers never see a partially
/// applied write.
pub trait GroupStore: Send + Sync {
    /// Load all groups in insertion order.
    fn load_groups(&self) -> StoreResult<Vec<Group>>;

    /// Persist a new group.
    fn add_group(&self, group: Group) -> StoreResult<()>;

    /// Remove all groups.
    fn clear(&self) -> StoreResult<()>;

    /// Look up a group by exact name. `None` is a normal outcome.
    fn get_group_by_name(&self, name: &str) -> StoreResult<Option<Group>> {
        Ok(self.load_groups()?.into_iter().find(|g| g.name == name))
    }
}

/// Persistence for expenses.
pub trait ExpenseStore: Send + Sync {
    /// Load all expenses of every group in insertion order.
    fn load_expenses(&self) -> StoreResult<Vec<Expense>>;

    /// Persist a new expense.
    fn save_expense(&self, expense: Expense) -> StoreResult<()>;

    /// Remove all expenses.
    fn clear(&self) -> StoreResult<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
