//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{ExpenseService, GroupService};
use crate::config::Settings;
use crate::infrastructure::store::{JsonExpenseStore, JsonGroupStore};
use crate::infrastructure::traits::{ExpenseStore, FileSystem, GroupStore, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub groups: Arc<GroupService>,

    pub expenses: Arc<ExpenseService>,
}

impl ServiceContainer {
    /// Create a container backed by JSON files under `settings.data_dir`.
    ///
    /// Nothing is touched on disk here; the stores create `data_dir` on
    /// their first write.
    pub fn new(settings: Settings) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        debug!("ServiceContainer: data_dir={}", settings.data_dir.display());

        let group_store = Arc::new(JsonGroupStore::new(fs.clone(), settings.groups_path()));
        let expense_store = Arc::new(JsonExpenseStore::new(fs, settings.expenses_path()));

        Self::with_stores(settings, group_store, expense_store)
    }

    /// Create a service container with custom stores (for testing).
    pub fn with_stores(
        settings: Settings,
        group_store: Arc<dyn GroupStore>,
        expense_store: Arc<dyn ExpenseStore>,
    ) -> Self {
        let settings = Arc::new(settings);
        let groups = Arc::new(GroupService::new(group_store));
        let expenses = Arc::new(ExpenseService::new(expense_store, groups.clone()));

        Self {
            settings,
            groups,
            expenses,
        }
    }
}
