//! JSON-file backed stores
//!
//! Each store owns one file holding a JSON array. A missing file reads as an
//! empty array. Every insertion rewrites the whole file; there is no locking
//! across processes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::application::StoreResult;
use crate::domain::{Expense, Group};
use crate::infrastructure::traits::{ExpenseStore, FileSystem, GroupStore};
use crate::infrastructure::{IoResultExt, JsonResultExt};

/// A JSON array persisted in a single file.
struct JsonFile {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonFile {
    fn load<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        if !self.fs.exists(&self.path) {
            debug!("load: {} missing, treating as empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = self
            .fs
            .read_to_string(&self.path)
            .with_path_context("read", &self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Vec<T>>(&content).with_path_context("parse", &self.path)
    }

    fn append<T: Serialize + DeserializeOwned>(&self, item: T) -> StoreResult<()> {
        let mut items: Vec<T> = self.load()?;
        items.push(item);
        debug!("append: writing {} items to {}", items.len(), self.path.display());
        self.overwrite(&items)
    }

    fn overwrite<T: Serialize>(&self, items: &[T]) -> StoreResult<()> {
        let content =
            serde_json::to_string_pretty(items).with_path_context("serialize", &self.path)?;
        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create parent of", &self.path)?;
        self.fs
            .write(&self.path, &content)
            .with_path_context("write", &self.path)
    }

    fn remove(&self) -> StoreResult<()> {
        if self.fs.exists(&self.path) {
            self.fs
                .remove_file(&self.path)
                .with_path_context("remove", &self.path)?;
        }
        Ok(())
    }
}

/// Group store backed by a JSON file (e.g. `groups.json`).
pub struct JsonGroupStore {
    file: JsonFile,
}

impl JsonGroupStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile {
                fs,
                path: path.into(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }
}

impl GroupStore for JsonGroupStore {
    fn load_groups(&self) -> StoreResult<Vec<Group>> {
        self.file.load()
    }

    fn add_group(&self, group: Group) -> StoreResult<()> {
        self.file.append(group)
    }

    fn clear(&self) -> StoreResult<()> {
        self.file.remove()
    }
}

/// Expense store backed by a JSON file (e.g. `expenses.json`).
pub struct JsonExpenseStore {
    file: JsonFile,
}

impl JsonExpenseStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile {
                fs,
                path: path.into(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn load_expenses(&self) -> StoreResult<Vec<Expense>> {
        self.file.load()
    }

    fn save_expense(&self, expense: Expense) -> StoreResult<()> {
        self.file.append(expense)
    }

    fn clear(&self) -> StoreResult<()> {
        self.file.remove()
    }
}
