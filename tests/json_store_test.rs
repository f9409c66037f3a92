//! Tests for JSON stores over the FileSystem seam

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use warikan::application::StoreError;
use warikan::domain::{Expense, Group};
use warikan::infrastructure::store::{JsonExpenseStore, JsonGroupStore};
use warikan::infrastructure::traits::{ExpenseStore, FileSystem, GroupStore};

/// In-memory filesystem; optionally rejects every write
#[derive(Default)]
struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    read_only: bool,
}

impl MockFileSystem {
    fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.content(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn ensure_parent(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_appends_when_saving_expenses_then_whole_array_rewritten_in_order() {
    // Arrange
    let fs = Arc::new(MockFileSystem::default());
    let path = PathBuf::from("/data/expenses.json");
    let store = JsonExpenseStore::new(fs.clone(), &path);

    // Act
    store
        .save_expense(Expense::new("group1", "ランチ", 2000, "一郎"))
        .unwrap();
    store
        .save_expense(Expense::new("group1", "コーヒー", 600, "二郎"))
        .unwrap();

    // Assert
    let raw: serde_json::Value = serde_json::from_str(&fs.content(&path).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 2);
    assert_eq!(raw[0]["expenseName"], "ランチ");
    assert_eq!(raw[1]["groupName"], "group1");
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn given_read_only_filesystem_when_adding_group_then_io_error_and_nothing_stored() {
    // Arrange
    let fs = Arc::new(MockFileSystem::read_only());
    let store = JsonGroupStore::new(fs, "/data/groups.json");

    // Act
    let err = store
        .add_group(Group::new("group1", vec!["一郎".into(), "二郎".into()]))
        .unwrap_err();

    // Assert
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("groups.json"));
    assert!(store.load_groups().unwrap().is_empty());
}
