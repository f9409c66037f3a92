//! End-to-end tests through ServiceContainer with JSON-file stores

mod common;

use std::path::PathBuf;

use tempfile::TempDir;

use common::{expense, group};
use warikan::application::ApplicationError;
use warikan::config::Settings;
use warikan::domain::DomainError;
use warikan::infrastructure::di::ServiceContainer;

/// Helper to create test settings with a custom data_dir
fn test_settings(data_dir: PathBuf) -> Settings {
    Settings {
        data_dir,
        groups_file: "groups.json".to_string(),
        expenses_file: "expenses.json".to_string(),
    }
}

#[test]
fn given_fresh_data_dir_when_recording_trip_then_settlements_survive_restart() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let container = ServiceContainer::new(test_settings(data_dir.clone()));

    // Act
    container
        .groups
        .add_group(group("trip", &["太朗", "花子", "次郎"]))
        .unwrap();
    container
        .expenses
        .add_expense(expense("trip", "ホテル", 30000, "太朗"))
        .unwrap();
    container
        .expenses
        .add_expense(expense("trip", "夕食", 10001, "花子"))
        .unwrap();

    // Assert: a new container over the same files sees the same state
    let reopened = ServiceContainer::new(test_settings(data_dir.clone()));
    let settlements = reopened.expenses.get_settlements("trip").unwrap();
    // total 40001, share 13334/13334/13333: 太朗 +16666, 花子 -3333, 次郎 -13333
    let triples: Vec<_> = settlements
        .iter()
        .map(|s| (s.from.as_str(), s.to.as_str(), s.amount))
        .collect();
    assert_eq!(
        triples,
        vec![("次郎", "太朗", 13333), ("花子", "太朗", 3333)]
    );
    assert!(data_dir.join("groups.json").exists());
    assert!(data_dir.join("expenses.json").exists());
}

#[test]
fn given_duplicate_group_name_when_adding_then_rejected() {
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(test_settings(temp.path().to_path_buf()));
    container
        .groups
        .add_group(group("group1", &["一郎", "二郎"]))
        .unwrap();

    let err = container
        .groups
        .add_group(group("group1", &["太朗", "花子"]))
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::GroupAlreadyExists(_))
    ));
    assert_eq!(container.groups.get_groups().unwrap().len(), 1);
}

#[test]
fn given_data_when_clearing_then_everything_removed() {
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(test_settings(temp.path().to_path_buf()));
    container
        .groups
        .add_group(group("group1", &["一郎", "二郎"]))
        .unwrap();
    container
        .expenses
        .add_expense(expense("group1", "ランチ", 2000, "一郎"))
        .unwrap();

    container.expenses.clear().unwrap();
    container.groups.clear().unwrap();

    assert!(container.groups.get_groups().unwrap().is_empty());
    assert!(matches!(
        container.expenses.get_settlements("group1").unwrap_err(),
        ApplicationError::Domain(DomainError::GroupNotFound(_))
    ));
}

#[test]
fn given_missing_data_dir_when_only_reading_then_directory_not_created() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("not-yet");

    // Act
    let container = ServiceContainer::new(test_settings(data_dir.clone()));
    let groups = container.groups.get_groups().unwrap();

    // Assert
    assert!(groups.is_empty());
    assert!(!data_dir.exists());
}
