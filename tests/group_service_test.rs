//! Tests for GroupService

mod common;

use std::sync::Arc;

use rstest::rstest;

use common::{group, MockGroupStore};
use warikan::application::services::GroupService;
use warikan::application::ApplicationError;
use warikan::domain::DomainError;
use warikan::infrastructure::store::InMemoryGroupStore;
use warikan::util::testing;

#[test]
fn given_valid_group_when_adding_then_store_receives_it() {
    // Arrange
    testing::init_test_setup();
    let store = Arc::new(MockGroupStore::new(vec![]));
    let service = GroupService::new(store.clone());
    let candidate = group("group1", &["一郎", "二郎"]);

    // Act
    service.add_group(candidate.clone()).unwrap();

    // Assert
    assert_eq!(store.added(), vec![candidate]);
}

#[rstest]
#[case::empty_name(group("", &["一郎", "二郎"]), vec!["グループ名は必須です"])]
#[case::single_member(group("group1", &["一郎"]), vec!["メンバーは2人以上必要です"])]
#[case::duplicate_member(group("group1", &["一郎", "一郎"]), vec!["メンバー名が重複しています"])]
fn given_invalid_group_when_adding_then_rejected_and_not_persisted(
    #[case] candidate: warikan::domain::Group,
    #[case] expected: Vec<&str>,
) {
    // Arrange
    let store = Arc::new(MockGroupStore::new(vec![]));
    let service = GroupService::new(store.clone());

    // Act
    let err = service.add_group(candidate).unwrap_err();

    // Assert
    match err {
        ApplicationError::Domain(DomainError::InvalidGroup(messages)) => {
            assert_eq!(messages, expected)
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(store.added().is_empty());
}

#[test]
fn given_existing_name_when_adding_then_group_already_exists() {
    // Arrange
    let store = Arc::new(MockGroupStore::new(vec![group("group1", &["太朗", "花子"])]));
    let service = GroupService::new(store.clone());

    // Act
    let err = service
        .add_group(group("group1", &["一郎", "二郎"]))
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::GroupAlreadyExists(ref name)) if name == "group1"
    ));
    assert!(store.added().is_empty());
}

#[test]
fn given_failing_store_when_adding_then_store_error_propagates() {
    let service = GroupService::new(Arc::new(MockGroupStore::failing()));

    let err = service
        .add_group(group("group1", &["一郎", "二郎"]))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Store(_)));
}

#[test]
fn given_groups_when_querying_then_lookup_and_listing_preserve_order() {
    // Arrange
    let service = GroupService::new(Arc::new(InMemoryGroupStore::new()));
    service.add_group(group("group1", &["一郎", "二郎"])).unwrap();
    service.add_group(group("group2", &["太朗", "花子", "次郎"])).unwrap();

    // Act
    let found = service.get_group_by_name("group2").unwrap();
    let missing = service.get_group_by_name("group3").unwrap();
    let all = service.get_groups().unwrap();

    // Assert
    assert_eq!(found, Some(group("group2", &["太朗", "花子", "次郎"])));
    assert_eq!(missing, None);
    let names: Vec<_> = all.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["group1", "group2"]);
}
