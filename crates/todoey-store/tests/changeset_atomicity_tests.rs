// Integration tests for all-or-nothing saves and referential checks

use todoey_core::errors::TodoeyError;
use todoey_core::model::{Category, CategoryDraft, CategoryId, Item, ItemDraft, ItemId};
use todoey_core::query::{CategoryQuery, ItemQuery};
use todoey_core::rules::DeletePolicy;
use todoey_store::{Change, ChangeSet, StorageEngine};

fn category(name: &str) -> Category {
    CategoryDraft::named(name).into_category().unwrap()
}

fn item(parent: &Category, title: &str) -> Item {
    ItemDraft::new(parent.id.clone(), title).into_item().unwrap()
}

fn seeded() -> (StorageEngine, Category, Item) {
    let mut engine = StorageEngine::open_in_memory().unwrap();
    let work = category("Work");
    let report = item(&work, "Finish report");
    engine
        .save(ChangeSet::from_iter([
            Change::InsertCategory(work.clone()),
            Change::InsertItem(report.clone()),
        ]))
        .unwrap();
    (engine, work, report)
}

#[test]
fn test_failed_change_rolls_back_whole_set() {
    // Given: a seeded store
    let (mut engine, work, report) = seeded();

    // When: a set holds a valid insert followed by a duplicate id
    let fresh = item(&work, "Print paper");
    let result = engine.save(ChangeSet::from_iter([
        Change::InsertItem(fresh.clone()),
        Change::InsertItem(report.clone()),
    ]));

    // Then: the save fails and the valid insert is not visible
    assert!(matches!(result, Err(TodoeyError::WriteFailed { .. })));
    assert!(engine.get_item(&fresh.id).unwrap().is_none());
    let items = engine.fetch_items(&ItemQuery::for_category(work.id)).unwrap();
    assert_eq!(items, vec![report]);
}

#[test]
fn test_missing_parent_rolls_back_earlier_changes() {
    let (mut engine, _work, _report) = seeded();
    let garden = category("Garden");
    let orphan = ItemDraft::new(CategoryId::from("no-such-category"), "Dig")
        .into_item()
        .unwrap();

    let result = engine.save(ChangeSet::from_iter([
        Change::InsertCategory(garden.clone()),
        Change::InsertItem(orphan),
    ]));

    assert_eq!(
        result,
        Err(TodoeyError::ParentNotFound {
            category_id: "no-such-category".to_string()
        })
    );
    assert!(engine.get_category(&garden.id).unwrap().is_none());
    assert_eq!(engine.fetch_categories(&CategoryQuery::all()).unwrap().len(), 1);
}

#[test]
fn test_stale_item_ids_are_not_found() {
    let (mut engine, work, report) = seeded();
    engine
        .save(ChangeSet::single(Change::DeleteItem(report.id.clone())))
        .unwrap();

    let delete_again = engine.save(ChangeSet::single(Change::DeleteItem(report.id.clone())));
    assert!(matches!(delete_again, Err(TodoeyError::ItemNotFound { .. })));

    let update_stale = engine.save(ChangeSet::single(Change::UpdateItem(report.toggled())));
    assert!(matches!(update_stale, Err(TodoeyError::ItemNotFound { .. })));

    let unknown = engine.save(ChangeSet::single(Change::DeleteItem(ItemId::from("ghost"))));
    assert!(matches!(unknown, Err(TodoeyError::ItemNotFound { ref item_id }) if item_id == "ghost"));

    assert_eq!(engine.count_items(&work.id).unwrap(), 0);
}

#[test]
fn test_reject_policy_keeps_non_empty_category() {
    let (mut engine, work, report) = seeded();

    let result = engine.save(ChangeSet::single(Change::DeleteCategory {
        category_id: work.id.clone(),
        policy: DeletePolicy::Reject,
    }));

    assert_eq!(
        result,
        Err(TodoeyError::CategoryNotEmpty {
            category_id: work.id.to_string(),
            item_count: 1,
        })
    );
    assert!(engine.get_category(&work.id).unwrap().is_some());
    assert!(engine.get_item(&report.id).unwrap().is_some());
}

#[test]
fn test_cascade_policy_removes_items() {
    let (mut engine, work, report) = seeded();

    engine
        .save(ChangeSet::single(Change::DeleteCategory {
            category_id: work.id.clone(),
            policy: DeletePolicy::Cascade,
        }))
        .unwrap();

    assert!(engine.get_category(&work.id).unwrap().is_none());
    assert!(engine.get_item(&report.id).unwrap().is_none());
}

#[test]
fn test_empty_category_deletes_under_reject() {
    let mut engine = StorageEngine::open_in_memory().unwrap();
    let empty = category("Empty");
    engine
        .save(ChangeSet::single(Change::InsertCategory(empty.clone())))
        .unwrap();

    engine
        .save(ChangeSet::single(Change::DeleteCategory {
            category_id: empty.id.clone(),
            policy: DeletePolicy::Reject,
        }))
        .unwrap();

    let missing = engine.save(ChangeSet::single(Change::DeleteCategory {
        category_id: empty.id.clone(),
        policy: DeletePolicy::Reject,
    }));
    assert!(matches!(missing, Err(TodoeyError::CategoryNotFound { .. })));
}

#[test]
fn test_empty_changeset_is_noop() {
    let (mut engine, work, _report) = seeded();
    engine.save(ChangeSet::new()).unwrap();
    assert_eq!(engine.count_items(&work.id).unwrap(), 1);
}
