use litetask_core::{Filter, TodoStore};
use uuid::Uuid;

#[test]
fn add_trims_text_and_appends() {
    let mut store = TodoStore::new();

    let id = store.add_todo("  Buy milk  ").expect("non-empty add should create a todo");

    assert_eq!(store.total_count(), 1);
    let todo = &store.todos()[0];
    assert_eq!(todo.id, id);
    assert_eq!(todo.text, "Buy milk");
    assert!(!todo.completed);
}

#[test]
fn whitespace_only_add_is_a_silent_noop() {
    let mut store = TodoStore::new();

    assert_eq!(store.add_todo("   "), None);
    assert_eq!(store.add_todo(""), None);
    assert_eq!(store.add_todo("\t\n"), None);

    assert_eq!(store.total_count(), 0);
}

#[test]
fn total_count_equals_number_of_successful_adds() {
    let mut store = TodoStore::new();

    let inputs = ["one", "  ", "two", "", "three", "\t"];
    let created = inputs
        .iter()
        .filter(|input| store.add_todo(input).is_some())
        .count();

    assert_eq!(created, 3);
    assert_eq!(store.total_count(), 3);
}

#[test]
fn ids_are_unique_across_a_session() {
    let mut store = TodoStore::new();

    let a = store.add_todo("a").unwrap();
    let b = store.add_todo("b").unwrap();
    store.delete_todo(a);
    let c = store.add_todo("c").unwrap();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn delete_removes_and_second_delete_is_noop() {
    let mut store = TodoStore::new();

    let keep = store.add_todo("keep").unwrap();
    let gone = store.add_todo("drop").unwrap();

    store.delete_todo(gone);
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.todos()[0].id, keep);

    store.delete_todo(gone);
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.todos()[0].id, keep);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut store = TodoStore::new();
    store.add_todo("only one").unwrap();

    store.delete_todo(Uuid::new_v4());

    assert_eq!(store.total_count(), 1);
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = TodoStore::new();
    let id = store.add_todo("flip me").unwrap();

    store.toggle_complete(id);
    assert!(store.todos()[0].completed);

    store.toggle_complete(id);
    assert!(!store.todos()[0].completed);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut store = TodoStore::new();
    store.add_todo("untouched").unwrap();

    store.toggle_complete(Uuid::new_v4());

    assert!(!store.todos()[0].completed);
}

#[test]
fn toggle_changes_no_other_fields() {
    let mut store = TodoStore::new();
    let id = store.add_todo("stable fields").unwrap();
    let before = store.todos()[0].clone();

    store.toggle_complete(id);

    let after = &store.todos()[0];
    assert_eq!(after.id, before.id);
    assert_eq!(after.text, before.text);
    assert_eq!(after.created_at, before.created_at);
    assert_ne!(after.completed, before.completed);
}

#[test]
fn counts_partition_the_collection() {
    let mut store = TodoStore::new();
    let ids: Vec<_> = (0..5)
        .map(|n| store.add_todo(&format!("task {n}")).unwrap())
        .collect();

    store.toggle_complete(ids[1]);
    store.toggle_complete(ids[3]);

    assert_eq!(store.active_count(), 3);
    assert_eq!(store.completed_count(), 2);
    assert_eq!(store.active_count() + store.completed_count(), store.total_count());
}

#[test]
fn buy_milk_scenario() {
    let mut store = TodoStore::new();

    let id = store.add_todo("Buy milk").unwrap();
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.todos()[0].text, "Buy milk");
    assert!(!store.todos()[0].completed);

    store.toggle_complete(id);
    assert!(store.todos()[0].completed);
    assert_eq!(store.active_count(), 0);
    assert_eq!(store.completed_count(), 1);

    store.set_filter(Filter::Active);
    assert!(store.filtered_todos().is_empty());
}
