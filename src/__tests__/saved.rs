use uuid::Uuid;

use crate::renderer::{generate_sql, Dialect};
use crate::saved::{SavedQueryStore, StoreError};
use crate::state::{FilterCondition, FilterOperator, QueryBuilderState};

fn sample_state() -> QueryBuilderState {
    QueryBuilderState::new("users")
        .filter(FilterCondition::new("age", FilterOperator::Gt, "25"))
        .limit(10)
}

#[test]
fn save_freezes_the_sql_snapshot() {
    let mut store = SavedQueryStore::new();
    let st = sample_state();
    let expected = generate_sql(&st, Dialect::Postgres);

    let entry = store.save("adults", None, st, Dialect::Postgres);
    assert_eq!(entry.sql, expected);
    assert_eq!(entry.created_at, entry.updated_at);
    assert_eq!(store.len(), 1);
}

#[test]
fn update_state_recompiles_the_snapshot() {
    let mut store = SavedQueryStore::new();
    let id = store
        .save("adults", None, sample_state(), Dialect::Postgres)
        .id;

    let new_state = QueryBuilderState::new("accounts").limit(1);
    let updated = store
        .update_state(id, new_state.clone(), Dialect::Postgres)
        .expect("existing id");
    assert_eq!(updated.sql, generate_sql(&new_state, Dialect::Postgres));
    assert_eq!(updated.state, new_state);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn rename_keeps_state_and_sql() {
    let mut store = SavedQueryStore::new();
    let st = sample_state();
    let id = store.save("old name", None, st.clone(), Dialect::MySql).id;

    store.rename(id, "new name").expect("existing id");
    let entry = store.get(id).expect("still present");
    assert_eq!(entry.name, "new name");
    assert_eq!(entry.state, st);
}

#[test]
fn delete_removes_and_preserves_order() {
    let mut store = SavedQueryStore::new();
    let a = store.save("a", None, sample_state(), Dialect::Postgres).id;
    let b = store.save("b", None, sample_state(), Dialect::Postgres).id;
    let c = store.save("c", None, sample_state(), Dialect::Postgres).id;

    store.delete(b).expect("existing id");
    let names: Vec<&str> = store.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, ["a", "c"], "insertion order must survive deletion");
    assert!(store.get(a).is_some());
    assert!(store.get(c).is_some());
}

#[test]
fn unknown_id_yields_not_found() {
    let mut store = SavedQueryStore::new();
    let missing = Uuid::new_v4();

    let err = store.delete(missing).expect_err("nothing to delete");
    assert!(matches!(err, StoreError::NotFound { id } if id == missing));

    let err = store
        .update_state(missing, sample_state(), Dialect::Postgres)
        .expect_err("nothing to update");
    assert!(matches!(err, StoreError::NotFound { .. }));

    assert!(store.get(missing).is_none());
}

#[test]
fn json_round_trip_preserves_entries_and_order() {
    let mut store = SavedQueryStore::new();
    store.save("first", Some("desc".to_string()), sample_state(), Dialect::Postgres);
    store.save("second", None, QueryBuilderState::new("logs"), Dialect::MySql);

    let json = store.to_json().expect("serialize");
    let back = SavedQueryStore::from_json(&json).expect("deserialize");

    assert_eq!(back.len(), 2);
    let names: Vec<&str> = back.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
    for (orig, loaded) in store.iter().zip(back.iter()) {
        assert_eq!(orig, loaded);
    }
}

#[test]
fn loaded_sql_is_taken_verbatim_not_regenerated() {
    // sql — замороженный снимок: загрузка не перегенерирует его из state
    let json = r#"[{
        "id": "7f2c1e6a-9a1c-4c8e-8f33-0a4f9c2d1b5e",
        "name": "frozen",
        "state": {"table": "users"},
        "sql": "SELECT 1;",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }]"#;
    let store = SavedQueryStore::from_json(json).expect("deserialize");
    let entry = store.iter().next().expect("one entry");
    assert_eq!(entry.sql, "SELECT 1;");
    assert_eq!(entry.state.table, "users");
}

#[test]
fn broken_json_is_a_typed_error() {
    let err = SavedQueryStore::from_json("{not json").expect_err("broken input");
    assert!(matches!(err, StoreError::Json(_)));
}
