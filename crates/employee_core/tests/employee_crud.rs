use employee_core::db::DbError;
use employee_core::{Employee, EmployeeService, EmployeeStore, StoreError, UpsertOutcome};
use tempfile::TempDir;

fn test_store(dir: &TempDir) -> EmployeeStore {
    let store = EmployeeStore::new(dir.path().join("employee.db"));
    store.init_schema().unwrap();
    store
}

#[test]
fn create_then_get_returns_inserted_fields() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    service
        .create(&Employee::new(1, "Alice", "1990-01-01"))
        .unwrap();

    let loaded = service.get(1).unwrap().expect("row should exist");
    assert_eq!(loaded, Employee::new(1, "Alice", "1990-01-01"));
}

#[test]
fn rows_survive_across_scoped_connections() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    store.insert(&Employee::new(1, "Alice", "1990-01-01")).unwrap();
    store.insert(&Employee::new(2, "Bob", "1985-06-15")).unwrap();

    // Each call opened and dropped its own connection; data must persist.
    let rows = store.find_all().unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn duplicate_id_leaves_existing_row_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    service
        .create(&Employee::new(1, "Alice", "1990-01-01"))
        .unwrap();
    let err = service
        .create(&Employee::new(1, "Mallory", "2000-01-01"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(DbError::Constraint(_))));

    let loaded = service.get(1).unwrap().expect("row should exist");
    assert_eq!(loaded.full_name, "Alice");
    assert_eq!(loaded.birth_date, "1990-01-01");
}

#[test]
fn duplicate_name_leaves_existing_row_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    service
        .create(&Employee::new(1, "Alice", "1990-01-01"))
        .unwrap();
    let err = service
        .create(&Employee::new(2, "Alice", "2000-01-01"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(DbError::Constraint(_))));

    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn upsert_existing_id_replaces_name_and_birth() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    service
        .create(&Employee::new(1, "Alice", "1990-01-01"))
        .unwrap();
    let outcome = service
        .upsert(&Employee::new(1, "Alice Smith", "1990-01-02"))
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);

    let loaded = service.get(1).unwrap().expect("row should exist");
    assert_eq!(loaded, Employee::new(1, "Alice Smith", "1990-01-02"));
}

#[test]
fn upsert_missing_id_inserts_new_row() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    let outcome = service
        .upsert(&Employee::new(5, "Carol", "1979-12-31"))
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Inserted);

    let loaded = service.get(5).unwrap().expect("row should exist");
    assert_eq!(loaded, Employee::new(5, "Carol", "1979-12-31"));
}

#[test]
fn remove_existing_id_deletes_exactly_one_row() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    service
        .create(&Employee::new(1, "Alice", "1990-01-01"))
        .unwrap();
    service
        .create(&Employee::new(2, "Bob", "1985-06-15"))
        .unwrap();

    assert_eq!(service.remove(1).unwrap(), 1);
    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn remove_missing_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    assert_eq!(service.remove(42).unwrap(), 0);
}

#[test]
fn get_missing_id_returns_none_not_error() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let service = EmployeeService::new(&store);

    assert!(service.get(42).unwrap().is_none());
}

#[test]
fn find_first_returns_first_match_in_storage_order() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    store.insert(&Employee::new(1, "Alice", "1990-01-01")).unwrap();
    store.insert(&Employee::new(2, "Bob", "1990-01-01")).unwrap();
    store.insert(&Employee::new(3, "Carol", "1990-01-01")).unwrap();

    let hit = store
        .find_first(|row| row.birth_date == "1990-01-01")
        .unwrap()
        .expect("a row should match");
    assert_eq!(hit.id, 1);
}

#[test]
fn validation_failure_never_reaches_sql() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let err = store.insert(&Employee::new(1, "  ", "1990-01-01")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.find_all().unwrap().is_empty());
}
