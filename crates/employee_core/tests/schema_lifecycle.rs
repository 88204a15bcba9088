use employee_core::{Employee, EmployeeStore, StoreError};
use tempfile::TempDir;

#[test]
fn init_schema_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = EmployeeStore::new(dir.path().join("employee.db"));

    store.init_schema().unwrap();
    store.init_schema().unwrap();
}

#[test]
fn reset_then_init_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = EmployeeStore::new(dir.path().join("employee.db"));
    store.init_schema().unwrap();
    store.insert(&Employee::new(1, "Alice", "1990-01-01")).unwrap();

    store.reset_schema().unwrap();
    store.init_schema().unwrap();

    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn reset_without_existing_table_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = EmployeeStore::new(dir.path().join("employee.db"));

    store.reset_schema().unwrap();
}

#[test]
fn operations_before_init_fail_with_db_error() {
    let dir = TempDir::new().unwrap();
    let store = EmployeeStore::new(dir.path().join("employee.db"));

    let err = store.find_all().unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}
