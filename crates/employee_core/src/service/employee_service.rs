//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for the command dispatcher.
//! - Delegate persistence to the data access wrapper.
//!
//! # Invariants
//! - Service APIs never bypass store validation or locking.
//! - "No matching row" is a value (`Option`/count), never an error.

use crate::model::employee::{Employee, EmployeeId};
use crate::store::{EmployeeStore, StoreResult};

/// Use-case wrapper for employee CRUD operations.
///
/// Borrows the store built at process start; nothing here owns global
/// state.
pub struct EmployeeService<'store> {
    store: &'store EmployeeStore,
}

impl<'store> EmployeeService<'store> {
    pub fn new(store: &'store EmployeeStore) -> Self {
        Self { store }
    }

    /// Inserts a new employee.
    ///
    /// Duplicate id or name propagates as a constraint error unchanged.
    pub fn create(&self, employee: &Employee) -> StoreResult<()> {
        self.store.insert(employee)
    }

    /// Looks up one employee by id. A miss returns `None`.
    pub fn get(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        self.store.find_first(|row| row.id == id)
    }

    /// Returns every employee in storage-return order.
    pub fn list(&self) -> StoreResult<Vec<Employee>> {
        self.store.find_all()
    }

    /// Replaces name/birth for an existing id, inserting when absent.
    ///
    /// Upsert is the intended semantics for the update command: update on a
    /// missing id falls back to insert with the given fields.
    pub fn upsert(&self, employee: &Employee) -> StoreResult<UpsertOutcome> {
        match self.get(employee.id)? {
            Some(_) => {
                self.store.update(employee)?;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                self.store.insert(employee)?;
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// Deletes by id alone; returns rows removed. A miss removes 0 rows and
    /// is not an error.
    pub fn remove(&self, id: EmployeeId) -> StoreResult<usize> {
        self.store.delete_by_id(id)
    }
}

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated,
    Inserted,
}
