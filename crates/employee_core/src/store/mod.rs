//! Data access wrapper over the `Employee` table.
//!
//! # Responsibility
//! - Serialize all store operations behind one process-wide lock.
//! - Open a scoped connection per call and release it on every exit path.
//! - Return semantic outcomes (`Option` for misses) in addition to typed
//!   transport errors.
//!
//! # Invariants
//! - At most one store operation executes at a time regardless of callers.
//! - A connection never outlives the call that opened it.
//! - The wrapper performs no retries; every failure is reported once.

use crate::db::{open_db, schema, DbError};
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

mod employee_sql;

pub use employee_sql::{delete_employee, insert_employee, select_all, update_employee};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for employee persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(EmployeeValidationError),
    Db(DbError),
    InvalidData(String),
    /// The internal lock was poisoned by a panicking holder.
    LockPoisoned,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
            Self::LockPoisoned => write!(f, "store lock poisoned by an earlier panic"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::LockPoisoned => None,
        }
    }
}

impl From<EmployeeValidationError> for StoreError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::from(value))
    }
}

/// File-backed employee store.
///
/// Constructed once at process start and passed by reference to the command
/// dispatcher; there is no ambient singleton. Every operation acquires the
/// lock, opens a fresh connection against `path`, performs exactly one
/// operation, and drops the connection when the scope ends.
pub struct EmployeeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl EmployeeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `Employee` table if absent.
    pub fn init_schema(&self) -> StoreResult<()> {
        self.with_connection("init_schema", |conn| {
            schema::create_schema(conn).map_err(StoreError::from)
        })
    }

    /// Drops the `Employee` table. Invoked only on an explicit reset flag.
    pub fn reset_schema(&self) -> StoreResult<()> {
        self.with_connection("reset_schema", |conn| {
            schema::drop_schema(conn).map_err(StoreError::from)
        })
    }

    /// Inserts one row; duplicate id or name propagates as a constraint
    /// error.
    pub fn insert(&self, employee: &Employee) -> StoreResult<()> {
        self.with_connection("insert", |conn| employee_sql::insert_employee(conn, employee))
    }

    /// Overwrites name/birth for the row matching `employee.id`; returns
    /// rows changed (0 when the id is absent).
    pub fn update(&self, employee: &Employee) -> StoreResult<usize> {
        self.with_connection("update", |conn| employee_sql::update_employee(conn, employee))
    }

    /// Deletes by id alone; returns rows removed. A miss is 0, not an error.
    pub fn delete_by_id(&self, id: EmployeeId) -> StoreResult<usize> {
        self.with_connection("delete", |conn| employee_sql::delete_employee(conn, id))
    }

    /// Loads the whole table, then scans linearly with the caller's
    /// predicate. Returns the first match; a miss is `None`, not an error.
    ///
    /// O(n) per lookup; there is no index beyond the primary key.
    pub fn find_first<P>(&self, predicate: P) -> StoreResult<Option<Employee>>
    where
        P: Fn(&Employee) -> bool,
    {
        let rows = self.find_all()?;
        Ok(rows.into_iter().find(|row| predicate(row)))
    }

    /// Loads and returns the entire table in storage-return order.
    pub fn find_all(&self) -> StoreResult<Vec<Employee>> {
        self.with_connection("select_all", employee_sql::select_all)
    }

    fn with_connection<T>(
        &self,
        op: &str,
        body: impl FnOnce(&rusqlite::Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let conn = open_db(&self.path)?;
        let result = body(&conn);
        match &result {
            Ok(_) => info!("event=store_op module=store status=ok op={op}"),
            Err(err) => info!("event=store_op module=store status=error op={op} error={err}"),
        }
        result
        // `conn` drops here, closing the scoped connection on every path.
    }
}
