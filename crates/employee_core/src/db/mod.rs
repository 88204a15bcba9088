//! SQLite bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the employee store.
//! - Create and drop the `Employee` table on demand.
//!
//! # Invariants
//! - Schema setup is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - Application data is never read or written before `create_schema`
//!   has succeeded on the target database.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A primary-key or unique-constraint violation, separated from
    /// transport errors so callers can report duplicates distinctly.
    Constraint(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Constraint(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, ref message) = value {
            if failure.code == rusqlite::ErrorCode::ConstraintViolation {
                let detail = message
                    .clone()
                    .unwrap_or_else(|| failure.to_string());
                return Self::Constraint(detail);
            }
        }
        Self::Sqlite(value)
    }
}
