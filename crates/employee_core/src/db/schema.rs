//! Schema definition for the `Employee` table.
//!
//! # Responsibility
//! - Create and drop the single application table.
//!
//! # Invariants
//! - `Id` is the caller-assigned primary key; SQLite never auto-assigns it.
//! - `FullName` carries a UNIQUE constraint; duplicate names fail inserts.

use super::DbResult;
use rusqlite::Connection;

pub const EMPLOYEE_TABLE: &str = "Employee";

const CREATE_EMPLOYEE_SQL: &str = "CREATE TABLE IF NOT EXISTS Employee (
    Id INTEGER PRIMARY KEY,
    FullName TEXT NOT NULL UNIQUE,
    BirthDate TEXT NOT NULL
);";

const DROP_EMPLOYEE_SQL: &str = "DROP TABLE IF EXISTS Employee;";

/// Creates the `Employee` table when absent. Idempotent.
pub fn create_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_EMPLOYEE_SQL)?;
    Ok(())
}

/// Drops the `Employee` table when present. Idempotent.
pub fn drop_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(DROP_EMPLOYEE_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create_schema, drop_schema};
    use crate::db::open_db_in_memory;

    #[test]
    fn create_schema_is_idempotent() {
        let conn = open_db_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
    }

    #[test]
    fn drop_schema_tolerates_missing_table() {
        let conn = open_db_in_memory().unwrap();
        drop_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
        drop_schema(&conn).unwrap();
    }
}
