//! Row-level SQL for the `Employee` table.
//!
//! # Responsibility
//! - Keep SQL details inside the core persistence boundary.
//! - Map rows to [`Employee`] and reject invalid persisted state.
//!
//! # Invariants
//! - Write paths call `Employee::validate()` before SQL mutations.
//! - Read paths surface malformed persisted data instead of masking it.

use super::{StoreError, StoreResult};
use crate::model::employee::{Employee, EmployeeId};
use rusqlite::{params, Connection, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    Id,
    FullName,
    BirthDate
FROM Employee";

/// Inserts one row. Fails on duplicate `Id` or `FullName`.
pub fn insert_employee(conn: &Connection, employee: &Employee) -> StoreResult<()> {
    employee.validate()?;

    conn.execute(
        "INSERT INTO Employee (Id, FullName, BirthDate) VALUES (?1, ?2, ?3);",
        params![
            employee.id,
            employee.full_name.as_str(),
            employee.birth_date.as_str(),
        ],
    )?;

    Ok(())
}

/// Overwrites name and birth date for the row matching `employee.id`.
///
/// Returns the number of rows changed (0 when the id is absent).
pub fn update_employee(conn: &Connection, employee: &Employee) -> StoreResult<usize> {
    employee.validate()?;

    let changed = conn.execute(
        "UPDATE Employee SET FullName = ?1, BirthDate = ?2 WHERE Id = ?3;",
        params![
            employee.full_name.as_str(),
            employee.birth_date.as_str(),
            employee.id,
        ],
    )?;

    Ok(changed)
}

/// Deletes the row matching `id` alone. Returns rows removed (0 or 1).
pub fn delete_employee(conn: &Connection, id: EmployeeId) -> StoreResult<usize> {
    let removed = conn.execute("DELETE FROM Employee WHERE Id = ?1;", params![id])?;
    Ok(removed)
}

/// Loads every row in storage-return order.
pub fn select_all(conn: &Connection) -> StoreResult<Vec<Employee>> {
    let mut stmt = conn.prepare(EMPLOYEE_SELECT_SQL)?;
    let mut rows = stmt.query([])?;
    let mut employees = Vec::new();

    while let Some(row) = rows.next()? {
        employees.push(parse_employee_row(row)?);
    }

    Ok(employees)
}

fn parse_employee_row(row: &Row<'_>) -> StoreResult<Employee> {
    let raw_id: i64 = row.get("Id")?;
    let id = EmployeeId::try_from(raw_id).map_err(|_| {
        StoreError::InvalidData(format!("invalid id value `{raw_id}` in Employee.Id"))
    })?;

    let employee = Employee {
        id,
        full_name: row.get("FullName")?,
        birth_date: row.get("BirthDate")?,
    };
    employee.validate()?;
    Ok(employee)
}
