//! Employee domain model.
//!
//! # Responsibility
//! - Define the single persisted record type of the application.
//! - Validate field-level invariants before persistence.
//!
//! # Invariants
//! - `id` is assigned by the caller and never reused for another employee.
//! - `full_name` is unique across all rows (backed by a store constraint).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u32;

/// Canonical persisted record.
///
/// Serde field names match the external column naming of the `Employee`
/// table so exported rows keep the on-disk schema vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned primary key. The store never auto-increments.
    #[serde(rename = "Id")]
    pub id: EmployeeId,
    /// Display name, unique across all rows.
    #[serde(rename = "FullName")]
    pub full_name: String,
    /// Free-form date text; no format is enforced.
    #[serde(rename = "BirthDate")]
    pub birth_date: String,
}

impl Employee {
    /// Creates a record with a caller-provided id.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this record's lifetime.
    /// - This constructor does not validate field contents; call
    ///   [`Employee::validate`] before persisting.
    pub fn new(
        id: EmployeeId,
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            birth_date: birth_date.into(),
        }
    }

    /// Checks field-level invariants.
    ///
    /// # Errors
    /// - `EmptyFullName` when `full_name` is blank after trimming.
    /// - `EmptyBirthDate` when `birth_date` is blank after trimming.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyFullName);
        }
        if self.birth_date.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyBirthDate);
        }
        Ok(())
    }
}

/// Field-level invariant violations caught before any SQL runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyFullName,
    EmptyBirthDate,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFullName => write!(f, "full name must not be empty"),
            Self::EmptyBirthDate => write!(f, "birth date must not be empty"),
        }
    }
}

impl Error for EmployeeValidationError {}
