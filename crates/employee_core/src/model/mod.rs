//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and CLI layers.
//!
//! # Invariants
//! - Every record is identified by a caller-assigned numeric `id`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod employee;
