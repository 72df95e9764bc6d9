//! Generic service entity model.
//!
//! # Responsibility
//! - Define the schema-parameterized record shared by every management and
//!   diagnostics descriptor kind.
//! - Keep field storage, transforms and access checks in one place so kinds
//!   only declare their schema.
//!
//! # Invariants
//! - Field names are matched case-insensitively and stored lower-cased.
//! - Undeclared names are rejected on both read and write.

pub mod error;
pub mod record;
pub mod schema;
pub mod value;
