//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository inputs are already normalized by the service layer.
//! - Repository APIs return semantic errors (`MenuNotFound`, `ItemNotFound`)
//!   in addition to DB transport errors.

pub mod menu_repo;
