//! Menu domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field normalization so every entry point validates the same way.
//!
//! # Invariants
//! - Every menu and item is identified by a stable UUID.
//! - Deletion is a hard delete; removed subtrees do not linger.

pub mod menu;
